//! Unit conversion for the length (base µm) and time (base ms) axes.
//!
//! Stored values are always in base units. A unit selection only changes how
//! user text is normalized and how results are denormalized for display:
//! `display = base * factor`, `base = display / factor`.

use crate::domain::{NmrError, NmrResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LengthUnit {
    #[default]
    #[serde(rename = "µm", alias = "um")]
    Micrometer,
    #[serde(rename = "nm")]
    Nanometer,
}

impl LengthUnit {
    pub const ALL: [Self; 2] = [Self::Micrometer, Self::Nanometer];

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Micrometer => "µm",
            Self::Nanometer => "nm",
        }
    }
}

impl Display for LengthUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = NmrError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        match symbol.trim() {
            "µm" | "um" => Ok(Self::Micrometer),
            "nm" => Ok(Self::Nanometer),
            other => Err(NmrError::InvalidUnit {
                axis: "length",
                symbol: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeUnit {
    #[default]
    #[serde(rename = "ms")]
    Millisecond,
    #[serde(rename = "s")]
    Second,
}

impl TimeUnit {
    pub const ALL: [Self; 2] = [Self::Millisecond, Self::Second];

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Millisecond => "ms",
            Self::Second => "s",
        }
    }
}

impl Display for TimeUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for TimeUnit {
    type Err = NmrError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        match symbol.trim() {
            "ms" => Ok(Self::Millisecond),
            "s" => Ok(Self::Second),
            other => Err(NmrError::InvalidUnit {
                axis: "time",
                symbol: other.to_string(),
            }),
        }
    }
}

/// Conversion factor table relative to the base units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitSystem {
    micrometer: f64,
    nanometer: f64,
    millisecond: f64,
    second: f64,
}

impl Default for UnitSystem {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl UnitSystem {
    pub const STANDARD: Self = Self {
        micrometer: 1.0,
        nanometer: 1000.0,
        millisecond: 1.0,
        second: 0.001,
    };

    pub const fn length_factor(&self, unit: LengthUnit) -> f64 {
        match unit {
            LengthUnit::Micrometer => self.micrometer,
            LengthUnit::Nanometer => self.nanometer,
        }
    }

    pub const fn time_factor(&self, unit: TimeUnit) -> f64 {
        match unit {
            TimeUnit::Millisecond => self.millisecond,
            TimeUnit::Second => self.second,
        }
    }

    pub fn normalize_length(&self, value: f64, unit: LengthUnit) -> f64 {
        value / self.length_factor(unit)
    }

    pub fn denormalize_length(&self, base_value: f64, unit: LengthUnit) -> f64 {
        base_value * self.length_factor(unit)
    }

    pub fn normalize_time(&self, value: f64, unit: TimeUnit) -> f64 {
        value / self.time_factor(unit)
    }

    pub fn denormalize_time(&self, base_value: f64, unit: TimeUnit) -> f64 {
        base_value * self.time_factor(unit)
    }

    /// String-keyed variants for adapters that pass raw unit symbols.
    pub fn normalize(&self, value: f64, symbol: &str) -> NmrResult<f64> {
        match self.resolve(symbol)? {
            AnyUnit::Length(unit) => Ok(self.normalize_length(value, unit)),
            AnyUnit::Time(unit) => Ok(self.normalize_time(value, unit)),
        }
    }

    pub fn denormalize(&self, base_value: f64, symbol: &str) -> NmrResult<f64> {
        match self.resolve(symbol)? {
            AnyUnit::Length(unit) => Ok(self.denormalize_length(base_value, unit)),
            AnyUnit::Time(unit) => Ok(self.denormalize_time(base_value, unit)),
        }
    }

    pub fn area_to_display(&self, base_area: f64, unit: LengthUnit) -> f64 {
        base_area * self.length_factor(unit).powi(2)
    }

    pub fn volume_to_display(&self, base_volume: f64, unit: LengthUnit) -> f64 {
        base_volume * self.length_factor(unit).powi(3)
    }

    pub fn inverse_length_to_display(&self, base_value: f64, unit: LengthUnit) -> f64 {
        base_value / self.length_factor(unit)
    }

    fn resolve(&self, symbol: &str) -> NmrResult<AnyUnit> {
        if let Ok(unit) = symbol.parse::<LengthUnit>() {
            return Ok(AnyUnit::Length(unit));
        }
        if let Ok(unit) = symbol.parse::<TimeUnit>() {
            return Ok(AnyUnit::Time(unit));
        }
        Err(NmrError::InvalidUnit {
            axis: "length or time",
            symbol: symbol.trim().to_string(),
        })
    }
}

enum AnyUnit {
    Length(LengthUnit),
    Time(TimeUnit),
}
