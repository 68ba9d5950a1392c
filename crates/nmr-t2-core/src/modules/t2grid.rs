use crate::common::constants::DEFAULT_T2_GRID_MS;
use crate::common::units::{TimeUnit, UnitSystem};
use crate::domain::{Advised, Advisory, AdvisoryKind, NmrError, NmrResult};
use crate::numerics::is_strictly_increasing;
use serde::Serialize;

/// Decay-time samples in milliseconds, all finite and positive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct T2Grid {
    samples: Vec<f64>,
}

impl Default for T2Grid {
    fn default() -> Self {
        Self {
            samples: DEFAULT_T2_GRID_MS.to_vec(),
        }
    }
}

impl T2Grid {
    pub fn from_samples(samples: Vec<f64>) -> NmrResult<Self> {
        if samples.is_empty() {
            return Err(NmrError::invalid_parameter(
                "T2 grid length",
                0.0,
                "at least one sample is required",
            ));
        }
        if let Some(bad) = samples
            .iter()
            .copied()
            .find(|sample| !sample.is_finite() || *sample <= 0.0)
        {
            return Err(NmrError::invalid_parameter(
                "T2 sample",
                bad,
                "samples must be finite and positive",
            ));
        }
        Ok(Self { samples })
    }

    /// Parses user text expressed in `unit`. Any bad token discards the whole
    /// list in favour of the default grid.
    pub fn parse(raw: &str, unit: TimeUnit) -> Advised<Self> {
        Self::parse_with_units(raw, unit, &UnitSystem::STANDARD)
    }

    pub fn parse_with_units(raw: &str, unit: TimeUnit, units: &UnitSystem) -> Advised<Self> {
        match parse_samples(raw, unit, units) {
            Ok(samples) => Advised::clean(Self { samples }),
            Err(reason) => Advised::with_advisory(
                Self::default(),
                Advisory::new(AdvisoryKind::DefaultT2Grid, reason),
            ),
        }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn is_strictly_increasing(&self) -> bool {
        is_strictly_increasing(&self.samples)
    }

    pub fn to_display(&self, units: &UnitSystem, unit: TimeUnit) -> Vec<f64> {
        self.samples
            .iter()
            .map(|sample| units.denormalize_time(*sample, unit))
            .collect()
    }
}

fn parse_samples(raw: &str, unit: TimeUnit, units: &UnitSystem) -> Result<Vec<f64>, String> {
    let mut samples = Vec::new();
    for (index, token) in raw.split(',').enumerate() {
        let position = index + 1;
        let token = token.trim();
        if token.is_empty() {
            return Err(format!("entry {position} is empty"));
        }

        let value = token
            .parse::<f64>()
            .map_err(|_| format!("entry {position} '{token}' is not a number"))?;
        let sample = units.normalize_time(value, unit);
        if !sample.is_finite() || sample <= 0.0 {
            return Err(format!("entry {position} '{token}' is not a positive time"));
        }
        samples.push(sample);
    }
    Ok(samples)
}
