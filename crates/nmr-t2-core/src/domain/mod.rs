pub mod errors;

pub use errors::{ErrorCategory, NmrError, NmrResult};

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Which parameter varies across the scenarios of one set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioMode {
    /// Fixed pore geometry, one porosity per scenario.
    #[default]
    VariantPorosity,
    /// Fixed porosity, one pore radius per scenario.
    VariantGeometry,
}

impl ScenarioMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VariantPorosity => "variant-porosity",
            Self::VariantGeometry => "variant-geometry",
        }
    }

    pub const fn chart_title(self) -> &'static str {
        match self {
            Self::VariantPorosity => "Porosity T2 Decay",
            Self::VariantGeometry => "Pore Size T2 Decay",
        }
    }

    pub const fn export_file_name(self) -> &'static str {
        match self {
            Self::VariantPorosity => "nmr_petrophysics_results.csv",
            Self::VariantGeometry => "nmr_petrophysics_results_pore_size.csv",
        }
    }
}

impl Display for ScenarioMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryKind {
    DegenerateGeometry,
    ZeroRelaxationTime,
    DefaultT2Grid,
}

impl AdvisoryKind {
    pub const fn summary(self) -> &'static str {
        match self {
            Self::DegenerateGeometry => "geometry degenerate: using zero relaxation time",
            Self::ZeroRelaxationTime => "zero relaxation time: decay curve collapsed to zero",
            Self::DefaultT2Grid => "T2 list invalid: using default grid",
        }
    }
}

/// A recoverable condition reported alongside a completed computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub kind: AdvisoryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    pub detail: String,
}

impl Advisory {
    pub fn new(kind: AdvisoryKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            scenario: None,
            detail: detail.into(),
        }
    }

    pub fn for_scenario(mut self, label: impl Into<String>) -> Self {
        self.scenario = Some(label.into());
        self
    }

    pub fn message(&self) -> String {
        let base = if self.detail.is_empty() {
            self.kind.summary().to_string()
        } else {
            format!("{} ({})", self.kind.summary(), self.detail)
        };
        match &self.scenario {
            Some(label) => format!("{label}: {base}"),
            None => base,
        }
    }
}

impl Display for Advisory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

/// A computed value with an optional advisory about how it was obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct Advised<T> {
    pub value: T,
    pub advisory: Option<Advisory>,
}

impl<T> Advised<T> {
    pub fn clean(value: T) -> Self {
        Self {
            value,
            advisory: None,
        }
    }

    pub fn with_advisory(value: T, advisory: Advisory) -> Self {
        Self {
            value,
            advisory: Some(advisory),
        }
    }

    pub fn into_parts(self) -> (T, Option<Advisory>) {
        (self.value, self.advisory)
    }
}
