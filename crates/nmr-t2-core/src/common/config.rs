//! Explicit engine configuration.
//!
//! One `EngineConfig` fully determines a computation pass. Adapters build it
//! from flags or JSON and hand it to the engine; nothing is read from ambient
//! state.

use super::constants::{
    DEFAULT_POROSITIES, DEFAULT_RADII, DEFAULT_RADIUS, DEFAULT_RELAXIVITY,
    DEFAULT_SHARED_POROSITY, DEFAULT_T2_TEXT, RELAXIVITY_TYPICAL_RANGE,
};
use super::units::{LengthUnit, TimeUnit};
use crate::domain::{NmrError, NmrResult, ScenarioMode};
use crate::modules::scenario::ScenarioPlan;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub mode: ScenarioMode,
    /// Surface relaxivity in µm/ms.
    pub relaxivity: f64,
    /// Fixed pore radius (µm) for variant-porosity sets.
    pub radius: f64,
    /// Per-scenario porosities (%) for variant-porosity sets.
    pub porosities: Vec<u8>,
    /// Fixed porosity (%) for variant-geometry sets.
    pub porosity: u8,
    /// Per-scenario pore radii (µm) for variant-geometry sets.
    pub radii: Vec<f64>,
    /// Optional label overrides, matched to scenarios by position.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    pub length_unit: LengthUnit,
    pub time_unit: TimeUnit,
    /// Raw comma-separated decay times in `time_unit`.
    pub t2_values: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: ScenarioMode::VariantPorosity,
            relaxivity: DEFAULT_RELAXIVITY,
            radius: DEFAULT_RADIUS,
            porosities: DEFAULT_POROSITIES.to_vec(),
            porosity: DEFAULT_SHARED_POROSITY,
            radii: DEFAULT_RADII.to_vec(),
            labels: Vec::new(),
            length_unit: LengthUnit::default(),
            time_unit: TimeUnit::default(),
            t2_values: DEFAULT_T2_TEXT.to_string(),
        }
    }
}

impl EngineConfig {
    pub fn variant_porosity(relaxivity: f64, radius: f64, porosities: Vec<u8>) -> Self {
        Self {
            mode: ScenarioMode::VariantPorosity,
            relaxivity,
            radius,
            porosities,
            ..Self::default()
        }
    }

    pub fn variant_geometry(relaxivity: f64, porosity: u8, radii: Vec<f64>) -> Self {
        Self {
            mode: ScenarioMode::VariantGeometry,
            relaxivity,
            porosity,
            radii,
            ..Self::default()
        }
    }

    pub fn with_units(mut self, length_unit: LengthUnit, time_unit: TimeUnit) -> Self {
        self.length_unit = length_unit;
        self.time_unit = time_unit;
        self
    }

    pub fn with_t2_values(mut self, raw: impl Into<String>) -> Self {
        self.t2_values = raw.into();
        self
    }

    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    pub fn scenario_count(&self) -> usize {
        match self.mode {
            ScenarioMode::VariantPorosity => self.porosities.len(),
            ScenarioMode::VariantGeometry => self.radii.len(),
        }
    }

    /// Whether `relaxivity` lies in the usual range for sandstones and
    /// carbonates. Values outside it still run.
    pub fn relaxivity_is_typical(&self) -> bool {
        let (low, high) = RELAXIVITY_TYPICAL_RANGE;
        (low..=high).contains(&self.relaxivity)
    }

    /// Per-scenario inputs for the active mode; the inactive axis is ignored.
    pub fn plan(&self) -> ScenarioPlan {
        match self.mode {
            ScenarioMode::VariantPorosity => ScenarioPlan::VariantPorosity {
                radius: self.radius,
                porosities: self.porosities.clone(),
            },
            ScenarioMode::VariantGeometry => ScenarioPlan::VariantGeometry {
                porosity: self.porosity,
                radii: self.radii.clone(),
            },
        }
    }

    pub fn from_json_str(source: &str, origin: &Path) -> NmrResult<Self> {
        serde_json::from_str(source).map_err(|source| NmrError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> NmrResult<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| NmrError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&source, path)
    }
}

#[cfg(test)]
mod tests {
    use super::EngineConfig;
    use crate::common::units::{LengthUnit, TimeUnit};
    use crate::domain::{NmrError, ScenarioMode};
    use crate::modules::scenario::ScenarioPlan;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn defaults_reproduce_the_reference_workbook() {
        let config = EngineConfig::default();
        assert_eq!(config.mode, ScenarioMode::VariantPorosity);
        assert_eq!(config.relaxivity, 0.003);
        assert_eq!(config.radius, 1.0);
        assert_eq!(config.porosities, vec![30, 20, 10]);
        assert_eq!(config.porosity, 50);
        assert_eq!(config.radii, vec![1.0, 0.5, 0.25]);
        assert_eq!(config.length_unit, LengthUnit::Micrometer);
        assert_eq!(config.time_unit, TimeUnit::Millisecond);
        assert_eq!(config.scenario_count(), 3);
    }

    #[test]
    fn plan_follows_the_active_mode() {
        let config = EngineConfig::variant_geometry(0.005, 40, vec![2.0, 1.0]);
        assert_eq!(config.scenario_count(), 2);
        assert_eq!(
            config.plan(),
            ScenarioPlan::VariantGeometry {
                porosity: 40,
                radii: vec![2.0, 1.0],
            }
        );
    }

    #[test]
    fn relaxivity_range_check_brackets_the_default() {
        assert!(EngineConfig::default().relaxivity_is_typical());
        assert!(EngineConfig::variant_porosity(0.01, 1.0, vec![30]).relaxivity_is_typical());
        assert!(!EngineConfig::variant_porosity(0.05, 1.0, vec![30]).relaxivity_is_typical());
        assert!(!EngineConfig::variant_porosity(0.0005, 1.0, vec![30]).relaxivity_is_typical());
        assert!(!EngineConfig::variant_porosity(f64::NAN, 1.0, vec![30]).relaxivity_is_typical());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config = EngineConfig::from_json_str(
            r#"{ "mode": "variant-geometry", "radii": [0.8], "time_unit": "s" }"#,
            Path::new("inline.json"),
        )
        .expect("config should parse");

        assert_eq!(config.mode, ScenarioMode::VariantGeometry);
        assert_eq!(config.radii, vec![0.8]);
        assert_eq!(config.time_unit, TimeUnit::Second);
        assert_eq!(config.relaxivity, 0.003);
        assert_eq!(config.porosity, 50);
    }

    #[test]
    fn unknown_unit_symbol_is_a_parse_error() {
        let error = EngineConfig::from_json_str(
            r#"{ "length_unit": "mm" }"#,
            Path::new("inline.json"),
        )
        .expect_err("mm is not a supported length unit");
        assert!(matches!(error, NmrError::ConfigParse { .. }));
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn load_reads_config_files_and_reports_missing_ones() {
        let temp = TempDir::new().expect("tempdir should be created");
        let path = temp.path().join("engine.json");
        let config = EngineConfig::variant_porosity(0.004, 0.5, vec![25])
            .with_t2_values("1, 2, 3")
            .with_labels(vec!["Sandstone".to_string()]);
        fs::write(&path, serde_json::to_string_pretty(&config).expect("serialize"))
            .expect("config should be written");

        let loaded = EngineConfig::load(&path).expect("config should load");
        assert_eq!(loaded, config);

        let missing = EngineConfig::load(temp.path().join("missing.json"))
            .expect_err("missing file should fail");
        assert!(matches!(missing, NmrError::ConfigRead { .. }));
        assert_eq!(missing.exit_code(), 3);
    }
}
