use super::CliError;
use super::helpers::{load_run_file, write_report};
use anyhow::Context;
use nmr_t2_core::common::constants::{
    DEFAULT_POROSITIES, DEFAULT_RADII, DEFAULT_RADIUS, DEFAULT_RELAXIVITY,
    DEFAULT_SHARED_POROSITY, DEFAULT_T2_TEXT, RELAXIVITY_TYPICAL_RANGE,
};
use nmr_t2_core::common::{EngineConfig, LengthUnit, TimeUnit};
use nmr_t2_core::domain::ScenarioMode;
use nmr_t2_core::modules::serialization::{write_csv_export, write_json_export};
use nmr_t2_core::modules::{DecayEngine, Engine};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(clap::Args)]
pub(super) struct PorosityArgs {
    /// Surface relaxivity in µm/ms
    #[arg(long, default_value_t = DEFAULT_RELAXIVITY, allow_negative_numbers = true)]
    relaxivity: f64,

    /// Shared pore radius in µm
    #[arg(long, default_value_t = DEFAULT_RADIUS, allow_negative_numbers = true)]
    radius: f64,

    /// Scenario porosity in percent; repeat or comma-separate for several
    #[arg(long = "porosity", value_name = "PERCENT", value_delimiter = ',')]
    porosities: Vec<u8>,

    #[command(flatten)]
    display: DisplayArgs,

    #[command(flatten)]
    export: ExportArgs,
}

#[derive(clap::Args)]
pub(super) struct PoreSizeArgs {
    /// Surface relaxivity in µm/ms
    #[arg(long, default_value_t = DEFAULT_RELAXIVITY, allow_negative_numbers = true)]
    relaxivity: f64,

    /// Scenario pore radius in µm; repeat or comma-separate for several
    #[arg(
        long = "radius",
        value_name = "MICRONS",
        value_delimiter = ',',
        allow_negative_numbers = true
    )]
    radii: Vec<f64>,

    /// Shared porosity in percent
    #[arg(long, default_value_t = DEFAULT_SHARED_POROSITY)]
    porosity: u8,

    #[command(flatten)]
    display: DisplayArgs,

    #[command(flatten)]
    export: ExportArgs,
}

#[derive(clap::Args)]
pub(super) struct RunArgs {
    /// JSON engine config path
    #[arg(long)]
    config: PathBuf,

    #[command(flatten)]
    export: ExportArgs,
}

#[derive(clap::Args)]
struct DisplayArgs {
    /// Legend label override, matched to scenarios by position
    #[arg(long = "label", value_name = "TEXT")]
    labels: Vec<String>,

    /// Comma-separated T2 sample times in the selected time unit
    #[arg(long, default_value = DEFAULT_T2_TEXT)]
    t2_values: String,

    /// Display unit for lengths (µm, um, nm)
    #[arg(long, default_value = "µm")]
    length_unit: LengthUnit,

    /// Display unit for times (ms, s)
    #[arg(long, default_value = "ms")]
    time_unit: TimeUnit,
}

#[derive(clap::Args)]
struct ExportArgs {
    /// Write the result table as CSV; without a path, use the mode's default file name
    #[arg(long, value_name = "PATH")]
    csv: Option<Option<PathBuf>>,

    /// Write the full engine output as JSON
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,
}

/// Export destinations after defaults and config-file fallbacks are applied.
struct ExportTargets {
    csv: Option<PathBuf>,
    json: Option<PathBuf>,
}

impl ExportTargets {
    fn from_flags(args: ExportArgs, mode: ScenarioMode) -> Self {
        Self {
            csv: args
                .csv
                .map(|path| path.unwrap_or_else(|| PathBuf::from(mode.export_file_name()))),
            json: args.json,
        }
    }
}

impl DisplayArgs {
    fn apply(self, config: EngineConfig) -> EngineConfig {
        config
            .with_units(self.length_unit, self.time_unit)
            .with_t2_values(self.t2_values)
            .with_labels(self.labels)
    }
}

impl PorosityArgs {
    fn into_config(self) -> (EngineConfig, ExportTargets) {
        let porosities = if self.porosities.is_empty() {
            DEFAULT_POROSITIES.to_vec()
        } else {
            self.porosities
        };
        let config = self.display.apply(EngineConfig::variant_porosity(
            self.relaxivity,
            self.radius,
            porosities,
        ));
        let export = ExportTargets::from_flags(self.export, config.mode);
        (config, export)
    }
}

impl PoreSizeArgs {
    fn into_config(self) -> (EngineConfig, ExportTargets) {
        let radii = if self.radii.is_empty() {
            DEFAULT_RADII.to_vec()
        } else {
            self.radii
        };
        let config = self.display.apply(EngineConfig::variant_geometry(
            self.relaxivity,
            self.porosity,
            radii,
        ));
        let export = ExportTargets::from_flags(self.export, config.mode);
        (config, export)
    }
}

pub(super) fn run_porosity_command(args: PorosityArgs) -> Result<i32, CliError> {
    let (config, export) = args.into_config();
    run_decay_pass(&config, export)
}

pub(super) fn run_pore_size_command(args: PoreSizeArgs) -> Result<i32, CliError> {
    let (config, export) = args.into_config();
    run_decay_pass(&config, export)
}

pub(super) fn run_config_command(args: RunArgs) -> Result<i32, CliError> {
    let run_file = load_run_file(&args.config)?;
    info!(config = %args.config.display(), "loaded engine config");
    // Flags win over destinations named in the file.
    let flags = ExportTargets::from_flags(args.export, run_file.engine.mode);
    let export = ExportTargets {
        csv: flags.csv.or(run_file.csv),
        json: flags.json.or(run_file.json),
    };
    run_decay_pass(&run_file.engine, export)
}

fn run_decay_pass(config: &EngineConfig, export: ExportTargets) -> Result<i32, CliError> {
    info!(
        mode = %config.mode,
        scenarios = config.scenario_count(),
        "starting decay pass"
    );
    let output = Engine::new().run(config).map_err(CliError::Compute)?;
    if !config.relaxivity_is_typical() {
        let (low, high) = RELAXIVITY_TYPICAL_RANGE;
        warn!(
            relaxivity = config.relaxivity,
            "relaxivity {} µm/ms is outside the typical range {low}-{high} µm/ms",
            config.relaxivity
        );
    }
    info!(
        rows = output.table.row_count(),
        columns = output.scenario_count(),
        "decay pass complete"
    );
    for advisory in &output.advisories {
        warn!(kind = ?advisory.kind, "{}", advisory.message());
    }

    let stdout = std::io::stdout();
    write_report(&mut stdout.lock(), &output).context("failed to write report to stdout")?;

    if let Some(path) = export.csv {
        write_csv_export(&path, &output).map_err(CliError::Compute)?;
        println!("CSV export: {}", path.display());
    }
    if let Some(path) = export.json {
        write_json_export(&path, &output).map_err(CliError::Compute)?;
        println!("JSON export: {}", path.display());
    }

    Ok(0)
}
