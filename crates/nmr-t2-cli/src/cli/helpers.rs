use super::CliError;
use nmr_t2_core::common::EngineConfig;
use nmr_t2_core::domain::NmrError;
use nmr_t2_core::modules::EngineOutput;
use serde::Deserialize;
use std::fs;
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

/// Installs the stderr subscriber. `RUST_LOG` overrides the default filter.
pub(super) fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    // A second install (in-process test runs) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

/// JSON document accepted by `nmr-t2 run`: an engine config plus optional
/// export destinations.
#[derive(Debug, Deserialize)]
pub(super) struct RunFile {
    #[serde(flatten)]
    pub(super) engine: EngineConfig,
    #[serde(default)]
    pub(super) csv: Option<PathBuf>,
    #[serde(default)]
    pub(super) json: Option<PathBuf>,
}

pub(super) fn load_run_file(path: &Path) -> Result<RunFile, CliError> {
    let source = fs::read_to_string(path).map_err(|source| {
        CliError::Compute(NmrError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })
    })?;
    serde_json::from_str(&source).map_err(|source| {
        CliError::Compute(NmrError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    })
}

pub(super) fn write_report(out: &mut impl Write, output: &EngineOutput) -> std::io::Result<()> {
    writeln!(out, "{} ({})", output.chart.title, output.mode)?;
    writeln!(out, "Relaxivity (rho): {} µm/ms", output.relaxivity)?;
    for line in output.summary_lines() {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    write!(
        out,
        "{}",
        output.table.to_display_text(&output.units, output.time_unit)
    )?;
    for advisory in &output.advisories {
        writeln!(out, "ADVISORY: {}", advisory.message())?;
    }
    out.flush()
}
