mod commands;
mod helpers;

use clap::Parser;
use nmr_t2_core::domain::{ErrorCategory, NmrError};
use tracing::error;

pub fn run_from_env() -> i32 {
    helpers::init_logging();

    match run(std::env::args().skip(1)) {
        Ok(code) => code,
        Err(failure) => {
            error!(placeholder = failure.placeholder(), "{}", failure.summary());
            eprintln!("{}", failure.diagnostic_line());
            if let Some(summary_line) = failure.fatal_exit_line() {
                eprintln!("{}", summary_line);
            }
            failure.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once("nmr-t2".to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => dispatch_parsed(cli.command),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "nmr-t2",
    version,
    about = "NMR T2 relaxation decay forward model for spherical pores"
)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Compare porosities sharing one pore radius
    Porosity(commands::PorosityArgs),
    /// Compare pore radii sharing one porosity
    PoreSize(commands::PoreSizeArgs),
    /// Run a pass described by a JSON engine config
    Run(commands::RunArgs),
}

fn dispatch_parsed(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Porosity(args) => commands::run_porosity_command(args),
        CliCommand::PoreSize(args) => commands::run_pore_size_command(args),
        CliCommand::Run(args) => commands::run_config_command(args),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(NmrError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn category(&self) -> ErrorCategory {
        match self {
            Self::Usage(_) => ErrorCategory::InputValidationError,
            Self::Compute(error) => error.category(),
            Self::Internal(_) => ErrorCategory::IoSystemError,
        }
    }

    fn placeholder(&self) -> &'static str {
        match self {
            Self::Usage(_) => "INPUT.CLI_USAGE",
            Self::Compute(error) => error.placeholder(),
            Self::Internal(_) => "IO.CLI",
        }
    }

    fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }

    fn summary(&self) -> String {
        match self {
            Self::Usage(message) => message.trim_end().to_string(),
            Self::Compute(error) => error.to_string(),
            Self::Internal(error) => format!("{error:#}"),
        }
    }

    fn diagnostic_line(&self) -> String {
        match self {
            Self::Compute(error) => error.diagnostic_line(),
            _ => format!("ERROR: [{}] {}", self.placeholder(), self.summary()),
        }
    }

    fn fatal_exit_line(&self) -> Option<String> {
        match self {
            Self::Compute(error) => error.fatal_exit_line(),
            _ => self
                .category()
                .is_fatal()
                .then(|| format!("FATAL EXIT CODE: {}", self.exit_code())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CliError, run};
    use nmr_t2_core::domain::NmrError;

    #[test]
    fn help_exits_cleanly() {
        assert_eq!(run(["--help"]).expect("help is not an error"), 0);
    }

    #[test]
    fn unknown_units_are_usage_errors() {
        let error = run(["porosity", "--length-unit", "furlong"]).expect_err("bad unit");
        assert!(matches!(error, CliError::Usage(_)));
        assert_eq!(error.exit_code(), 2);
        assert!(error.diagnostic_line().starts_with("ERROR: [INPUT.CLI_USAGE]"));
        assert_eq!(error.fatal_exit_line().as_deref(), Some("FATAL EXIT CODE: 2"));
    }

    #[test]
    fn engine_rejections_keep_their_placeholder() {
        let error = run(["porosity", "--relaxivity=-0.003"]).expect_err("negative relaxivity");
        assert!(matches!(
            error,
            CliError::Compute(NmrError::InvalidParameter { .. })
        ));
        assert_eq!(error.exit_code(), 2);
        assert!(
            error
                .diagnostic_line()
                .starts_with("ERROR: [INPUT.INVALID_PARAMETER]")
        );
    }

    #[test]
    fn internal_failures_map_to_io_exit_code() {
        let error = CliError::from(anyhow::anyhow!("stdout closed"));
        assert_eq!(error.exit_code(), 3);
        assert_eq!(error.diagnostic_line(), "ERROR: [IO.CLI] stdout closed");
    }
}
