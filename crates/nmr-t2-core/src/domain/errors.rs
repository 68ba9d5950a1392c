use std::path::PathBuf;

pub type NmrResult<T> = Result<T, NmrError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Success,
    InputValidationError,
    IoSystemError,
    ComputationError,
    InternalError,
}

impl ErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::InputValidationError => 2,
            Self::IoSystemError => 3,
            Self::ComputationError => 4,
            Self::InternalError => 5,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::InputValidationError => "InputValidationError",
            Self::IoSystemError => "IoSystemError",
            Self::ComputationError => "ComputationError",
            Self::InternalError => "InternalError",
        }
    }

    pub const fn is_fatal(self) -> bool {
        !matches!(self, Self::Success)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NmrError {
    #[error("unrecognized {axis} unit '{symbol}'")]
    InvalidUnit { axis: &'static str, symbol: String },
    #[error("pore radius must be finite and non-negative, got {radius}")]
    InvalidGeometry { radius: f64 },
    #[error("invalid {name} {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    #[error("{mode} scenario set requires at least one scenario")]
    EmptyScenarioSet { mode: &'static str },
    #[error("column '{label}' has {actual} values but the T2 axis has {expected}")]
    ShapeMismatch {
        label: String,
        expected: usize,
        actual: usize,
    },
    #[error("failed to read engine config '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse engine config '{}': {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write export '{}': {source}", path.display())]
    ExportWrite {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize engine output: {source}")]
    Serialize { source: serde_json::Error },
}

impl NmrError {
    pub fn invalid_parameter(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }

    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidUnit { .. }
            | Self::InvalidGeometry { .. }
            | Self::InvalidParameter { .. }
            | Self::EmptyScenarioSet { .. }
            | Self::ConfigParse { .. } => ErrorCategory::InputValidationError,
            Self::ConfigRead { .. } | Self::ExportWrite { .. } => ErrorCategory::IoSystemError,
            Self::ShapeMismatch { .. } => ErrorCategory::ComputationError,
            Self::Serialize { .. } => ErrorCategory::InternalError,
        }
    }

    pub const fn placeholder(&self) -> &'static str {
        match self {
            Self::InvalidUnit { .. } => "INPUT.INVALID_UNIT",
            Self::InvalidGeometry { .. } => "INPUT.INVALID_GEOMETRY",
            Self::InvalidParameter { .. } => "INPUT.INVALID_PARAMETER",
            Self::EmptyScenarioSet { .. } => "INPUT.EMPTY_SCENARIO_SET",
            Self::ShapeMismatch { .. } => "RUN.SHAPE_MISMATCH",
            Self::ConfigRead { .. } => "IO.CONFIG_READ",
            Self::ConfigParse { .. } => "INPUT.CONFIG_PARSE",
            Self::ExportWrite { .. } => "IO.EXPORT_WRITE",
            Self::Serialize { .. } => "SYS.SERIALIZE",
        }
    }

    pub const fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        let severity = if self.category().is_fatal() {
            "ERROR"
        } else {
            "INFO"
        };
        format!("{}: [{}] {}", severity, self.placeholder(), self)
    }

    pub fn fatal_exit_line(&self) -> Option<String> {
        self.category()
            .is_fatal()
            .then(|| format!("FATAL EXIT CODE: {}", self.exit_code()))
    }
}
