use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unable to write to file {path}: {source}")]
    OutputError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Reported, but the run still counts as complete.
    Low,
    High,
    Critical,
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::IoError(_) => ErrorCategory::Io,
            CalcError::OutputError { .. } => ErrorCategory::Output,
            CalcError::TomlError(_)
            | CalcError::ConfigError { .. }
            | CalcError::ConfigValidationError { .. }
            | CalcError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Output => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::IoError(_) => "Check file permissions and available disk space",
            CalcError::OutputError { .. } => {
                "Make sure the output directory exists and is writable"
            }
            CalcError::TomlError(_) => "Make sure the config file is valid TOML",
            CalcError::ConfigError { .. } => "Check that the --config path exists and is readable",
            CalcError::ConfigValidationError { .. } | CalcError::InvalidConfigValueError { .. } => {
                "Review the command line flags and config file values"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::OutputError { path, .. } => format!("Error: Unable to write to file {}.", path),
            CalcError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value for '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    /// Exit code the binary reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
