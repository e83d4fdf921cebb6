use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish between argument mistakes
/// and failures that happened while talking to the relay or upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config error, network error, relay error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while relaying a request to the InfraBot service.
///
/// The variants line up with the three failure classes of the relay:
/// caller mistakes, upstream failures and anything unexpected on our side.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("Invalid request body: {details}")]
    InvalidBody { details: String },

    #[error("Invalid query string: {details}")]
    InvalidQuery { details: String },

    #[error("InfraBot service request failed: {details}")]
    Upstream { details: String },

    #[error("Internal relay error: {details}")]
    Internal { details: String },
}

impl RelayError {
    pub fn missing(field: &'static str) -> Self {
        RelayError::MissingField { field }
    }

    pub fn upstream(details: impl Into<String>) -> Self {
        RelayError::Upstream {
            details: details.into(),
        }
    }

    pub fn internal(details: impl Into<String>) -> Self {
        RelayError::Internal {
            details: details.into(),
        }
    }

    /// Failure detail without the category prefix, if the variant carries one.
    pub fn details(&self) -> Option<&str> {
        match self {
            RelayError::MissingField { .. } => None,
            RelayError::InvalidBody { details }
            | RelayError::InvalidQuery { details }
            | RelayError::Upstream { details }
            | RelayError::Internal { details } => Some(details),
        }
    }

    /// Whether this error was caused by the caller rather than by a failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RelayError::MissingField { .. }
                | RelayError::InvalidBody { .. }
                | RelayError::InvalidQuery { .. }
        )
    }
}

/// Errors surfaced by the configuration layer.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {path}\nDetails: {details}\n\n💡 Hint: Check that the file exists and is readable.")]
    ReadError { path: PathBuf, details: String },

    #[error("Failed to parse config file: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file contains valid YAML syntax.")]
    ParseError { path: PathBuf, details: String },

    #[error("Invalid config: {message}\n\n💡 Hint: {hint}")]
    Invalid { message: String, hint: String },
}
