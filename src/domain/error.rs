use std::io;

use thiserror::Error;

use crate::domain::ResolutionError;

/// Library-wide error type for svcopen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Command line was well-formed for the parser but not for the command.
    #[error("{0}")]
    Usage(String),

    /// Service name could not be resolved to a single endpoint.
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// The backing host is not known to the driver.
    #[error("Host '{0}' does not exist. Start it before querying services.")]
    HostNotFound(String),

    /// The backing host exists but is not running.
    #[error("Host '{machine}' is not running (state: {status}).")]
    HostNotRunning { machine: String, status: String },

    /// Host address lookup failed.
    #[error("Error getting IP: {0}")]
    HostAddress(String),

    /// An external CLI (oc, docker-machine, ...) failed.
    #[error("{tool}: {error}")]
    ExternalToolError { tool: String, error: String },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Service record from a collaborator is missing its namespace or name.
    #[error("Invalid service record: {0}")]
    InvalidRecord(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::TomlParseError(_)
            | AppError::Usage(_)
            | AppError::ParseError { .. }
            | AppError::InvalidRecord(_) => io::ErrorKind::InvalidInput,
            AppError::Resolution(ResolutionError::NotFound { .. })
            | AppError::HostNotFound(_) => io::ErrorKind::NotFound,
            AppError::Resolution(_) => io::ErrorKind::InvalidInput,
            AppError::HostNotRunning { .. }
            | AppError::HostAddress(_)
            | AppError::ExternalToolError { .. } => io::ErrorKind::Other,
        }
    }
}
