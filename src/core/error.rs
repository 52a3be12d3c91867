//! Error types for plugin-info.

use thiserror::Error;

/// Result type alias for plugin-info operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while querying and reporting plugins.
#[derive(Error, Debug)]
pub enum Error {
    // Command errors
    #[error("{0}")]
    MalformedOptions(String),

    #[error("Unknown subcommand '{0}'")]
    UnknownSubcommand(String),

    #[error("You must specify a search term!")]
    MissingSearchTerm,

    #[error("A plugin named '{0}' is not currently installed.")]
    NotFound(String),

    #[error("\"{0}\" is not a valid page number.")]
    InvalidPageNumber(String),

    // Metadata errors
    #[error("Invalid plugin version: {0}")]
    InvalidVersion(String),

    // Setup errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // Generic errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error was caused by the caller's input rather than the host.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::MalformedOptions(_)
                | Error::UnknownSubcommand(_)
                | Error::MissingSearchTerm
                | Error::NotFound(_)
                | Error::InvalidPageNumber(_)
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}
