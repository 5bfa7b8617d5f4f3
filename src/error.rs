use thiserror::Error;

/// Unified error type for semverbump operations
#[derive(Error, Debug)]
pub enum SemverBumpError {
    #[error("invalid semVer tag '{0}'")]
    InvalidVersion(String),

    #[error("invalid increment kind, expected 'major', 'minor' or 'patch', got '{0}'")]
    InvalidIncrementKind(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in semverbump
pub type Result<T> = std::result::Result<T, SemverBumpError>;

impl SemverBumpError {
    /// Create an invalid version error for the offending input
    pub fn invalid_version(input: impl Into<String>) -> Self {
        SemverBumpError::InvalidVersion(input.into())
    }

    /// Create an invalid increment kind error for the offending input
    pub fn invalid_kind(input: impl Into<String>) -> Self {
        SemverBumpError::InvalidIncrementKind(input.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SemverBumpError::Config(msg.into())
    }
}
