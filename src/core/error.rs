use thiserror::Error;

/// Custom error types for avfreq
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid frequency range: {hz} Hz is outside {min}..={max} Hz")]
    InvalidRange { hz: i64, min: i64, max: i64 },

    #[error("Invalid frequency format: {hz} Hz. 8.33kHz frequencies not currently supported")]
    InvalidSpacing { hz: i64 },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Network format error: {0}")]
    NetworkFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }

    /// Creates a new network format error
    pub fn network_format(msg: impl Into<String>) -> Self {
        Error::NetworkFormat(msg.into())
    }

    /// Creates a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Returns the offending frequency in Hz for validation failures
    pub fn hz(&self) -> Option<i64> {
        match self {
            Error::InvalidRange { hz, .. } | Error::InvalidSpacing { hz } => Some(*hz),
            _ => None,
        }
    }

    /// Whether this error came from band or channel validation
    pub fn is_validation(&self) -> bool {
        self.hz().is_some()
    }
}
