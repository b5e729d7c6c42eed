//! Error types and handling for the outdoor suitability engine

use thiserror::Error;

/// Main error type for suitability assessments
#[derive(Error, Debug)]
pub enum SuitabilityError {
    /// Transport failure or non-success HTTP status from the forecast provider
    #[error("Network error: {message}")]
    Network {
        message: String,
        status: Option<u16>,
    },

    /// Provider payload is malformed or lacks expected fields
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Caller supplied out-of-range input
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl SuitabilityError {
    /// Create a network error without an HTTP status
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            status: None,
        }
    }

    /// Create a network error for a non-success HTTP status
    pub fn http_status<S: Into<String>>(message: S, status: u16) -> Self {
        Self::Network {
            message: message.into(),
            status: Some(status),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether a caller-owned retry could plausibly succeed
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, SuitabilityError::Network { .. })
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SuitabilityError::Network { status: Some(code), .. } => {
                format!("The weather service responded with HTTP {code}. Please try again later.")
            }
            SuitabilityError::Network { status: None, .. } => {
                "Unable to reach the weather service. Please check your internet connection."
                    .to_string()
            }
            SuitabilityError::Parse { .. } => {
                "The weather service returned incomplete data.".to_string()
            }
            SuitabilityError::InvalidInput { message } => format!("Invalid input: {message}"),
            SuitabilityError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            SuitabilityError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
