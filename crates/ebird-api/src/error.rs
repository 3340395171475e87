//! Error types for the eBird API client

use std::fmt;

/// Errors that can occur when calling the eBird API
#[derive(Debug)]
pub enum EbirdError {
    /// An argument failed validation; raised before any network access
    Validation(String),
    /// Transport failure or a non-success status returned by the API
    Http(Box<reqwest::Error>),
    /// Failed to parse a JSON response
    Json(serde_json::Error),
    /// Failed to parse a CSV response
    Csv(csv::Error),
    /// Failed to assemble the request URL
    Url(url::ParseError),
    /// Missing or malformed configuration
    Config(String),
}

impl EbirdError {
    /// HTTP status returned by the API, if this is a remote failure
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    /// True if the error was raised by local argument validation
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl fmt::Display for EbirdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "Invalid argument: {}", msg),
            Self::Http(e) => write!(f, "eBird HTTP error: {}", e),
            Self::Json(e) => write!(f, "eBird JSON parse error: {}", e),
            Self::Csv(e) => write!(f, "eBird CSV parse error: {}", e),
            Self::Url(e) => write!(f, "Invalid request URL: {}", e),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for EbirdError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e.as_ref()),
            Self::Json(e) => Some(e),
            Self::Csv(e) => Some(e),
            Self::Url(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for EbirdError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(Box::new(e))
    }
}

impl From<serde_json::Error> for EbirdError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<csv::Error> for EbirdError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}

impl From<url::ParseError> for EbirdError {
    fn from(e: url::ParseError) -> Self {
        Self::Url(e)
    }
}

/// Result type for eBird API operations
pub type Result<T> = std::result::Result<T, EbirdError>;
