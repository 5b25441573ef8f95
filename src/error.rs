// error.rs

use reqwest::{Method, StatusCode};
use std::fmt;

/// Main error type for FleetHub SDK operations
#[derive(Debug)]
pub enum FleetHubError {
    /// Parse URL failed
    InvalidUrl(String),
    /// Invalid configuration (bad base URL suffix, missing supervisor environment, ...)
    ConfigurationError(String),
    /// The API answered with a status outside the 2xx range.
    /// The response body is not inspected.
    RequestFailed {
        method: Method,
        url: String,
        status: StatusCode,
    },
    /// Network/connection error (e.g., timeout, DNS failure)
    ConnectionError(String),
    /// JSON serialization/deserialization error
    SerializationError(String),
    /// The server broke an expected invariant (e.g. more than one entity
    /// returned for a singular lookup)
    DataIntegrity(String),
    /// Resource not found where one was required to continue
    NotFound(String),
    /// The on-device supervisor acknowledged the request but refused it
    SupervisorRejected(String),
    /// Generic error (use sparingly)
    Other(String),
}

impl fmt::Display for FleetHubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            Self::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            Self::RequestFailed { method, url, status } => {
                write!(f, "{} {}: {}", method, url, status.as_u16())
            }
            Self::ConnectionError(msg) => write!(f, "Connection error: {}", msg),
            Self::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            Self::DataIntegrity(msg) => write!(f, "Data integrity error: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::SupervisorRejected(msg) => write!(f, "Supervisor rejected request: {}", msg),
            Self::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FleetHubError {}

// Conversion implementations
impl From<url::ParseError> for FleetHubError {
    fn from(e: url::ParseError) -> Self {
        Self::InvalidUrl(e.to_string())
    }
}

impl From<reqwest::Error> for FleetHubError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() || err.is_request() {
            Self::ConnectionError(err.to_string())
        } else {
            Self::Other(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FleetHubError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
