//! Error types for the Parse REST client
//!
//! Every fallible operation in this crate returns `Result<T, Error>`.
//! Callers branch on the variant to learn whether a response body is
//! still attached and must be consumed: only `Unauthorized` and
//! `UnexpectedStatus` carry one.

use crate::types::ApiError;
use reqwest::Response;
use thiserror::Error;

/// The main error type for the client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Local Errors
    // ============================================================================
    #[error("Failed to build request: {message}")]
    Construction { message: String },

    #[error("Failed to resolve endpoint '{endpoint}': {source}")]
    AddressResolution {
        endpoint: String,
        source: url::ParseError,
    },

    // ============================================================================
    // Network Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    // ============================================================================
    // Server Errors
    // ============================================================================
    #[error("Parse API error: {0}")]
    Application(ApiError),

    #[error("Unknown Parse API error")]
    Unknown,

    #[error("Unauthorized")]
    Unauthorized { response: Box<Response> },

    #[error("Got unexpected status code {status}")]
    UnexpectedStatus {
        status: u16,
        response: Box<Response>,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a request construction error
    pub fn construction(message: impl Into<String>) -> Self {
        Self::Construction {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// HTTP status attached to this error, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Application(_) | Error::Unknown => Some(400),
            Error::Unauthorized { .. } => Some(401),
            Error::UnexpectedStatus { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The parsed error envelope of a 400 response
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Application(e) => Some(e),
            _ => None,
        }
    }

    /// Check whether this is an application error with the given code
    pub fn is_code(&self, code: i64) -> bool {
        self.api_error().is_some_and(|e| e.code == code)
    }

    /// Borrow the unconsumed response, if this error kind carries one
    pub fn response(&self) -> Option<&Response> {
        match self {
            Error::Unauthorized { response } | Error::UnexpectedStatus { response, .. } => {
                Some(response)
            }
            _ => None,
        }
    }

    /// Take ownership of the unconsumed response so its body can be read
    pub fn into_response(self) -> Option<Response> {
        match self {
            Error::Unauthorized { response } | Error::UnexpectedStatus { response, .. } => {
                Some(*response)
            }
            _ => None,
        }
    }
}

/// Result type alias for the client
pub type Result<T> = std::result::Result<T, Error>;
