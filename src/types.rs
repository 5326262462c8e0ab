//! Common types used throughout the client
//!
//! Header names, content types and the error envelope the Parse API
//! returns on status 400.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Wire Constants
// ============================================================================

/// Base address every endpoint is resolved against
pub const BASE_URL: &str = "https://api.parse.com/1/";

/// Content type used by the JSON convenience calls
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Header names sent by the client (lowercase, as `http` requires)
pub mod headers {
    /// Application identifier, sent on every request
    pub const APPLICATION_ID: &str = "x-parse-application-id";
    /// REST API key, sent when no master key is set
    pub const REST_API_KEY: &str = "x-parse-rest-api-key";
    /// Master key, replaces the REST API key when set
    pub const MASTER_KEY: &str = "x-parse-master-key";
    /// End-user session token
    pub const SESSION_TOKEN: &str = "x-parse-session-token";
}

// ============================================================================
// Error Envelope
// ============================================================================

/// Error code from the envelope; the API documents integers but some
/// deployments send strings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorCode {
    Number(i64),
    Text(String),
}

impl ErrorCode {
    /// Numeric value of the code, parsing string codes when possible
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ErrorCode::Number(n) => Some(*n),
            ErrorCode::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl PartialEq<i64> for ErrorCode {
    fn eq(&self, other: &i64) -> bool {
        self.as_i64() == Some(*other)
    }
}

impl From<i64> for ErrorCode {
    fn from(code: i64) -> Self {
        ErrorCode::Number(code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Number(n) => write!(f, "{n}"),
            ErrorCode::Text(s) => f.write_str(s),
        }
    }
}

/// JSON body of a 400 response: `{"code": 101, "error": "object not found"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub code: ErrorCode,
    pub error: String,
}

impl ErrorEnvelope {
    /// Parse an envelope from raw body bytes
    pub fn from_slice(body: &[u8]) -> Option<Self> {
        serde_json::from_slice(body).ok()
    }
}

/// Application error reported by the server
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} (code {code})")]
pub struct ApiError {
    /// Parse error code, see [`codes`]
    pub code: ErrorCode,
    /// Human-readable message from the server
    pub message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(code: impl Into<ErrorCode>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<ErrorEnvelope> for ApiError {
    fn from(envelope: ErrorEnvelope) -> Self {
        Self {
            code: envelope.code,
            message: envelope.error,
        }
    }
}

// ============================================================================
// Well-known Codes
// ============================================================================

/// Error codes documented by the Parse REST API
pub mod codes {
    pub const INTERNAL_SERVER_ERROR: i64 = 1;
    pub const CONNECTION_FAILED: i64 = 100;
    pub const OBJECT_NOT_FOUND: i64 = 101;
    pub const INVALID_QUERY: i64 = 102;
    pub const INVALID_CLASS_NAME: i64 = 103;
    pub const MISSING_OBJECT_ID: i64 = 104;
    pub const INVALID_KEY_NAME: i64 = 105;
    pub const INVALID_POINTER: i64 = 106;
    pub const INVALID_JSON: i64 = 107;
    pub const COMMAND_UNAVAILABLE: i64 = 108;
    pub const INCORRECT_TYPE: i64 = 111;
    pub const INVALID_CHANNEL_NAME: i64 = 112;
    pub const PUSH_MISCONFIGURED: i64 = 115;
    pub const OBJECT_TOO_LARGE: i64 = 116;
    pub const OPERATION_FORBIDDEN: i64 = 119;
    pub const INVALID_NESTED_KEY: i64 = 121;
    pub const INVALID_FILE_NAME: i64 = 122;
    pub const INVALID_ACL: i64 = 123;
    pub const TIMEOUT: i64 = 124;
    pub const INVALID_EMAIL_ADDRESS: i64 = 125;
    pub const DUPLICATE_VALUE: i64 = 137;
    pub const INVALID_ROLE_NAME: i64 = 139;
    pub const EXCEEDED_QUOTA: i64 = 140;
    pub const SCRIPT_FAILED: i64 = 141;
    pub const VALIDATION_FAILED: i64 = 142;
    pub const FILE_DELETE_FAILED: i64 = 153;
    pub const REQUEST_LIMIT_EXCEEDED: i64 = 155;
    pub const USERNAME_MISSING: i64 = 200;
    pub const PASSWORD_MISSING: i64 = 201;
    pub const USERNAME_TAKEN: i64 = 202;
    pub const EMAIL_TAKEN: i64 = 203;
    pub const EMAIL_MISSING: i64 = 204;
    pub const EMAIL_NOT_FOUND: i64 = 205;
    pub const SESSION_MISSING: i64 = 206;
    pub const MUST_CREATE_USER_THROUGH_SIGNUP: i64 = 207;
    pub const ACCOUNT_ALREADY_LINKED: i64 = 208;
    pub const INVALID_SESSION_TOKEN: i64 = 209;
    pub const LINKED_ID_MISSING: i64 = 250;
    pub const INVALID_LINKED_SESSION: i64 = 251;
    pub const UNSUPPORTED_SERVICE: i64 = 252;
}
