//! # parse-rest
//!
//! Authenticated client core for the Parse REST API.
//!
//! The client stamps the application id and one credential onto every
//! request, performs a single round trip and sorts the response into
//! success or a typed error.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use parse_rest::{Client, Error, Session};
//! use reqwest::Method;
//!
//! #[tokio::main]
//! async fn main() -> parse_rest::Result<()> {
//!     let session = Session::new("app-id", "rest-api-key");
//!     let client = Client::new(session);
//!
//!     match client.send_simple(Method::GET, "classes/GameScore/xWMyZ4YEGZ").await {
//!         Ok(response) => println!("{}", response.text().await?),
//!         Err(Error::Application(e)) => eprintln!("parse error {}: {}", e.code, e.message),
//!         Err(e) => return Err(e),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! caller ─► Session::build_request ─► Client::send ─► classify ─► Result<Response, Error>
//!             app id                    resolve         200/201 ─► Ok(response)
//!             master key | REST key     execute once    400     ─► Application | Unknown
//!             session token             trace           401     ─► Unauthorized
//!             content type                              other   ─► UnexpectedStatus
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Header names, error envelope and error codes
pub mod types;

/// Session credentials and trace sinks
pub mod auth;

/// Request dispatch and response classification
pub mod http;

/// Client configuration
pub mod config;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::{MemorySink, NoopSink, Session, TraceSink, TracingSink, WriterSink};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, Result};
pub use http::{classify, Client, Outcome};
pub use types::{codes, ApiError, ErrorCode, ErrorEnvelope, BASE_URL};

pub use reqwest::{Body, Method, Response, StatusCode};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
