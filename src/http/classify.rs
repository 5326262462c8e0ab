//! Response classification
//!
//! Maps a response onto the closed set of outcomes the Parse API
//! contract defines. Only the 400 path reads the body.

use crate::error::{Error, Result};
use crate::types::{ApiError, ErrorEnvelope};
use reqwest::{Response, StatusCode};
use tracing::debug;

/// Classified result of one round trip
#[derive(Debug)]
pub enum Outcome {
    /// 200 or 201; body untouched
    Success(Response),
    /// 400 with a well-formed error envelope; body consumed
    Application(ApiError),
    /// 400 without a recognizable envelope; body consumed and discarded
    Unknown,
    /// 401; body untouched
    Unauthorized(Response),
    /// Any other status; body untouched
    UnexpectedStatus(Response),
}

impl Outcome {
    /// Collapse into the `Result` returned by `Client::send`
    pub fn into_result(self) -> Result<Response> {
        match self {
            Outcome::Success(response) => Ok(response),
            Outcome::Application(err) => Err(Error::Application(err)),
            Outcome::Unknown => Err(Error::Unknown),
            Outcome::Unauthorized(response) => Err(Error::Unauthorized {
                response: Box::new(response),
            }),
            Outcome::UnexpectedStatus(response) => Err(Error::UnexpectedStatus {
                status: response.status().as_u16(),
                response: Box::new(response),
            }),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

/// Classify a response by status code
pub async fn classify(response: Response) -> Outcome {
    match response.status() {
        StatusCode::OK | StatusCode::CREATED => Outcome::Success(response),
        StatusCode::BAD_REQUEST => match response.bytes().await {
            Ok(body) => match ErrorEnvelope::from_slice(&body) {
                Some(envelope) => Outcome::Application(envelope.into()),
                None => Outcome::Unknown,
            },
            Err(e) => {
                debug!("Failed to read error body: {}", e);
                Outcome::Unknown
            }
        },
        StatusCode::UNAUTHORIZED => Outcome::Unauthorized(response),
        _ => Outcome::UnexpectedStatus(response),
    }
}
