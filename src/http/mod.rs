//! HTTP dispatch module
//!
//! Sends authenticated requests to the Parse API and classifies the
//! responses.
//!
//! # Status contract
//!
//! - **200, 201**: success, response returned with its body unread
//! - **400**: body parsed as `{"code", "error"}`; `Error::Application` or `Error::Unknown`
//! - **401**: `Error::Unauthorized`, response attached
//! - **anything else**: `Error::UnexpectedStatus`, response attached

mod classify;
mod client;

pub use classify::{classify, Outcome};
pub use client::Client;
