//! Authentication module
//!
//! A `Session` carries the application id, REST API key, optional master
//! key and optional user session token, and stamps them onto requests.
//! Diagnostic output goes through a pluggable `TraceSink`.

mod session;
mod trace;

pub use session::Session;
pub use trace::{MemorySink, NoopSink, TraceSink, TracingSink, WriterSink};
