//! Session implementation
//!
//! Holds the application identity and credentials, and turns a
//! method/url/content-type/body tuple into an authenticated request.

use super::trace::{NoopSink, TraceSink};
use crate::error::{Error, Result};
use crate::types::headers;
use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Body, Method, Request};
use std::fmt;
use std::sync::Arc;
use url::Url;

/// Identity and authentication state for one API client
///
/// Setters take `&mut self`, so credentials cannot change while the
/// session is borrowed by requests in flight. The `with_*` variants
/// consume and return the session for value-style configuration.
#[derive(Clone)]
pub struct Session {
    application_id: String,
    rest_api_key: String,
    master_key: String,
    session_token: String,
    trace: Arc<dyn TraceSink>,
}

impl Session {
    /// Create a session authenticating with the REST API key
    pub fn new(application_id: impl Into<String>, rest_api_key: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            rest_api_key: rest_api_key.into(),
            master_key: String::new(),
            session_token: String::new(),
            trace: Arc::new(NoopSink),
        }
    }

    /// Send the master key instead of the REST API key. An empty string
    /// restores REST API key authentication.
    pub fn set_master_key(&mut self, master_key: impl Into<String>) {
        self.master_key = master_key.into();
    }

    /// Attach a user session token to subsequent requests. An empty
    /// string removes it.
    pub fn set_session_token(&mut self, session_token: impl Into<String>) {
        self.session_token = session_token.into();
    }

    /// Start writing trace lines to `sink`
    pub fn trace_on<S: TraceSink + 'static>(&mut self, sink: S) {
        self.trace = Arc::new(sink);
    }

    /// Stop tracing
    pub fn trace_off(&mut self) {
        self.trace = Arc::new(NoopSink);
    }

    #[must_use]
    pub fn with_master_key(mut self, master_key: impl Into<String>) -> Self {
        self.set_master_key(master_key);
        self
    }

    #[must_use]
    pub fn with_session_token(mut self, session_token: impl Into<String>) -> Self {
        self.set_session_token(session_token);
        self
    }

    #[must_use]
    pub fn with_trace<S: TraceSink + 'static>(mut self, sink: S) -> Self {
        self.trace_on(sink);
        self
    }

    pub fn application_id(&self) -> &str {
        &self.application_id
    }

    pub fn has_master_key(&self) -> bool {
        !self.master_key.is_empty()
    }

    pub fn has_session_token(&self) -> bool {
        !self.session_token.is_empty()
    }

    /// Write one line to the trace sink
    pub fn trace(&self, line: &str) {
        self.trace.trace_line(line);
    }

    /// Build an authenticated request. Performs no network activity.
    pub fn build_request(
        &self,
        method: Method,
        url: &str,
        content_type: &str,
        body: Option<Body>,
    ) -> Result<Request> {
        let url = Url::parse(url)
            .map_err(|e| Error::construction(format!("invalid URL '{url}': {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::construction(format!(
                "unsupported URL scheme '{}'",
                url.scheme()
            )));
        }

        let mut request = Request::new(method, url);
        let map = request.headers_mut();

        map.insert(
            HeaderName::from_static(headers::APPLICATION_ID),
            header_value("application id", &self.application_id, false)?,
        );
        if self.master_key.is_empty() {
            map.insert(
                HeaderName::from_static(headers::REST_API_KEY),
                header_value("REST API key", &self.rest_api_key, true)?,
            );
        } else {
            map.insert(
                HeaderName::from_static(headers::MASTER_KEY),
                header_value("master key", &self.master_key, true)?,
            );
        }
        if !self.session_token.is_empty() {
            map.insert(
                HeaderName::from_static(headers::SESSION_TOKEN),
                header_value("session token", &self.session_token, true)?,
            );
        }
        map.insert(
            CONTENT_TYPE,
            header_value("content type", content_type, false)?,
        );

        *request.body_mut() = body;
        Ok(request)
    }
}

// Credential values are never echoed into error messages.
fn header_value(what: &str, value: &str, sensitive: bool) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(value)
        .map_err(|_| Error::construction(format!("{what} is not a valid header value")))?;
    value.set_sensitive(sensitive);
    Ok(value)
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("application_id", &self.application_id)
            .field("has_master_key", &self.has_master_key())
            .field("has_session_token", &self.has_session_token())
            .finish_non_exhaustive()
    }
}
