//! Parse API dispatcher
//!
//! Resolves an endpoint against the base address, stamps the session's
//! credentials onto the request, performs exactly one round trip and
//! classifies the response. There is no retry: a transport failure is
//! terminal for the call.

use super::classify::classify;
use crate::auth::Session;
use crate::error::{Error, Result};
use crate::types::{BASE_URL, JSON_CONTENT_TYPE};
use reqwest::{Body, Method, Response};
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

/// Authenticated client for the Parse REST API
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    session: Session,
    base_url: String,
}

impl Client {
    /// Create a client against [`BASE_URL`]
    pub fn new(session: Session) -> Self {
        Self::with_http_client(session, reqwest::Client::new(), BASE_URL)
    }

    /// Create a client from a preconfigured `reqwest::Client` and base address
    pub fn with_http_client(
        session: Session,
        http: reqwest::Client,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            session,
            base_url: base_url.into(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable access for changing credentials between calls
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &reqwest::Client {
        &self.http
    }

    /// Send a bodyless JSON request
    pub async fn send_simple(&self, method: Method, endpoint: &str) -> Result<Response> {
        self.send(method, endpoint, JSON_CONTENT_TYPE, None).await
    }

    /// Send a JSON request with a pre-encoded body
    pub async fn send_with_body(
        &self,
        method: Method,
        endpoint: &str,
        body: impl Into<Body>,
    ) -> Result<Response> {
        self.send(method, endpoint, JSON_CONTENT_TYPE, Some(body.into()))
            .await
    }

    /// Serialize `value` as JSON and send it
    pub async fn send_json<T: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        value: &T,
    ) -> Result<Response> {
        let body = serde_json::to_vec(value)
            .map_err(|e| Error::construction(format!("failed to encode JSON body: {e}")))?;
        self.send_with_body(method, endpoint, body).await
    }

    /// Send a request and classify the response.
    ///
    /// `Ok` carries a 200/201 response with its body unread. A 400 body is
    /// consumed here; 401 and other statuses hand the response back inside
    /// the error.
    pub async fn send(
        &self,
        method: Method,
        endpoint: &str,
        content_type: &str,
        body: Option<Body>,
    ) -> Result<Response> {
        let url = self.resolve(endpoint)?;
        let request = self
            .session
            .build_request(method.clone(), url.as_str(), content_type, body)?;

        debug!("{} {}", method, url);
        self.session.trace(&format!("--> {method} {url}"));

        let response = match self.http.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Request {} {} failed: {}", method, url, e);
                self.session.trace(&format!("<-- {method} {url} failed: {e}"));
                return Err(Error::Transport(e));
            }
        };

        let status = response.status();
        debug!("{} {} -> {}", method, url, status.as_u16());
        self.session.trace(&format!("<-- {status} {url}"));

        classify(response).await.into_result()
    }

    /// Resolve an endpoint path against the base address
    pub fn resolve(&self, endpoint: &str) -> Result<Url> {
        Url::parse(&format!("{}{}", self.base_url, endpoint)).map_err(|source| {
            Error::AddressResolution {
                endpoint: endpoint.to_string(),
                source,
            }
        })
    }
}
