//! Client configuration
//!
//! `ClientConfig` describes how to construct a [`Client`]: credentials, the
//! base address and transport settings. It can be loaded from a JSON or
//! YAML file, from strings, or from `PARSE_*` environment variables.

use crate::auth::Session;
use crate::error::{Error, Result};
use crate::http::Client;
use crate::types::BASE_URL;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Environment variable names read by [`ClientConfig::from_env`]
pub mod env {
    pub const APPLICATION_ID: &str = "PARSE_APPLICATION_ID";
    pub const REST_API_KEY: &str = "PARSE_REST_API_KEY";
    pub const MASTER_KEY: &str = "PARSE_MASTER_KEY";
    pub const SESSION_TOKEN: &str = "PARSE_SESSION_TOKEN";
    pub const BASE_URL: &str = "PARSE_BASE_URL";
    pub const TIMEOUT_SECS: &str = "PARSE_TIMEOUT_SECS";
}

/// Configuration for building a client
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Application identifier
    #[serde(default)]
    pub application_id: String,

    /// REST API key
    #[serde(default)]
    pub rest_api_key: String,

    /// Master key, sent instead of the REST API key when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_key: Option<String>,

    /// User session token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,

    /// Base address endpoints are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request deadline in seconds (none by default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
    /// Create a config builder with the two required credentials
    pub fn builder(
        application_id: impl Into<String>,
        rest_api_key: impl Into<String>,
    ) -> ClientConfigBuilder {
        ClientConfigBuilder {
            config: Self {
                application_id: application_id.into(),
                rest_api_key: rest_api_key.into(),
                master_key: None,
                session_token: None,
                base_url: default_base_url(),
                timeout_secs: None,
                user_agent: default_user_agent(),
            },
        }
    }

    /// Load from a `.json`, `.yaml` or `.yml` file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            Some("yaml" | "yml") => Self::from_yaml_str(&content),
            _ => Err(Error::config(format!(
                "Unsupported config file '{}': expected .json, .yaml or .yml",
                path.display()
            ))),
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `PARSE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any variable source; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let timeout_secs = match get(env::TIMEOUT_SECS) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                Error::config(format!("Invalid {}='{raw}': {e}", env::TIMEOUT_SECS))
            })?),
            None => None,
        };

        let config = Self {
            application_id: get(env::APPLICATION_ID).unwrap_or_default(),
            rest_api_key: get(env::REST_API_KEY).unwrap_or_default(),
            master_key: get(env::MASTER_KEY),
            session_token: get(env::SESSION_TOKEN),
            base_url: get(env::BASE_URL).unwrap_or_else(default_base_url),
            timeout_secs,
            user_agent: default_user_agent(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check required fields
    pub fn validate(&self) -> Result<()> {
        if self.application_id.is_empty() {
            return Err(Error::missing_field("application_id"));
        }
        if self.rest_api_key.is_empty() {
            return Err(Error::missing_field("rest_api_key"));
        }
        if self.base_url.is_empty() {
            return Err(Error::missing_field("base_url"));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Build the session described by this config
    pub fn session(&self) -> Session {
        let mut session = Session::new(&self.application_id, &self.rest_api_key);
        if let Some(key) = &self.master_key {
            session.set_master_key(key);
        }
        if let Some(token) = &self.session_token {
            session.set_session_token(token);
        }
        session
    }

    /// Build a client
    pub fn build(&self) -> Result<Client> {
        self.validate()?;

        let mut builder = reqwest::Client::builder().user_agent(&self.user_agent);
        if let Some(timeout) = self.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Client::with_http_client(
            self.session(),
            http,
            self.base_url.clone(),
        ))
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("application_id", &self.application_id)
            .field("has_master_key", &self.master_key.is_some())
            .field("has_session_token", &self.session_token.is_some())
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the master key
    pub fn master_key(mut self, key: impl Into<String>) -> Self {
        self.config.master_key = Some(key.into());
        self
    }

    /// Set the session token
    pub fn session_token(mut self, token: impl Into<String>) -> Self {
        self.config.session_token = Some(token.into());
        self
    }

    /// Override the base address
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the per-request deadline
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = Some(secs);
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_builder_defaults() {
        let config = ClientConfig::builder("app", "rest").build();
        assert_eq!(config.base_url, BASE_URL);
        assert_eq!(config.master_key, None);
        assert_eq!(config.timeout(), None);
        assert!(config.user_agent.starts_with("parse-rest/"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::builder("app", "rest")
            .master_key("master")
            .session_token("r:abc")
            .base_url("http://localhost:1337/parse/")
            .timeout_secs(5)
            .user_agent("test-agent/1.0")
            .build();

        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.base_url, "http://localhost:1337/parse/");
        assert_eq!(config.user_agent, "test-agent/1.0");

        let session = config.session();
        assert!(session.has_master_key());
        assert!(session.has_session_token());
        assert_eq!(session.application_id(), "app");
    }

    #[test]
    fn test_from_json_str() {
        let config = ClientConfig::from_json_str(
            r#"{"application_id": "app", "rest_api_key": "rest", "timeout_secs": 10}"#,
        )
        .unwrap();
        assert_eq!(config.application_id, "app");
        assert_eq!(config.base_url, BASE_URL);
        assert_eq!(config.timeout_secs, Some(10));
    }

    #[test]
    fn test_from_yaml_str() {
        let yaml = r"
application_id: app
rest_api_key: rest
master_key: master
base_url: http://localhost:1337/parse/
";
        let config = ClientConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.master_key.as_deref(), Some("master"));
        assert_eq!(config.base_url, "http://localhost:1337/parse/");
    }

    #[test]
    fn test_missing_required_field() {
        let err = ClientConfig::from_json_str(r#"{"application_id": "app"}"#).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingConfigField { ref field } if field == "rest_api_key"
        ));

        let err = ClientConfig::from_yaml_str("rest_api_key: rest").unwrap_err();
        assert!(matches!(
            err,
            Error::MissingConfigField { ref field } if field == "application_id"
        ));
    }

    #[test]
    fn test_from_file_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "application_id: app\nrest_api_key: rest").unwrap();
        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.rest_api_key, "rest");

        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"application_id": "a", "rest_api_key": "r"}}"#).unwrap();
        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.application_id, "a");
    }

    #[test]
    fn test_from_file_unsupported_extension() {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        let err = ClientConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = ClientConfig::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = [
            (env::APPLICATION_ID, "app"),
            (env::REST_API_KEY, "rest"),
            (env::MASTER_KEY, ""),
            (env::SESSION_TOKEN, "r:abc"),
            (env::TIMEOUT_SECS, "30"),
        ]
        .into_iter()
        .collect();

        let config =
            ClientConfig::from_lookup(|key| vars.get(key).map(|v| (*v).to_string())).unwrap();

        assert_eq!(config.master_key, None);
        assert_eq!(config.session_token.as_deref(), Some("r:abc"));
        assert_eq!(config.timeout_secs, Some(30));
        assert_eq!(config.base_url, BASE_URL);
    }

    #[test]
    fn test_from_lookup_invalid_timeout() {
        let err = ClientConfig::from_lookup(|key| match key {
            env::APPLICATION_ID | env::REST_API_KEY => Some("x".to_string()),
            env::TIMEOUT_SECS => Some("soon".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_build_client() {
        let client = ClientConfig::builder("app", "rest")
            .base_url("http://localhost:1337/parse/")
            .timeout_secs(1)
            .build()
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:1337/parse/");
        assert_eq!(client.session().application_id(), "app");
    }

    #[test]
    fn test_debug_hides_secrets() {
        let config = ClientConfig::builder("app", "secret-rest")
            .master_key("secret-master")
            .build();
        assert!(!format!("{config:?}").contains("secret"));
    }
}
