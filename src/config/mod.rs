//
//  bitly-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! This module turns explicit settings into a ready-to-use
//! [`BitlyClient`]. There is no process-wide client: callers load a
//! [`ClientConfig`] and pass it to [`ClientConfig::build_client`].
//!
//! ## Sources
//!
//! - **Environment**: [`ClientConfig::from_env`]
//! - **TOML file**: [`ClientConfig::load`] / [`ClientConfig::from_toml_str`]
//!
//! ## Environment Variables
//!
//! | Variable | Field |
//! |----------|-------|
//! | `BITLY_TOKEN` | `token` |
//! | `BITLY_USERNAME` | `username` |
//! | `BITLY_PASSWORD` | `password` |
//! | `BITLY_BASE_URL` | `base_url` |
//! | `BITLY_USER_AGENT` | `user_agent` |
//! | `BITLY_DEBUG` | `debug` (`true`, any case) |
//! | `BITLY_TIMEOUT_SECS` | `timeout_secs` |
//!
//! ## Example Configuration File
//!
//! ```toml
//! token = "your-access-token"
//! base_url = "https://api-ssl.bitly.com"
//! debug = false
//! timeout_secs = 30
//! ```

use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::api::BitlyClient;
use crate::auth::{BasicCredentials, BearerCredentials, Credentials};

/// Settings needed to construct a [`BitlyClient`].
///
/// All fields are optional; unset fields fall back to the client defaults.
/// A bearer `token` takes precedence over `username`/`password`.
///
/// # Example
///
/// ```rust
/// use bitly_client::config::ClientConfig;
///
/// let config = ClientConfig::from_toml_str(r#"
///     token = "abc"
///     debug = true
/// "#).unwrap();
///
/// assert_eq!(config.token.as_deref(), Some("abc"));
/// assert!(config.debug);
/// ```
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API endpoint; defaults to `https://api-ssl.bitly.com`.
    pub base_url: Option<String>,

    /// User-Agent header; defaults to `bitly-client/<version>`.
    pub user_agent: Option<String>,

    /// Log requests and responses at debug level.
    pub debug: bool,

    /// Whole-request timeout applied to the HTTP transport.
    pub timeout_secs: Option<u64>,

    /// OAuth access token.
    pub token: Option<String>,

    /// Username for HTTP Basic authentication.
    pub username: Option<String>,

    /// Password for HTTP Basic authentication.
    pub password: Option<String>,
}

impl ClientConfig {
    /// Reads the configuration from `BITLY_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `BITLY_TIMEOUT_SECS` is set but is not a number.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let timeout_secs = get("BITLY_TIMEOUT_SECS")
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("BITLY_TIMEOUT_SECS is not a number: {}", raw))
            })
            .transpose()?;

        Ok(Self {
            base_url: get("BITLY_BASE_URL"),
            user_agent: get("BITLY_USER_AGENT"),
            debug: get("BITLY_DEBUG").is_some_and(|value| value.eq_ignore_ascii_case("true")),
            timeout_secs,
            token: get("BITLY_TOKEN"),
            username: get("BITLY_USERNAME"),
            password: get("BITLY_PASSWORD"),
        })
    }

    /// Parses a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse client configuration")
    }

    /// Loads a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Checks whether any credentials are configured.
    pub fn has_credentials(&self) -> bool {
        self.token.is_some() || (self.username.is_some() && self.password.is_some())
    }

    /// Returns the configured credential provider.
    ///
    /// # Errors
    ///
    /// Returns an error when neither a token nor a username/password pair is
    /// configured.
    pub fn credentials(&self) -> Result<Arc<dyn Credentials>> {
        if let Some(token) = &self.token {
            return Ok(Arc::new(BearerCredentials::new(token.clone())));
        }

        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Ok(Arc::new(BasicCredentials::new(
                username.clone(),
                password.clone(),
            ))),
            _ => bail!("No credentials configured: set BITLY_TOKEN, or BITLY_USERNAME and BITLY_PASSWORD"),
        }
    }

    /// Constructs the HTTP transport and the client.
    pub fn build_client(&self) -> Result<BitlyClient> {
        let credentials = self.credentials()?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().context("Failed to create HTTP client")?;

        let mut client = BitlyClient::from_parts(http, credentials).with_debug(self.debug);
        if let Some(base_url) = &self.base_url {
            client = client.with_base_url(base_url.clone());
        }
        if let Some(user_agent) = &self.user_agent {
            client = client.with_user_agent(user_agent.clone());
        }

        tracing::debug!(base_url = client.base_url(), "Client configured");
        Ok(client)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |value: &Option<String>| value.as_ref().map(|_| "<redacted>");
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("debug", &self.debug)
            .field("timeout_secs", &self.timeout_secs)
            .field("token", &redact(&self.token))
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;
    use crate::api::client::{default_user_agent, DEFAULT_BASE_URL};

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_reads_all_fields() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("BITLY_TOKEN", "tok"),
            ("BITLY_BASE_URL", "http://localhost:8080"),
            ("BITLY_USER_AGENT", "agent/1"),
            ("BITLY_DEBUG", "TRUE"),
            ("BITLY_TIMEOUT_SECS", "15"),
        ]))
        .unwrap();

        assert_eq!(config.token.as_deref(), Some("tok"));
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(config.user_agent.as_deref(), Some("agent/1"));
        assert!(config.debug);
        assert_eq!(config.timeout_secs, Some(15));
    }

    #[test]
    fn test_from_lookup_empty_values_are_unset() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("BITLY_TOKEN", ""),
            ("BITLY_DEBUG", "yes"),
        ]))
        .unwrap();

        assert_eq!(config, ClientConfig::default());
        assert!(!config.has_credentials());
    }

    #[test]
    fn test_from_lookup_bad_timeout() {
        let err = ClientConfig::from_lookup(lookup(&[("BITLY_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(err.to_string().contains("BITLY_TIMEOUT_SECS"));
    }

    #[test]
    fn test_token_takes_precedence() {
        let config = ClientConfig {
            token: Some("tok".to_string()),
            username: Some("user".to_string()),
            password: Some("pass".to_string()),
            ..Default::default()
        };
        let headers = config.credentials().unwrap().headers();
        assert_eq!(headers["Authorization"], "Bearer tok");
    }

    #[test]
    fn test_basic_credentials_from_config() {
        let config = ClientConfig {
            username: Some("test".to_string()),
            password: Some("test".to_string()),
            ..Default::default()
        };
        let headers = config.credentials().unwrap().headers();
        assert_eq!(headers["Authorization"], "Basic dGVzdDp0ZXN0");
    }

    #[test]
    fn test_missing_credentials() {
        let config = ClientConfig {
            username: Some("user".to_string()),
            ..Default::default()
        };
        assert!(config.credentials().is_err());
        assert!(config.build_client().is_err());
    }

    #[test]
    fn test_build_client_applies_settings() {
        let config = ClientConfig {
            token: Some("tok".to_string()),
            base_url: Some("http://localhost:8080".to_string()),
            user_agent: Some("bitly-client/0.1.0 +livetest".to_string()),
            debug: true,
            timeout_secs: Some(5),
            ..Default::default()
        };
        let client = config.build_client().unwrap();

        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.user_agent(), "bitly-client/0.1.0 +livetest");
        assert!(client.is_debug());
    }

    #[test]
    fn test_build_client_defaults() {
        let config = ClientConfig {
            token: Some("tok".to_string()),
            ..Default::default()
        };
        let client = config.build_client().unwrap();

        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(client.user_agent(), default_user_agent());
        assert!(!client.is_debug());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "token = \"file-token\"").unwrap();
        writeln!(file, "timeout_secs = 30").unwrap();

        let config = ClientConfig::load(file.path()).unwrap();
        assert_eq!(config.token.as_deref(), Some("file-token"));
        assert_eq!(config.timeout_secs, Some(30));
        assert!(!config.debug);
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "debug = \"maybe\"").unwrap();

        assert!(ClientConfig::load(file.path()).is_err());
        assert!(ClientConfig::load("/nonexistent/bitly.toml").is_err());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = ClientConfig {
            token: Some("super-secret".to_string()),
            ..Default::default()
        };
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
