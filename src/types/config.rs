//! Client environment and configuration

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

use crate::error::{Result, WalletsError};
use crate::types::constants::{environments, sandbox_keys, DEFAULT_REQUEST_TIMEOUT};

/// API environment a client points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Test environment with published credentials
    #[default]
    Sandbox,
    /// Production environment
    Live,
}

impl Environment {
    /// Get the environment name
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Sandbox => environments::SANDBOX,
            Environment::Live => environments::LIVE,
        }
    }

    /// Get the API base URL for this environment
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => environments::SANDBOX_BASE_URL,
            Environment::Live => environments::LIVE_BASE_URL,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = WalletsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            environments::SANDBOX => Ok(Environment::Sandbox),
            environments::LIVE => Ok(Environment::Live),
            other => Err(WalletsError::config(format!(
                "provided environment {:?} is not supported. Only {} or {} is allowed",
                other,
                environments::LIVE,
                environments::SANDBOX
            ))),
        }
    }
}

/// Client configuration.
///
/// Built once and handed to [`WalletsAfrica::new`](crate::WalletsAfrica::new),
/// which validates it before any request is made. There is no global
/// configuration; every client owns the config it was constructed with.
#[derive(Clone)]
pub struct Config {
    /// Environment the client talks to
    pub environment: Environment,
    /// Public key, sent as the bearer token on every request
    pub public_key: String,
    /// Secret key, embedded in request payloads and never sent in headers
    pub secret_key: String,
    /// Timeout applied to each request
    pub request_timeout: Duration,
    /// Base URL override for tests and self-hosted gateways
    pub base_url: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("environment", &self.environment)
            .field("public_key", &self.public_key)
            .field("secret_key", &"<redacted>")
            .field("request_timeout", &self.request_timeout)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    /// Create a config for the given environment and key pair
    pub fn new(
        environment: Environment,
        public_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            environment,
            public_key: public_key.into(),
            secret_key: secret_key.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            base_url: None,
        }
    }

    /// Create a sandbox config using the published sandbox credentials
    pub fn sandbox() -> Self {
        Self::new(
            Environment::Sandbox,
            sandbox_keys::PUBLIC,
            sandbox_keys::SECRET,
        )
    }

    /// Create a live config with your own key pair
    pub fn live(public_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self::new(Environment::Live, public_key, secret_key)
    }

    /// Set the per-request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Point the client at a different base URL instead of the environment
    /// default
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.public_key.is_empty() {
            return Err(WalletsError::config("public key is required"));
        }

        if self.secret_key.is_empty() {
            return Err(WalletsError::config("secret key is required"));
        }

        if self.environment == Environment::Live && self.public_key == sandbox_keys::PUBLIC {
            return Err(WalletsError::config(
                "using sandbox public key in live mode not permitted",
            ));
        }

        if self.environment == Environment::Live && self.secret_key == sandbox_keys::SECRET {
            return Err(WalletsError::config(
                "using sandbox secret key in live mode not permitted",
            ));
        }

        if let Some(ref base_url) = self.base_url {
            let parsed = Url::parse(base_url).map_err(|e| {
                WalletsError::config(format!("invalid base URL {:?}: {}", base_url, e))
            })?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                return Err(WalletsError::config(
                    "base URL must use http:// or https://",
                ));
            }
        }

        Ok(())
    }

    /// Resolve the URL requests are sent to: the override when set,
    /// otherwise the environment default. A trailing slash is dropped so
    /// endpoint paths can always be appended verbatim.
    pub fn api_url(&self) -> String {
        match self.base_url {
            Some(ref base_url) => base_url.trim_end_matches('/').to_string(),
            None => self.environment.base_url().to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::sandbox()
    }
}
