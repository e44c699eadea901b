//! Process-wide authentication settings.
//!
//! Loaded once at startup and shared read-only by every request. The signing
//! secret is the only required value.

use figment::{providers::Env, Figment};
use serde::Deserialize;
use thiserror::Error;

use crate::secret::Secret;

/// Default name of the session cookie carrying the token.
pub const DEFAULT_COOKIE_NAME: &str = "jwt_token";
/// Default redirect target for unauthenticated page requests.
pub const DEFAULT_LOGIN_PATH: &str = "/auth/login";
/// Default redirect target for forbidden admin-only pages.
pub const DEFAULT_DASHBOARD_PATH: &str = "/dashboard";
/// Largest clock skew, in seconds, tolerated on `exp`.
pub const MAX_LEEWAY_SECS: u64 = 3600;

/// Authentication configuration.
///
/// # Examples
///
/// ```
/// use waf_authz::AuthConfig;
///
/// let config = AuthConfig::new("signing-key");
/// assert_eq!(config.cookie_name, "jwt_token");
/// assert_eq!(config.login_path, "/auth/login");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret used to verify session tokens
    pub jwt_secret: Secret<String>,
    /// Cookie consulted when no bearer header is present
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Where unauthenticated page requests are sent
    #[serde(default = "default_login_path")]
    pub login_path: String,
    /// Where forbidden admin-only page requests are sent
    #[serde(default = "default_dashboard_path")]
    pub dashboard_path: String,
    /// Clock skew tolerated on `exp`, in seconds
    #[serde(default)]
    pub leeway_secs: u64,
}

fn default_cookie_name() -> String {
    DEFAULT_COOKIE_NAME.to_string()
}

fn default_login_path() -> String {
    DEFAULT_LOGIN_PATH.to_string()
}

fn default_dashboard_path() -> String {
    DEFAULT_DASHBOARD_PATH.to_string()
}

/// Configuration rejected by [`AuthConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The signing secret is empty
    #[error("jwt_secret must not be empty")]
    EmptySecret,
    /// The cookie name is empty
    #[error("cookie_name must not be empty")]
    EmptyCookieName,
    /// The clock-skew tolerance exceeds [`MAX_LEEWAY_SECS`]
    #[error("leeway_secs must be at most {max}, got {value}")]
    LeewayTooLarge {
        /// Configured value
        value: u64,
        /// Upper bound
        max: u64,
    },
    /// A redirect target is not an absolute path
    #[error("{field} must be an absolute path, got '{value}'")]
    RelativePath {
        /// Offending field
        field: &'static str,
        /// Offending value
        value: String,
    },
}

impl AuthConfig {
    /// Creates a configuration with the given secret and default paths.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: Secret::new(secret.into()),
            cookie_name: default_cookie_name(),
            login_path: default_login_path(),
            dashboard_path: default_dashboard_path(),
            leeway_secs: 0,
        }
    }

    /// Sets the tolerated clock skew on `exp`.
    pub fn with_leeway(mut self, leeway_secs: u64) -> Self {
        self.leeway_secs = leeway_secs;
        self
    }

    /// Sets the session cookie name.
    pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = name.into();
        self
    }

    /// Provider chain: `WAF_`-prefixed environment variables.
    ///
    /// `WAF_JWT_SECRET`, `WAF_COOKIE_NAME`, `WAF_LOGIN_PATH`,
    /// `WAF_DASHBOARD_PATH`, `WAF_LEEWAY_SECS`.
    pub fn figment() -> Figment {
        Figment::new().merge(Env::prefixed("WAF_"))
    }

    /// Loads and validates the configuration from the environment.
    pub fn load() -> Result<Self, figment::Error> {
        Self::from_figment(&Self::figment())
    }

    /// Extracts and validates the configuration from any figment.
    ///
    /// Hosts that already own a figment (for example one layered over a
    /// config file) can merge their providers and hand it in here.
    pub fn from_figment(figment: &Figment) -> Result<Self, figment::Error> {
        let config: Self = figment.extract()?;
        config
            .validate()
            .map_err(|e| figment::Error::from(e.to_string()))?;
        Ok(config)
    }

    /// Checks the invariants the guard relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.expose_secret().is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        if self.cookie_name.trim().is_empty() {
            return Err(ConfigError::EmptyCookieName);
        }
        if self.leeway_secs > MAX_LEEWAY_SECS {
            return Err(ConfigError::LeewayTooLarge {
                value: self.leeway_secs,
                max: MAX_LEEWAY_SECS,
            });
        }
        for (field, value) in [
            ("login_path", &self.login_path),
            ("dashboard_path", &self.dashboard_path),
        ] {
            if !value.starts_with('/') {
                return Err(ConfigError::RelativePath {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}
