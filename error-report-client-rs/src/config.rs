//! Configuration for the submission client
//!
//! Defaults match the wire contract of the error reporting server: a hard
//! 30-second timeout and a fixed identifying `User-Agent`. Both can be
//! overridden from the environment; the CLI surface itself exposes no flags
//! for them.

use std::env;
use std::fmt;
use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};

/// Hard timeout for the single submission attempt
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client identifier sent to the server
#[derive(Debug, Clone)]
pub struct UserAgent {
    /// Application name
    pub app_name: String,

    /// Version string
    pub version: String,

    /// Optional extra info
    pub extra: Option<String>,
}

impl Default for UserAgent {
    fn default() -> Self {
        Self {
            app_name: "error-report-client".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            extra: Some("yocto-error-reporter".to_string()),
        }
    }
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.app_name, self.version)?;

        if let Some(ref extra) = self.extra {
            write!(f, " ({})", extra)?;
        }

        Ok(())
    }
}

/// Environment variable overriding the submission timeout, in seconds
pub const TIMEOUT_ENV_VAR: &str = "ERROR_REPORT_TIMEOUT_SECS";

/// Environment variable overriding the client identifier string
pub const USER_AGENT_ENV_VAR: &str = "ERROR_REPORT_USER_AGENT";

/// Submission client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Client identifier sent as the `User-Agent` header
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: UserAgent::default().to_string(),
        }
    }
}

impl ClientConfig {
    /// Load the configuration, applying environment overrides to the defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(value) = env::var(TIMEOUT_ENV_VAR) {
            match value.parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout_secs = secs,
                _ => warn!("ignoring invalid {} value '{}'", TIMEOUT_ENV_VAR, value),
            }
        }

        if let Ok(value) = env::var(USER_AGENT_ENV_VAR) {
            if !value.is_empty() {
                config.user_agent = value;
            }
        }

        config
    }

    /// Set the request timeout in seconds
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the client identifier string
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
