//! Configuration for the SEC EDGAR client

use crate::error::{EdgarError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable holding the SEC user agent
pub const USER_AGENT_ENV: &str = "SEC_USER_AGENT";

/// Default user agent; SEC asks for an application name and a contact address
pub const DEFAULT_USER_AGENT: &str = "sec-finance (sec-finance@example.com)";

/// SEC fair-access limit
const DEFAULT_REQUESTS_PER_SECOND: u32 = 10;

/// Configuration for EDGAR operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgarConfig {
    /// User-Agent sent with every SEC request
    pub user_agent: String,

    /// Request budget shared by all calls made through one client
    pub requests_per_second: u32,

    /// Request timeout duration
    pub request_timeout: Duration,

    /// Attempts per request when SEC fails transiently (1 disables retries)
    pub max_retries: u32,

    /// Initial backoff duration for retries
    pub retry_backoff_base: Duration,

    /// Upper bound for a single backoff
    pub retry_backoff_max: Duration,
}

impl Default for EdgarConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            requests_per_second: DEFAULT_REQUESTS_PER_SECOND,
            request_timeout: Duration::from_secs(30),
            max_retries: 3,
            retry_backoff_base: Duration::from_secs(1),
            retry_backoff_max: Duration::from_secs(10),
        }
    }
}

impl EdgarConfig {
    /// Create a new configuration builder
    pub fn builder() -> EdgarConfigBuilder {
        EdgarConfigBuilder::default()
    }

    /// Default configuration with the user agent taken from `SEC_USER_AGENT`
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(agent) = std::env::var(USER_AGENT_ENV) {
            if !agent.trim().is_empty() {
                config.user_agent = agent;
            }
        }
        config
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.user_agent.trim().is_empty() {
            return Err(EdgarError::Config(
                "user_agent must not be empty; SEC rejects anonymous requests".to_string(),
            ));
        }

        if self.requests_per_second == 0 {
            return Err(EdgarError::Config(
                "requests_per_second must be greater than 0".to_string(),
            ));
        }

        if self.retry_backoff_max < self.retry_backoff_base {
            return Err(EdgarError::Config(
                "retry_backoff_max must not be smaller than retry_backoff_base".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for EdgarConfig
#[derive(Debug, Default)]
pub struct EdgarConfigBuilder {
    user_agent: Option<String>,
    requests_per_second: Option<u32>,
    request_timeout: Option<Duration>,
    max_retries: Option<u32>,
    retry_backoff_base: Option<Duration>,
    retry_backoff_max: Option<Duration>,
}

impl EdgarConfigBuilder {
    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Set the user agent from application name and contact email
    pub fn contact(self, app_name: &str, email: &str) -> Self {
        self.user_agent(format!("{app_name} ({email})"))
    }

    /// Load the user agent from `SEC_USER_AGENT` if set
    pub fn with_env_user_agent(mut self) -> Self {
        if let Ok(agent) = std::env::var(USER_AGENT_ENV) {
            self.user_agent = Some(agent);
        }
        self
    }

    /// Set the request budget per second
    pub fn requests_per_second(mut self, rps: u32) -> Self {
        self.requests_per_second = Some(rps);
        self
    }

    /// Set request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Set maximum retries
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Set retry backoff base duration
    pub fn retry_backoff_base(mut self, duration: Duration) -> Self {
        self.retry_backoff_base = Some(duration);
        self
    }

    /// Set the backoff cap
    pub fn retry_backoff_max(mut self, duration: Duration) -> Self {
        self.retry_backoff_max = Some(duration);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<EdgarConfig> {
        let defaults = EdgarConfig::default();

        let config = EdgarConfig {
            user_agent: self.user_agent.unwrap_or(defaults.user_agent),
            requests_per_second: self
                .requests_per_second
                .unwrap_or(defaults.requests_per_second),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            max_retries: self.max_retries.unwrap_or(defaults.max_retries),
            retry_backoff_base: self
                .retry_backoff_base
                .unwrap_or(defaults.retry_backoff_base),
            retry_backoff_max: self.retry_backoff_max.unwrap_or(defaults.retry_backoff_max),
        };

        config.validate()?;
        Ok(config)
    }
}
