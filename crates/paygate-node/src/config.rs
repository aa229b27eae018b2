//! Service configuration.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

/// Documented placeholder that must never reach a deployment.
const PLACEHOLDER_SECRET: &str = "your_secret_key";

/// Configuration for the paygate service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// HTTP listen address.
    pub listen_addr: SocketAddr,
    /// Token signing secret. Required; never defaulted in deployment.
    pub secret_key: String,
    /// Session token lifetime in minutes.
    pub token_expiry_minutes: u64,
    /// Shared secret for the payment gateway's order signatures.
    pub gateway_secret: String,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Log format (pretty, json).
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: ([127, 0, 0, 1], 8080).into(),
            secret_key: String::new(),
            token_expiry_minutes: 30,
            gateway_secret: String::new(),
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file, then apply environment
    /// overrides (`PAYGATE_SECRET_KEY`, `PAYGATE_GATEWAY_SECRET`).
    ///
    /// A missing file yields the defaults, which [`Config::validate`]
    /// will refuse until the secrets are provided.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            serde_yaml::from_str(&raw)?
        } else {
            Self::default()
        };

        if let Ok(secret) = std::env::var("PAYGATE_SECRET_KEY") {
            config.secret_key = secret;
        }
        if let Ok(secret) = std::env::var("PAYGATE_GATEWAY_SECRET") {
            config.gateway_secret = secret;
        }

        Ok(config)
    }

    /// Validate startup requirements.
    ///
    /// The signing secret must be present and must not be the documented
    /// placeholder; there is no baked-in fallback key.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.secret_key.is_empty() || self.secret_key == PLACEHOLDER_SECRET {
            anyhow::bail!(
                "secret_key must be set via the config file or PAYGATE_SECRET_KEY"
            );
        }
        if self.token_expiry_minutes == 0 {
            anyhow::bail!("token_expiry_minutes must be positive");
        }
        Ok(())
    }

    /// Token lifetime as a duration.
    pub fn token_expiry(&self) -> Duration {
        Duration::from_secs(self.token_expiry_minutes * 60)
    }
}
