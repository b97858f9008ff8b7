pub mod defaults;
mod guide_config;
mod observability_config;

pub use guide_config::GuideConfig;
pub use observability_config::ObservabilityConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{TendError, TendResult};

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TendConfig {
    pub guide: GuideConfig,
    pub observability: ObservabilityConfig,
}

impl TendConfig {
    /// Parse a TOML document. Missing sections and keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> TendResult<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| TendError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> TendResult<()> {
        self.guide.validate()
    }
}
