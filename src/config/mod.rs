#[cfg(feature = "cli")]
pub mod cli;

use crate::adapters::{brasilapi, viacep};
use crate::core::race::DEFAULT_DEADLINE;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupConfig {
    pub viacep_url: String,
    pub brasilapi_url: String,
    pub timeout_ms: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            viacep_url: viacep::DEFAULT_BASE_URL.to_string(),
            brasilapi_url: brasilapi::DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_DEADLINE.as_millis() as u64,
        }
    }
}

impl ConfigProvider for LookupConfig {
    fn viacep_url(&self) -> &str {
        &self.viacep_url
    }

    fn brasilapi_url(&self) -> &str {
        &self.brasilapi_url
    }

    fn deadline(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Validate for LookupConfig {
    fn validate(&self) -> Result<()> {
        validate_url("viacep_url", &self.viacep_url)?;
        validate_url("brasilapi_url", &self.brasilapi_url)?;
        validate_positive_number("timeout_ms", self.timeout_ms, 1)?;
        Ok(())
    }
}
