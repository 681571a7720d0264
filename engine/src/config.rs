//! Configuration for the bakery production engine
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with BAKERY_ prefix

use config::{Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::EngineResult;

/// Engine configuration
///
/// Defaults are documented here rather than buried in the calculators, so a
/// house starter kept at a different hydration can be configured instead of
/// patched.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EngineConfig {
    /// Hydration assumed for a levain whose recipe does not declare one.
    /// 0.75 matches the common 75% starter.
    pub default_levain_hydration: Decimal,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_levain_hydration: Decimal::new(75, 2),
        }
    }
}

impl EngineConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> EngineResult<Self> {
        let environment =
            std::env::var("BAKERY_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("default_levain_hydration", "0.75")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (BAKERY_ prefix)
            .add_source(
                Environment::with_prefix("BAKERY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
