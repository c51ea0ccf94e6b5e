//! Configuration management for the Health Predictor backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: HP__)

use anyhow::Result;
use health_predictor_shared::weights::ScoringConfig;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    /// Scoring weights; any coefficient left out keeps its stock value
    #[serde(default)]
    pub scoring: ScoringConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Per-request timeout
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                request_timeout_secs: 30,
            },
            scoring: ScoringConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with HP__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            // e.g., HP__SCORING__CARDIOVASCULAR__NORMALIZER=20 sets scoring.cardiovascular.normalizer
            .add_source(config::Environment::with_prefix("HP").separator("__"))
            .build()?;

        let config: AppConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject weights that would break the scoring formulas
    pub fn validate(&self) -> Result<()> {
        let scoring = &self.scoring;
        if scoring.cardiovascular.normalizer <= 0.0 || scoring.diabetes.normalizer <= 0.0 {
            anyhow::bail!("Risk normalizers must be positive");
        }
        let ensemble = &scoring.ensemble;
        let total = ensemble.metabolic + ensemble.cardiovascular + ensemble.diabetes + ensemble.lifestyle;
        if (total - 1.0).abs() > 1e-6 {
            anyhow::bail!("Ensemble weights must sum to 1.0 (got {})", total);
        }
        Ok(())
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
