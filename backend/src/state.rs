//! Application state management
//!
//! The shared state handed to every handler via Axum's state extraction.
//! It is immutable after startup and cheap to clone.

use crate::config::AppConfig;
use health_predictor_shared::weights::ScoringConfig;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Scoring weights for this deployment
    #[inline]
    pub fn scoring(&self) -> &ScoringConfig {
        &self.config.scoring
    }
}
