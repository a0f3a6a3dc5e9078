use std::sync::Arc;
use ts_core::prelude::*;
use ts_inference::{create_model, ModelKind};

/// Resolved once at startup and shared read-only between requests.
#[derive(Debug, Clone)]
pub enum AppState {
    Ready(Arc<dyn SummaryModel>),
    /// The page renders the error and never calls the API.
    Misconfigured(ConfigError),
}

impl AppState {
    pub fn new(model: Arc<dyn SummaryModel>) -> Self {
        Self::Ready(model)
    }

    pub fn from_config(config: std::result::Result<Config, ConfigError>, kind: ModelKind) -> Result<Self> {
        match config {
            Ok(config) => Ok(Self::Ready(create_model(config, kind)?)),
            Err(e) => Ok(Self::Misconfigured(e)),
        }
    }
}
