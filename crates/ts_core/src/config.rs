use std::fmt;
use tracing::{debug, warn};
use url::Url;
use crate::error::ConfigError;

pub const CREDENTIAL_KEY: &str = "HF_API_KEY";
pub const MODEL_KEY: &str = "HF_MODEL";
pub const API_BASE_KEY: &str = "HF_API_BASE";

pub const DEFAULT_MODEL: &str = "facebook/bart-large-cnn";
pub const DEFAULT_API_BASE: &str = "https://api-inference.huggingface.co";

/// Resolved endpoint and credential. Built once, then passed around by value.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub endpoint_url: String,
    pub credential: String,
    pub model: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("endpoint_url", &self.endpoint_url)
            .field("credential", &"<redacted>")
            .field("model", &self.model)
            .finish()
    }
}

impl Config {
    pub fn new(api_base: &str, model: &str, credential: impl Into<String>) -> Result<Self, ConfigError> {
        let endpoint_url = model_endpoint(api_base, model);
        Url::parse(&endpoint_url).map_err(|e| ConfigError::InvalidUrl {
            url: endpoint_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            endpoint_url,
            credential: credential.into(),
            model: model.to_string(),
        })
    }
}

/// `<base>/models/<model-id>`
pub fn model_endpoint(api_base: &str, model: &str) -> String {
    format!("{}/models/{}", api_base.trim_end_matches('/'), model)
}

pub struct ConfigResolver;

impl ConfigResolver {
    /// Loads `.env` if present, then reads the process environment.
    pub fn resolve() -> Result<Config, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => debug!("No .env file found"),
            Err(e) => warn!("Ignoring unreadable .env file: {}", e),
        }
        Self::resolve_with(|key| std::env::var(key).ok())
    }

    pub fn resolve_with<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let Some(credential) = non_blank(CREDENTIAL_KEY) else {
            debug!("{} is not set", CREDENTIAL_KEY);
            return Err(ConfigError::MissingCredential { key: CREDENTIAL_KEY });
        };
        let model = non_blank(MODEL_KEY).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_base = non_blank(API_BASE_KEY).unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let config = Config::new(api_base.trim(), model.trim(), credential)?;
        debug!("Resolved summarization endpoint: {}", config.endpoint_url);
        Ok(config)
    }
}
