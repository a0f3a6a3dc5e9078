use std::path::PathBuf;
use thiserror::Error;

/// Problems resolving the remote endpoint and credential. Always fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Hugging Face API key not found. Please set {key} in your environment or .env file.")]
    MissingCredential { key: &'static str },

    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Problems obtaining the text to summarize. Fatal for the invocation.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("File not found at '{}'.", path.display())]
    NotFound { path: PathBuf },

    #[error("No input text provided.")]
    Empty,

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
