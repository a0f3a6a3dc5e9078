use std::fmt;
use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use ts_core::Result;

/// Upper bound on a single remote call. There is no retry after it expires.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Body of a POST to the inference endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InferenceRequest {
    pub inputs: String,
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("{0}")]
    Connection(String),
}

/// One authorized JSON POST. Returns the raw body on a 2xx status; anything
/// else (network failure, timeout, non-2xx) is a `TransportError`.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    async fn post_json(
        &self,
        url: &str,
        credential: &str,
        request: &InferenceRequest,
    ) -> std::result::Result<String, TransportError>;
}

pub struct HttpTransport {
    client: Client,
    timeout: Duration,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("client", &"<reqwest::Client>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn classify(&self, error: reqwest::Error) -> TransportError {
        if error.is_timeout() {
            TransportError::Timeout(self.timeout)
        } else if error.is_connect() {
            TransportError::Connection(error.to_string())
        } else {
            TransportError::Http(error)
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(
        &self,
        url: &str,
        credential: &str,
        request: &InferenceRequest,
    ) -> std::result::Result<String, TransportError> {
        let response = self.client
            .post(url)
            .bearer_auth(credential)
            .json(request)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        tracing::debug!("Inference endpoint answered with {}", response.status());

        response
            .error_for_status()
            .map_err(|e| self.classify(e))?
            .text()
            .await
            .map_err(|e| self.classify(e))
    }
}
