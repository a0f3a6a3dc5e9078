use std::fmt;
use std::sync::Arc;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};
use ts_core::{Config, Result, SummarizationRequest, SummarizationResult, SummaryModel};
use crate::transport::{HttpTransport, InferenceRequest, Transport};

/// Outbound text is capped at this many characters (not bytes).
pub const MAX_INPUT_CHARS: usize = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Truncation<'a> {
    pub text: &'a str,
    pub truncated: bool,
}

/// Cuts `text` to its first `MAX_INPUT_CHARS` characters.
pub fn truncate_input(text: &str) -> Truncation<'_> {
    match text.char_indices().nth(MAX_INPUT_CHARS) {
        Some((end, _)) => Truncation { text: &text[..end], truncated: true },
        None => Truncation { text, truncated: false },
    }
}

/// What the inference endpoint sent back, once decoded.
#[derive(Debug, Clone, PartialEq)]
enum ResponseShape {
    /// `[{"summary_text": "..."}, ...]`
    Summary(String),
    Unexpected(Value),
}

impl From<Value> for ResponseShape {
    fn from(value: Value) -> Self {
        if let Value::Array(items) = &value {
            if let Some(Value::Object(first)) = items.first() {
                if let Some(Value::String(summary)) = first.get("summary_text") {
                    return Self::Summary(summary.clone());
                }
            }
        }
        Self::Unexpected(value)
    }
}

fn classify_body(body: &str) -> SummarizationResult {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            debug!("Response body is not JSON: {}", e);
            return SummarizationResult::failure(format!("Could not decode JSON. Raw response: {}", body));
        }
    };

    match ResponseShape::from(value) {
        ResponseShape::Summary(summary) => SummarizationResult::success(summary),
        ResponseShape::Unexpected(value) => {
            SummarizationResult::failure(format!("Unexpected API response format. Details: {}", value))
        }
    }
}

/// Summarizer backed by the Hugging Face hosted inference API.
pub struct HuggingFaceModel {
    config: Config,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for HuggingFaceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HuggingFaceModel")
            .field("endpoint_url", &self.config.endpoint_url)
            .field("credential", &"<redacted>")
            .field("transport", &self.transport)
            .finish()
    }
}

impl HuggingFaceModel {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self::with_transport(config, Arc::new(HttpTransport::new()?)))
    }

    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// One attempt, no retry. Every outcome, including network failure, is
    /// returned as a `SummarizationResult`.
    pub async fn summarize_text(&self, text: &str) -> SummarizationResult {
        let input = truncate_input(text);
        if input.truncated {
            warn!("Input text exceeds max length. Truncating to {} characters.", MAX_INPUT_CHARS);
        }

        let request = InferenceRequest { inputs: input.text.to_string() };
        debug!("Posting {} characters to {}", input.text.chars().count(), self.config.endpoint_url);

        match self.transport.post_json(&self.config.endpoint_url, &self.config.credential, &request).await {
            Ok(body) => classify_body(&body),
            Err(e) => SummarizationResult::failure(format!("API request failed. Details: {}", e)),
        }
    }
}

#[async_trait]
impl SummaryModel for HuggingFaceModel {
    fn name(&self) -> &str {
        "HuggingFace"
    }

    async fn summarize(&self, request: &SummarizationRequest) -> SummarizationResult {
        self.summarize_text(request.text()).await
    }
}
