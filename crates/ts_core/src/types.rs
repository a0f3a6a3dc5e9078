use serde::{Deserialize, Serialize};
use crate::error::InputError;

/// Text that passed the caller-side precondition: not blank after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizationRequest {
    text: String,
}

impl SummarizationRequest {
    pub fn new(text: impl Into<String>) -> Result<Self, InputError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(InputError::Empty);
        }
        Ok(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Outcome of a single summarization call. Remote failures are data, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SummarizationResult {
    Success { summary_text: String },
    Failure { error_message: String },
}

impl SummarizationResult {
    pub fn success(summary_text: impl Into<String>) -> Self {
        Self::Success { summary_text: summary_text.into() }
    }

    pub fn failure(error_message: impl Into<String>) -> Self {
        Self::Failure { error_message: error_message.into() }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn summary(&self) -> Option<&str> {
        match self {
            Self::Success { summary_text } => Some(summary_text),
            Self::Failure { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error_message } => Some(error_message),
        }
    }
}
