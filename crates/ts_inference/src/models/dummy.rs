use std::fmt;
use ts_core::{SummarizationRequest, SummarizationResult, SummaryModel};
use super::huggingface::truncate_input;

/// Offline stand-in: keeps the first sentences of the input.
pub struct DummyModel {
    sentences: usize,
}

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").field("sentences", &self.sentences).finish()
    }
}

impl Default for DummyModel {
    fn default() -> Self {
        Self { sentences: 3 }
    }
}

impl DummyModel {
    pub fn new(sentences: usize) -> Self {
        Self { sentences: sentences.max(1) }
    }
}

#[async_trait::async_trait]
impl SummaryModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn summarize(&self, request: &SummarizationRequest) -> SummarizationResult {
        let input = truncate_input(request.text());
        let sentences: Vec<&str> = input.text
            .split(['.', '!', '?'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .take(self.sentences)
            .collect();

        if sentences.is_empty() {
            return SummarizationResult::success(input.text.trim());
        }

        let summary = sentences.join(". ") + ".";
        tracing::debug!("Generated summary from content: {}", summary);
        SummarizationResult::success(summary)
    }
}
