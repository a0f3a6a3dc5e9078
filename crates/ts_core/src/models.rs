use std::fmt;
use async_trait::async_trait;
use crate::types::{SummarizationRequest, SummarizationResult};

#[async_trait]
pub trait SummaryModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Summarize one request. Remote failures come back as `SummarizationResult::Failure`.
    async fn summarize(&self, request: &SummarizationRequest) -> SummarizationResult;
}
