use std::sync::Arc;
use tracing::info;
use ts_core::{Config, Result, SummaryModel};

pub mod dummy;
pub mod huggingface;

pub use dummy::DummyModel;
pub use huggingface::{truncate_input, HuggingFaceModel, Truncation, MAX_INPUT_CHARS};

/// Which summarizer backs the front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ModelKind {
    /// Hosted inference API
    #[default]
    #[value(name = "huggingface")]
    HuggingFace,
    /// Offline, first sentences of the input
    Dummy,
}

pub fn create_model(config: Config, kind: ModelKind) -> Result<Arc<dyn SummaryModel>> {
    let model: Arc<dyn SummaryModel> = match kind {
        ModelKind::HuggingFace => Arc::new(HuggingFaceModel::new(config)?),
        ModelKind::Dummy => Arc::new(DummyModel::default()),
    };
    info!("🧠 Summarization model ready (using {})", model.name());
    Ok(model)
}
