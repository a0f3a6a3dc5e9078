use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::anyhow;
use clap::Parser;
use tracing::{error, info};
use ts_core::logging::init_logging;
use ts_core::{input, ConfigResolver, SummarizationRequest, SummarizationResult, SummaryModel};
use ts_inference::{create_model, ModelKind};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Summarize text using the Hugging Face API.",
    after_help = "If no file is provided, text will be read from standard input."
)]
pub struct Cli {
    /// Path to a text file to summarize.
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ModelKind::HuggingFace, hide = true)]
    model_kind: ModelKind,
}

async fn summarize_input(source: Option<&Path>, model: &dyn SummaryModel) -> anyhow::Result<String> {
    let text = input::acquire(source)?;
    let request = SummarizationRequest::new(text)
        .map_err(|_| anyhow!("No input text provided. Exiting."))?;

    info!("Sending text to the summarization API...");
    match model.summarize(&request).await {
        SummarizationResult::Success { summary_text } => Ok(summary_text),
        SummarizationResult::Failure { error_message } => Err(anyhow!(error_message)),
    }
}

async fn run(cli: &Cli) -> anyhow::Result<String> {
    let config = ConfigResolver::resolve()?;
    let model = create_model(config, cli.model_kind)?;
    summarize_input(cli.file.as_deref(), model.as_ref()).await
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(summary) => {
            println!("{}", summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct CountingModel {
        reply: SummarizationResult,
        calls: AtomicUsize,
    }

    impl CountingModel {
        fn new(reply: SummarizationResult) -> Self {
            Self { reply, calls: AtomicUsize::new(0) }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl SummaryModel for CountingModel {
        fn name(&self) -> &str {
            "Counting"
        }

        async fn summarize(&self, _request: &SummarizationRequest) -> SummarizationResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone()
        }
    }

    fn text_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_file_flag() {
        let cli = Cli::try_parse_from(["ts", "-f", "article.txt"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("article.txt")));
        assert_eq!(cli.model_kind, ModelKind::HuggingFace);

        let cli = Cli::try_parse_from(["ts", "--file", "a.txt", "--model-kind", "dummy"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("a.txt")));
        assert_eq!(cli.model_kind, ModelKind::Dummy);
    }

    #[test]
    fn test_no_flag_means_stdin() {
        let cli = Cli::try_parse_from(["ts"]).unwrap();
        assert!(cli.file.is_none());
    }

    #[tokio::test]
    async fn test_summary_is_returned() {
        let model = CountingModel::new(SummarizationResult::success("Short version."));
        let file = text_file("A long article about many things.");

        let summary = summarize_input(Some(file.path()), &model).await.unwrap();
        assert_eq!(summary, "Short version.");
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test]
    async fn test_blank_input_never_reaches_model() {
        let model = CountingModel::new(SummarizationResult::success("unused"));
        let file = text_file(" \n\t\n");

        let err = summarize_input(Some(file.path()), &model).await.unwrap_err();
        assert_eq!(err.to_string(), "No input text provided. Exiting.");
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_file_never_reaches_model() {
        let model = CountingModel::new(SummarizationResult::success("unused"));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");

        let err = summarize_input(Some(&path), &model).await.unwrap_err();
        assert!(err.to_string().starts_with("File not found at"));
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_failure_becomes_error_message() {
        let model = CountingModel::new(SummarizationResult::failure(
            "API request failed. Details: connection refused",
        ));
        let file = text_file("Some text.");

        let err = summarize_input(Some(file.path()), &model).await.unwrap_err();
        assert_eq!(err.to_string(), "API request failed. Details: connection refused");
    }
}
