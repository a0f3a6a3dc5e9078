use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};
use ts_core::{ConfigError, SummarizationRequest, SummarizationResult, SummaryModel};

use crate::page::{self, Panel};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SummarizeInput {
    #[serde(default)]
    pub text: String,
}

const EMPTY_INPUT: &str = "Please enter some text to summarize first!";

pub async fn index(State(state): State<Arc<AppState>>) -> Response {
    match state.as_ref() {
        AppState::Misconfigured(e) => config_error_page(e),
        AppState::Ready(_) => page::render("", &Panel::Empty).into_response(),
    }
}

pub async fn summarize_form(
    State(state): State<Arc<AppState>>,
    Form(input): Form<SummarizeInput>,
) -> Response {
    let model = match state.as_ref() {
        AppState::Misconfigured(e) => return config_error_page(e),
        AppState::Ready(model) => model,
    };

    let Ok(request) = SummarizationRequest::new(input.text.as_str()) else {
        let panel = Panel::Warning(EMPTY_INPUT.to_string());
        return (StatusCode::BAD_REQUEST, page::render(&input.text, &panel)).into_response();
    };

    info!("🤖 Summarizing {} characters for the page", request.text().chars().count());
    match model.summarize(&request).await {
        SummarizationResult::Success { summary_text } => {
            page::render(&input.text, &Panel::Summary { summary: summary_text }).into_response()
        }
        SummarizationResult::Failure { error_message } => {
            warn!("Summarization failed: {}", error_message);
            let markup = page::render(&input.text, &Panel::Failure(error_message));
            (StatusCode::BAD_GATEWAY, markup).into_response()
        }
    }
}

pub async fn summarize_api(
    State(state): State<Arc<AppState>>,
    Json(input): Json<SummarizeInput>,
) -> Response {
    let model = match state.as_ref() {
        AppState::Misconfigured(e) => {
            return (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "error": e.to_string() }))).into_response()
        }
        AppState::Ready(model) => model,
    };

    let request = match SummarizationRequest::new(input.text) {
        Ok(request) => request,
        Err(e) => return (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))).into_response(),
    };

    let result = model.summarize(&request).await;
    let status = if result.is_success() { StatusCode::OK } else { StatusCode::BAD_GATEWAY };
    (status, Json(result)).into_response()
}

pub async fn health() -> &'static str {
    "ok"
}

fn config_error_page(e: &ConfigError) -> Response {
    let markup = page::render("", &Panel::ConfigError(e.to_string()));
    (StatusCode::SERVICE_UNAVAILABLE, markup).into_response()
}
