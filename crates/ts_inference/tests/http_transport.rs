use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use ts_core::{Config, SummarizationResult};
use ts_inference::models::{HuggingFaceModel, MAX_INPUT_CHARS};
use ts_inference::HttpTransport;

const MODEL: &str = "facebook/bart-large-cnn";
const TOKEN: &str = "hf_integration_token";

#[derive(Clone, Default)]
struct Seen {
    auth: Arc<Mutex<Option<String>>>,
    body: Arc<Mutex<Option<Value>>>,
}

async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn model_for(addr: SocketAddr, timeout: Duration) -> HuggingFaceModel {
    let config = Config::new(&format!("http://{}", addr), MODEL, TOKEN).unwrap();
    let transport = HttpTransport::with_timeout(timeout).unwrap();
    HuggingFaceModel::with_transport(config, Arc::new(transport))
}

fn recording_app(seen: Seen, status: StatusCode, reply: &'static str) -> Router {
    Router::new()
        .route(
            "/models/facebook/bart-large-cnn",
            post(move |State(seen): State<Seen>, headers: HeaderMap, Json(body): Json<Value>| async move {
                *seen.auth.lock().unwrap() = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                *seen.body.lock().unwrap() = Some(body);
                (status, reply)
            }),
        )
        .with_state(seen)
}

#[tokio::test]
async fn test_posts_bearer_token_and_inputs() {
    let seen = Seen::default();
    let addr = spawn(recording_app(seen.clone(), StatusCode::OK, r#"[{"summary_text": "X"}]"#)).await;

    let result = model_for(addr, Duration::from_secs(5)).summarize_text("A short article.").await;

    assert_eq!(result, SummarizationResult::success("X"));
    assert_eq!(seen.auth.lock().unwrap().as_deref(), Some("Bearer hf_integration_token"));
    assert_eq!(*seen.body.lock().unwrap(), Some(json!({"inputs": "A short article."})));
}

#[tokio::test]
async fn test_long_input_reaches_server_truncated() {
    let seen = Seen::default();
    let addr = spawn(recording_app(seen.clone(), StatusCode::OK, r#"[{"summary_text": "X"}]"#)).await;
    let text = "abcdefghij".repeat(800);

    model_for(addr, Duration::from_secs(5)).summarize_text(&text).await;

    let body = seen.body.lock().unwrap().clone().unwrap();
    assert_eq!(body["inputs"].as_str().unwrap(), &text[..MAX_INPUT_CHARS]);
}

#[tokio::test]
async fn test_non_success_status_is_request_failure() {
    let addr = spawn(recording_app(
        Seen::default(),
        StatusCode::SERVICE_UNAVAILABLE,
        r#"{"error": "Model is currently loading"}"#,
    ))
    .await;

    let result = model_for(addr, Duration::from_secs(5)).summarize_text("text").await;

    let message = result.error_message().unwrap();
    assert!(message.starts_with("API request failed. Details: "), "{}", message);
    assert!(message.contains("503"), "{}", message);
    assert!(!message.contains(TOKEN));
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let app = Router::new().route(
        "/models/facebook/bart-large-cnn",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!([{"summary_text": "too late"}]))
        }),
    );
    let addr = spawn(app).await;

    let result = model_for(addr, Duration::from_millis(200)).summarize_text("text").await;

    let message = result.error_message().unwrap();
    assert!(message.contains("API request failed"), "{}", message);
    assert!(message.contains("timed out"), "{}", message);
}

#[tokio::test]
async fn test_refused_connection_is_request_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = model_for(addr, Duration::from_secs(5)).summarize_text("text").await;

    assert!(result.error_message().unwrap().contains("API request failed"));
}

#[tokio::test]
async fn test_html_body_cannot_be_decoded() {
    let addr = spawn(recording_app(Seen::default(), StatusCode::OK, "<html>oops</html>")).await;

    let result = model_for(addr, Duration::from_secs(5)).summarize_text("text").await;

    assert_eq!(
        result.error_message(),
        Some("Could not decode JSON. Raw response: <html>oops</html>")
    );
}

#[tokio::test]
async fn test_error_object_is_unexpected_format() {
    let addr = spawn(recording_app(Seen::default(), StatusCode::OK, r#"{"error": "model loading"}"#)).await;

    let result = model_for(addr, Duration::from_secs(5)).summarize_text("text").await;

    let message = result.error_message().unwrap();
    assert!(message.contains("Unexpected API response format"), "{}", message);
}
