//! Route-level tests driving the creator hub endpoints through the router.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;
use vasari_core::{ContentDriver, GenerateRequest, GenerateResponse};
use vasari_error::{GeminiError, GeminiErrorKind, VasariResult};
use vasari_server::{AppState, CreatorServer, ServerConfig, create_router};
use vasari_studio::CreatorToolkit;

/// Driver that answers every request with a fixed reply and records requests.
#[derive(Debug, Clone)]
struct RecordingDriver {
    reply: &'static str,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl RecordingDriver {
    fn new(reply: &'static str) -> Self {
        Self {
            reply,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait::async_trait]
impl ContentDriver for RecordingDriver {
    async fn generate(&self, req: &GenerateRequest) -> VasariResult<GenerateResponse> {
        self.requests
            .lock()
            .expect("request log poisoned")
            .push(req.clone());
        Ok(GenerateResponse::new(self.reply))
    }

    fn provider_name(&self) -> &'static str {
        "recording"
    }

    fn model_name(&self) -> &str {
        "test-model"
    }
}

/// Driver that fails every request the way an overloaded API would.
#[derive(Debug, Clone)]
struct FailingDriver;

#[async_trait::async_trait]
impl ContentDriver for FailingDriver {
    async fn generate(&self, _req: &GenerateRequest) -> VasariResult<GenerateResponse> {
        Err(GeminiError::new(GeminiErrorKind::Api {
            status_code: 503,
            message: "Service temporarily unavailable".to_string(),
        })
        .into())
    }

    fn provider_name(&self) -> &'static str {
        "failing"
    }

    fn model_name(&self) -> &str {
        "test-model"
    }
}

fn test_router<D: ContentDriver + 'static>(driver: D) -> Router {
    create_router(AppState::new(CreatorToolkit::new(driver)))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Response body was not JSON")
}

#[tokio::test]
async fn index_serves_the_hub_shell() {
    let app = test_router(RecordingDriver::new("unused"));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("Gemini Creator Hub"));
    assert!(page.contains("Generate Script Outline"));
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_router(RecordingDriver::new("unused"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"status": "ok"}));
}

#[tokio::test]
async fn outline_returns_rendered_markdown() {
    let driver = RecordingDriver::new("1. **Hook:** open with a question");
    let requests = Arc::clone(&driver.requests);
    let app = test_router(driver);

    let response = app
        .oneshot(post_json(
            "/api/outline",
            json!({"topic": "home composting", "audience": "beginners"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let html = body["html"].as_str().expect("html field missing");
    assert!(html.contains("<strong>Hook:</strong>"));

    let recorded = requests.lock().unwrap();
    assert_eq!(recorded.len(), 1);
    assert!(recorded[0].prompt().contains("home composting"));
    assert!(recorded[0].prompt().contains("beginners"));
    assert_eq!(recorded[0].model(), "gemini-2.5-flash");
    assert_eq!(*recorded[0].temperature(), 0.7);
}

#[tokio::test]
async fn captions_accepts_branded_platform_names() {
    let driver = RecordingDriver::new("Caption: fresh shots daily");
    let requests = Arc::clone(&driver.requests);
    let app = test_router(driver);

    let response = app
        .oneshot(post_json(
            "/api/captions",
            json!({"topic": "espresso at home", "platform": "TikTok", "tone": "humorous"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let recorded = requests.lock().unwrap();
    assert!(recorded[0].prompt().contains("TikTok post"));
    assert!(recorded[0].prompt().contains("humorous"));
    assert_eq!(*recorded[0].temperature(), 0.8);
}

#[tokio::test]
async fn thumbnail_count_flows_into_the_prompt() {
    let driver = RecordingDriver::new("- concept one");
    let requests = Arc::clone(&driver.requests);
    let app = test_router(driver);

    let response = app
        .oneshot(post_json(
            "/api/thumbnails",
            json!({"topic": "urban gardening", "count": 2}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let recorded = requests.lock().unwrap();
    assert!(recorded[0].prompt().contains("Brainstorm 2 distinct"));
    assert_eq!(*recorded[0].temperature(), 0.9);
}

#[tokio::test]
async fn title_count_flows_into_the_prompt() {
    let driver = RecordingDriver::new("1. First title");
    let requests = Arc::clone(&driver.requests);
    let app = test_router(driver);

    let response = app
        .oneshot(post_json(
            "/api/titles",
            json!({"topic": "urban gardening", "count": 7}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let recorded = requests.lock().unwrap();
    assert!(recorded[0].prompt().contains("Generate 7 catchy"));
    assert_eq!(*recorded[0].temperature(), 0.9);
}

#[tokio::test]
async fn generation_failure_maps_to_bad_gateway() {
    let app = test_router(FailingDriver);

    let response = app
        .oneshot(post_json(
            "/api/outline",
            json!({"topic": "anything", "audience": "anyone"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = json_body(response).await;
    assert_eq!(
        body["error"],
        "Error calling Gemini: HTTP 503 error: Service temporarily unavailable"
    );
}

#[tokio::test]
async fn missing_fields_are_rejected() {
    let app = test_router(RecordingDriver::new("unused"));

    let response = app
        .oneshot(post_json("/api/outline", json!({"topic": "no audience"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unknown_platform_is_rejected() {
    let app = test_router(RecordingDriver::new("unused"));

    let response = app
        .oneshot(post_json(
            "/api/captions",
            json!({"topic": "espresso", "platform": "MySpace", "tone": "friendly"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn server_keeps_its_listener_settings() {
    let config = ServerConfig::default();
    let server = CreatorServer::new(config.clone(), CreatorToolkit::new(FailingDriver));
    assert_eq!(*server.config(), config);
}
