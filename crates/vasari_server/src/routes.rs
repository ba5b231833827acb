//! HTTP routes for the creator hub.
//!
//! Every tool endpoint follows the same shape: deserialize the form fields,
//! hand them to the toolkit, and return rendered HTML or an error banner
//! message. Generation failures map to 502 since the upstream API, not this
//! service, declined the request.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tracing::{error, instrument};
use vasari_core::{ContentDriver, GenerateResponse};
use vasari_error::{VasariError, VasariErrorKind, VasariResult};
use vasari_studio::{Platform, Tone};

use crate::markdown::render_markdown;
use crate::state::AppState;

/// Form fields for the script outline tool.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct OutlineRequest {
    /// Core content topic or idea
    pub topic: String,
    /// Target audience for the script
    pub audience: String,
}

/// Form fields for the captions and hashtags tool.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CaptionsRequest {
    /// Core content topic or idea
    pub topic: String,
    /// Social platform the post targets
    pub platform: Platform,
    /// Desired tone of voice
    pub tone: Tone,
}

/// Form fields for the thumbnail ideas tool.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ThumbnailsRequest {
    /// Core content topic or idea
    pub topic: String,
    /// How many concepts to brainstorm
    pub count: u8,
}

/// Form fields for the video titles tool.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct TitlesRequest {
    /// Core content topic or idea
    pub topic: String,
    /// How many titles to generate
    pub count: u8,
}

/// Build the application router with all routes configured.
pub fn create_router<D: ContentDriver + 'static>(state: AppState<D>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/outline", post(generate_outline::<D>))
        .route("/api/captions", post(generate_captions::<D>))
        .route("/api/thumbnails", post(generate_thumbnails::<D>))
        .route("/api/titles", post(generate_titles::<D>))
        .with_state(state)
}

/// Serve the single-page creator hub shell.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../web/index.html"))
}

/// Health check endpoint.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Generate a structured video/blog script outline.
#[instrument(skip(state, req))]
pub async fn generate_outline<D: ContentDriver + 'static>(
    State(state): State<AppState<D>>,
    Json(req): Json<OutlineRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    respond(state.toolkit.draft_outline(&req.topic, &req.audience).await)
}

/// Generate social media captions and hashtags.
#[instrument(skip(state, req))]
pub async fn generate_captions<D: ContentDriver + 'static>(
    State(state): State<AppState<D>>,
    Json(req): Json<CaptionsRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    respond(
        state
            .toolkit
            .draft_captions(&req.topic, req.platform, req.tone)
            .await,
    )
}

/// Brainstorm thumbnail concepts.
#[instrument(skip(state, req))]
pub async fn generate_thumbnails<D: ContentDriver + 'static>(
    State(state): State<AppState<D>>,
    Json(req): Json<ThumbnailsRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    respond(
        state
            .toolkit
            .draft_thumbnail_ideas(&req.topic, req.count)
            .await,
    )
}

/// Generate video title candidates.
#[instrument(skip(state, req))]
pub async fn generate_titles<D: ContentDriver + 'static>(
    State(state): State<AppState<D>>,
    Json(req): Json<TitlesRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    respond(state.toolkit.draft_titles(&req.topic, req.count).await)
}

fn respond(result: VasariResult<GenerateResponse>) -> (StatusCode, Json<serde_json::Value>) {
    match result {
        Ok(response) => (
            StatusCode::OK,
            Json(json!({"html": render_markdown(response.text())})),
        ),
        Err(e) => {
            error!("Generation failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({"error": banner_message(&e)})),
            )
        }
    }
}

/// Error text for the page banner, without source locations.
fn banner_message(error: &VasariError) -> String {
    let detail = match error.kind() {
        VasariErrorKind::Credential(e) => e.kind.to_string(),
        VasariErrorKind::Gemini(e) => e.kind.to_string(),
        VasariErrorKind::Server(e) => e.message.clone(),
    };
    format!("Error calling Gemini: {}", detail)
}
