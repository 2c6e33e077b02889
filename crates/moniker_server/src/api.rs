//! HTTP API: generation ingress, result retrieval, and health check.

use crate::{Event, EventBus, UsernameStore};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use moniker_core::{DEFAULT_COUNT, GenerationRequest, USERNAME_REQUESTED};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, instrument};
use uuid::Uuid;

/// API server state.
#[derive(Clone)]
pub struct ApiState {
    /// Event bus the ingress publishes to.
    pub bus: EventBus,
    /// Store the retrieval endpoint reads from.
    pub store: UsernameStore,
}

impl ApiState {
    /// Creates a new API state.
    pub fn new(bus: EventBus, store: UsernameStore) -> Self {
        Self { bus, store }
    }
}

/// Body of a generation request.
///
/// Unlike the event payload, `theme` is required here and `count` is
/// bounds-checked; the ingress is the one place input is validated.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateUsernameBody {
    theme: String,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default = "default_count")]
    count: usize,
}

fn default_count() -> usize {
    DEFAULT_COUNT
}

/// Creates the API router.
pub fn create_router(bus: EventBus, store: UsernameStore) -> Router {
    let state = ApiState::new(bus, store);

    Router::new()
        .route("/api/generate-username", post(generate_username))
        .route("/api/usernames/:request_id", get(get_usernames))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Accepts a generation request and publishes it to the bus.
///
/// Replies `202 Accepted` with the assigned request id; generation
/// happens asynchronously and the result is fetched by id later.
#[instrument(skip(state, body))]
async fn generate_username(
    State(state): State<ApiState>,
    Json(body): Json<GenerateUsernameBody>,
) -> impl IntoResponse {
    if !(1..=10).contains(&body.count) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "count must be between 1 and 10" })),
        );
    }

    let request_id = Uuid::new_v4().to_string();
    info!(
        request_id = %request_id,
        theme = %body.theme,
        count = body.count,
        "Username generation requested"
    );

    let request = GenerationRequest::new(
        body.theme.clone(),
        body.keywords.clone(),
        body.count,
        request_id.clone(),
    );
    let event = match Event::new(USERNAME_REQUESTED, &request) {
        Ok(event) => event,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "Failed to encode request event");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "failed to encode request" })),
            );
        }
    };
    state.bus.emit(event).await;

    (
        StatusCode::ACCEPTED,
        Json(json!({
            "message": "Username generation started",
            "requestId": request_id,
            "theme": body.theme,
            "keywords": body.keywords,
            "count": body.count,
        })),
    )
}

/// Serves the stored record for a request id.
#[instrument(skip(state))]
async fn get_usernames(
    State(state): State<ApiState>,
    Path(request_id): Path<String>,
) -> impl IntoResponse {
    match state.store.get(&request_id).await {
        Some(record) => (
            StatusCode::OK,
            Json(json!({
                "requestId": request_id,
                "theme": record.theme(),
                "usernames": record.usernames(),
                "generatedAt": record.generated_at(),
            })),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "no usernames recorded for request" })),
        ),
    }
}
