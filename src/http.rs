use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::screener::{MessageScreener, ScreenError};
use crate::types::{ModerationRequest, ModerationVerdict};

#[derive(Clone)]
pub struct AppState {
    pub screener: Arc<MessageScreener>,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/moderate", post(moderate))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn moderate(
    State(state): State<AppState>,
    Json(request): Json<ModerationRequest>,
) -> Result<Json<ModerationVerdict>, ScreenError> {
    let verdict = state.screener.screen(request).await?;
    Ok(Json(verdict))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl IntoResponse for ScreenError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ScreenError::MissingApiKey => (StatusCode::BAD_REQUEST, "No API key provided."),
            // Full detail goes to the log; the caller only sees a generic
            // message.
            ScreenError::Classification(source) => {
                tracing::error!(?source, "moderation request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error processing the moderation request.",
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
