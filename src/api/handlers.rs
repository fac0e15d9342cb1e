//! HTTP request handlers

use super::types::{AskRequest, ErrorResponse, ResetRequest, StatusResponse};
use super::AppState;
use crate::history::Role;
use crate::topic::Topic;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};

/// Create the API router
///
/// The three endpoints are POST-only; any other method on them, and any
/// unmatched path, lands on the liveness handler so platform health checks
/// always get a 200.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/thirukkural", post(ask_thirukkural).fallback(liveness))
        .route("/api/bhagavad-gita", post(ask_bhagavad_gita).fallback(liveness))
        .route("/api/reset", post(reset_history).fallback(liveness))
        .fallback(liveness)
        .with_state(state)
}

async fn ask_thirukkural(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> Result<Json<String>, ApiError> {
    answer(&state, Topic::Thirukkural, &req.query).await
}

async fn ask_bhagavad_gita(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> Result<Json<String>, ApiError> {
    answer(&state, Topic::BhagavadGita, &req.query).await
}

/// Shared answer flow: render history, invoke the pipeline, record the
/// exchange. The store is only written after a successful invoke, so a
/// failing call leaves history exactly as it was.
async fn answer(state: &AppState, topic: Topic, query: &str) -> Result<Json<String>, ApiError> {
    let chat_history = state.history.render(topic);

    let result = state
        .pipeline(topic)
        .answer(query, &chat_history)
        .await
        .map_err(|e| ApiError::Downstream(e.to_string()))?;

    state.history.append(topic, Role::User, query);
    state.history.append(topic, Role::Assistant, result.clone());

    Ok(Json(result))
}

async fn reset_history(
    State(state): State<AppState>,
    Json(req): Json<ResetRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    let Some(topic) = Topic::parse(&req.chat_type) else {
        return Err(ApiError::BadRequest("Invalid chat type".to_string()));
    };

    state.history.clear(topic);
    Ok(Json(StatusResponse::new(topic.cleared_message())))
}

/// Liveness probe doubling as the catch-all route
async fn liveness() -> Json<StatusResponse> {
    Json(StatusResponse::new("API is running"))
}

// ============================================================
// Error Handling
// ============================================================

enum ApiError {
    /// Rejected input (unknown chat type)
    BadRequest(String),
    /// Model client failure, surfaced with its message intact
    Downstream(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Downstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
