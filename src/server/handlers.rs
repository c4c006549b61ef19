//! HTTP request handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use log::debug;

use crate::server::{
    ApiError, HealthResponse, TokenizeRequest, TokenizeResponse, state::AppState,
};

/// Liveness probe, never touches the encoder
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    let health = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    (StatusCode::OK, Json(health))
}

/// Tokenize one text
///
/// Body rejections are turned into `ApiError::InvalidRequest` before the
/// encoder is reached. Encoding runs on the blocking pool.
pub async fn tokenize(
    State(state): State<AppState>,
    payload: Result<Json<TokenizeRequest>, JsonRejection>,
) -> Result<Json<TokenizeResponse>, ApiError> {
    let Json(request) =
        payload.map_err(|rejection| ApiError::InvalidRequest(rejection.body_text()))?;

    if let Some(max) = state.max_input_bytes {
        let len = request.text.len();
        if len > max {
            return Err(ApiError::InputTooLarge { len, max });
        }
    }

    let encoder = Arc::clone(&state.encoder);
    let encoding = tokio::task::spawn_blocking(move || encoder.encode(&request.text))
        .await
        .map_err(|e| ApiError::Internal(format!("encoding task failed: {}", e)))?
        .map_err(|e| ApiError::Tokenization(e.to_string()))?;

    debug!("Tokenized request into {} tokens", encoding.ids.len());
    Ok(Json(encoding.into()))
}
