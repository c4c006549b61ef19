//! HTTP surface of the tokenize server
//!
//! ```text
//! POST /tokenize  {"text": "..."} -> {"ids": [...], "attention_mask": [...]}
//! GET  /health
//! ```
//!
//! The encoder is built once in `main` and injected through `AppState`.

mod api;
mod handlers;
mod state;

pub use api::*;
pub use state::AppState;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use log::info;
use tokio::net::TcpListener;

/// Worst case JSON escaping turns one byte of text into six (`\u00XX`)
const JSON_ESCAPE_FACTOR: usize = 6;

/// Room for the braces, the `text` key and whitespace around them
const JSON_ENVELOPE_BYTES: usize = 1024;

/// Request body limit matching the text limit: none when the text is unbounded
fn body_limit(max_input_bytes: Option<usize>) -> DefaultBodyLimit {
    match max_input_bytes {
        Some(max) => DefaultBodyLimit::max(
            max.saturating_mul(JSON_ESCAPE_FACTOR)
                .saturating_add(JSON_ENVELOPE_BYTES),
        ),
        None => DefaultBodyLimit::disable(),
    }
}

pub fn build_router(state: AppState) -> Router {
    let limit = body_limit(state.max_input_bytes);
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/tokenize", post(handlers::tokenize))
        .layer(limit)
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C
pub async fn serve(addr: &str, state: AppState) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
