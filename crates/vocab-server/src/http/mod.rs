//! HTTP surface: the daily sentence trigger and a health check.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use vocab_core::responses::DailyBatchResponse;
use vocab_daily::DailySentenceGenerator;

mod error;

pub use error::AppError;

#[derive(Clone)]
pub struct AppState {
    pub daily: Arc<DailySentenceGenerator>,
}

impl AppState {
    pub const fn new(daily: Arc<DailySentenceGenerator>) -> Self {
        Self { daily }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/daily-sentences/", get(daily_sentences))
        .route("/daily-sentences", get(daily_sentences))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Run one generation batch and return it.
async fn daily_sentences(
    State(state): State<AppState>,
) -> Result<Json<DailyBatchResponse>, AppError> {
    let response = state.daily.generate_daily_batch().await?;
    Ok(Json(response))
}

async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}
