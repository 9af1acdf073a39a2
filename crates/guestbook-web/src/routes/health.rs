//! Health check endpoint

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

impl HealthResponse {
    pub fn ready() -> Self {
        Self {
            status: "ok",
            database: "ready",
        }
    }

    pub fn not_ready() -> Self {
        Self {
            status: "error",
            database: "not ready",
        }
    }
}

/// GET /health - 200 when the entries table is reachable, 500 otherwise
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    if state.repo().ready() {
        (StatusCode::OK, Json(HealthResponse::ready()))
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(HealthResponse::not_ready()))
    }
}
