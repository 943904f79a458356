//! Health check endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

use crate::api::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(ready))
}

/// Liveness probe; does not touch storage.
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}

/// Readiness probe; returns 503 when the database cannot answer a query.
async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let probe = state
        .with_conn(|conn| {
            conn.query_row("SELECT 1;", [], |row| row.get::<_, i64>(0))
                .map_err(|err| ApiError::internal(err.to_string()))
        })
        .await;

    match probe {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({ "status": "healthy", "database": "ok" })),
        ),
        Err(err) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "unavailable", "database": err.message() })),
        ),
    }
}
