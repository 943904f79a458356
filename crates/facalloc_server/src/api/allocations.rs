//! Allocation endpoints.
//!
//! `POST /api/allocations/run` executes one allocation pass and returns the
//! records it created. Repeated runs allocate the same courses again.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use facalloc_core::{Allocation, AllocationService, SqliteAllocationRepository};
use serde::Serialize;

use crate::api::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AllocationRunResponse {
    /// Always `success`; failures are rendered by `ApiError`.
    pub status: &'static str,
    pub allocations: Vec<Allocation>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/allocations", get(list_allocations))
        .route("/api/allocations/run", post(run_allocation))
}

async fn list_allocations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Allocation>>, ApiError> {
    let allocations = state
        .with_conn(|conn| {
            let service = AllocationService::new(SqliteAllocationRepository::new(conn));
            Ok(service.list_allocations()?)
        })
        .await?;
    Ok(Json(allocations))
}

async fn run_allocation(
    State(state): State<AppState>,
) -> Result<Json<AllocationRunResponse>, ApiError> {
    let allocations = state
        .with_conn(|conn| {
            let mut service = AllocationService::new(SqliteAllocationRepository::new(conn));
            Ok(service.run()?)
        })
        .await?;
    Ok(Json(AllocationRunResponse {
        status: "success",
        allocations,
    }))
}
