//! Faculty endpoints.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use facalloc_core::{Faculty, FacultyService, NewFaculty, SqliteFacultyRepository};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/faculty", get(list_faculty).post(create_faculty))
        .route("/api/faculty/{id}", get(get_faculty))
}

async fn list_faculty(State(state): State<AppState>) -> Result<Json<Vec<Faculty>>, ApiError> {
    let faculty = state
        .with_conn(|conn| {
            let service = FacultyService::new(SqliteFacultyRepository::new(conn));
            Ok(service.list_faculty()?)
        })
        .await?;
    Ok(Json(faculty))
}

async fn create_faculty(
    State(state): State<AppState>,
    payload: Result<Json<NewFaculty>, JsonRejection>,
) -> Result<(StatusCode, Json<Faculty>), ApiError> {
    let Json(input) = payload?;
    let faculty = state
        .with_conn(move |conn| {
            let service = FacultyService::new(SqliteFacultyRepository::new(conn));
            Ok(service.create_faculty(&input)?)
        })
        .await?;
    Ok((StatusCode::CREATED, Json(faculty)))
}

async fn get_faculty(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Faculty>, ApiError> {
    let Path(id) = id?;
    state
        .with_conn(move |conn| {
            let service = FacultyService::new(SqliteFacultyRepository::new(conn));
            Ok(service.get_faculty(id)?)
        })
        .await
        .map(Json)
}
