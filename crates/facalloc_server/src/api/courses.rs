//! Course endpoints.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use facalloc_core::{Course, CourseService, NewCourse, SqliteCourseRepository};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/courses", get(list_courses).post(create_course))
        .route("/api/courses/{id}", get(get_course))
}

async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, ApiError> {
    let courses = state
        .with_conn(|conn| {
            let service = CourseService::new(SqliteCourseRepository::new(conn));
            Ok(service.list_courses()?)
        })
        .await?;
    Ok(Json(courses))
}

async fn create_course(
    State(state): State<AppState>,
    payload: Result<Json<NewCourse>, JsonRejection>,
) -> Result<(StatusCode, Json<Course>), ApiError> {
    let Json(input) = payload?;
    let course = state
        .with_conn(move |conn| {
            let service = CourseService::new(SqliteCourseRepository::new(conn));
            Ok(service.create_course(&input)?)
        })
        .await?;
    Ok((StatusCode::CREATED, Json(course)))
}

async fn get_course(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Course>, ApiError> {
    let Path(id) = id?;
    state
        .with_conn(move |conn| {
            let service = CourseService::new(SqliteCourseRepository::new(conn));
            Ok(service.get_course(id)?)
        })
        .await
        .map(Json)
}
