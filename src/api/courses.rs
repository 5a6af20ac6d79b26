use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::info;

use crate::api::extract::JsonBody;
use crate::db::courses;
use crate::error::{AppError, ErrorResponse};
use crate::models::{CourseRequest, CourseResponse, NewCourse};
use crate::state::AppState;

const NOT_FOUND: &str = "Course not found";

#[utoipa::path(
    post,
    path = "/api/courses",
    tag = "courses",
    request_body = CourseRequest,
    responses(
        (status = 201, description = "Course created", body = CourseResponse),
        (status = 422, description = "Invalid payload", body = ErrorResponse)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CourseRequest>,
) -> Result<(StatusCode, Json<CourseResponse>), AppError> {
    req.validate()?;
    let course = courses::save(&state.db, None, &NewCourse::from(req)).await?;
    info!("created course {}", course.id);
    Ok((StatusCode::CREATED, Json(course.into())))
}

#[utoipa::path(
    get,
    path = "/api/courses",
    tag = "courses",
    responses((status = 200, description = "All courses", body = Vec<CourseResponse>))
)]
pub async fn find_all(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseResponse>>, AppError> {
    let courses = courses::find_all(&state.db).await?;
    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    tag = "courses",
    params(("id" = i64, Path, description = "Course id")),
    responses(
        (status = 200, description = "The course, as a one-element list", body = Vec<CourseResponse>),
        (status = 404, description = "Course not found", body = ErrorResponse)
    )
)]
pub async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<CourseResponse>>, AppError> {
    let course = courses::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    Ok(Json(vec![course.into()]))
}

#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    tag = "courses",
    params(("id" = i64, Path, description = "Course id")),
    request_body = CourseRequest,
    responses(
        (status = 200, description = "The updated course, as a one-element list", body = Vec<CourseResponse>),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 422, description = "Invalid payload", body = ErrorResponse)
    )
)]
pub async fn update_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(req): JsonBody<CourseRequest>,
) -> Result<Json<Vec<CourseResponse>>, AppError> {
    if !courses::exists_by_id(&state.db, id).await? {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }
    req.validate()?;

    let course = courses::save(&state.db, Some(id), &NewCourse::from(req)).await?;
    Ok(Json(vec![course.into()]))
}

#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    tag = "courses",
    params(("id" = i64, Path, description = "Course id")),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 404, description = "Course not found", body = ErrorResponse)
    )
)]
pub async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !courses::exists_by_id(&state.db, id).await? {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }

    courses::delete_by_id(&state.db, id).await?;
    info!("deleted course {}", id);
    Ok(StatusCode::NO_CONTENT)
}
