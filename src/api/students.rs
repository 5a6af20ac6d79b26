use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::{info, warn};

use crate::api::extract::JsonBody;
use crate::db::{courses, students};
use crate::error::{AppError, ErrorResponse};
use crate::models::{NewStudent, StudentRequest, StudentResponse};
use crate::state::AppState;

const NOT_FOUND: &str = "Student not found";
const COURSE_NOT_FOUND: &str = "Course id not found";
const COURSE_ACTIVE: &str = "Student cannot be deleted while enrolled in an active course";

async fn ensure_course_exists(state: &AppState, course_id: i64) -> Result<(), AppError> {
    if courses::exists_by_id(&state.db, course_id).await? {
        Ok(())
    } else {
        Err(AppError::NotFound(COURSE_NOT_FOUND.to_string()))
    }
}

#[utoipa::path(
    post,
    path = "/api/students",
    tag = "students",
    request_body = StudentRequest,
    responses(
        (status = 201, description = "Student created", body = StudentResponse),
        (status = 404, description = "Referenced course not found", body = ErrorResponse),
        (status = 422, description = "Invalid payload", body = ErrorResponse)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<StudentRequest>,
) -> Result<(StatusCode, Json<StudentResponse>), AppError> {
    req.validate()?;
    ensure_course_exists(&state, req.course_id).await?;

    let student = students::save(&state.db, None, &NewStudent::from(req)).await?;
    info!("created student {} in course {}", student.id, student.course_id);
    Ok((StatusCode::CREATED, Json(student.into())))
}

#[utoipa::path(
    get,
    path = "/api/students",
    tag = "students",
    responses((status = 200, description = "All students", body = Vec<StudentResponse>))
)]
pub async fn find_all(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentResponse>>, AppError> {
    let students = students::find_all(&state.db).await?;
    Ok(Json(students.into_iter().map(StudentResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = "students",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "The student, as a one-element list", body = Vec<StudentResponse>),
        (status = 404, description = "Student not found", body = ErrorResponse)
    )
)]
pub async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<StudentResponse>>, AppError> {
    let student = students::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    Ok(Json(vec![student.into()]))
}

#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = "students",
    params(("id" = i64, Path, description = "Student id")),
    request_body = StudentRequest,
    responses(
        (status = 200, description = "The updated student, as a one-element list", body = Vec<StudentResponse>),
        (status = 404, description = "Student or referenced course not found", body = ErrorResponse),
        (status = 422, description = "Invalid payload", body = ErrorResponse)
    )
)]
pub async fn update_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(req): JsonBody<StudentRequest>,
) -> Result<Json<Vec<StudentResponse>>, AppError> {
    if !students::exists_by_id(&state.db, id).await? {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }
    req.validate()?;
    ensure_course_exists(&state, req.course_id).await?;

    let student = students::save(&state.db, Some(id), &NewStudent::from(req)).await?;
    Ok(Json(vec![student.into()]))
}

/// Deletes a student unless the course it belongs to is active.
///
/// A student whose course row is gone counts as enrolled in an inactive
/// course and is deleted.
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = "students",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 409, description = "Student belongs to an active course", body = ErrorResponse)
    )
)]
pub async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let student = students::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

    match courses::find_by_id(&state.db, student.course_id).await? {
        Some(course) if course.active => {
            info!("refusing to delete student {}: course {} is active", id, course.id);
            return Err(AppError::Conflict(COURSE_ACTIVE.to_string()));
        }
        Some(_) => {}
        None => warn!(
            "student {} references missing course {}, deleting anyway",
            id, student.course_id
        ),
    }

    students::delete_by_id(&state.db, id).await?;
    info!("deleted student {}", id);
    Ok(StatusCode::NO_CONTENT)
}
