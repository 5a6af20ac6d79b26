pub mod courses;
pub mod doc;
pub mod extract;
pub mod students;

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::error::AppError;
use crate::state::AppState;

use self::doc::ApiDoc;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(openapi))
        .route("/api/courses", get(courses::find_all).post(courses::create))
        .route(
            "/api/courses/{id}",
            get(courses::find_by_id)
                .put(courses::update_by_id)
                .delete(courses::delete_by_id),
        )
        .route("/api/students", get(students::find_all).post(students::create))
        .route(
            "/api/students/{id}",
            get(students::find_by_id)
                .put(students::update_by_id)
                .delete(students::delete_by_id),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Database reachable"),
        (status = 500, description = "Database unavailable", body = crate::error::ErrorResponse)
    )
)]
async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    sqlx::query("select 1").execute(&state.db).await?;
    Ok(StatusCode::OK)
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
