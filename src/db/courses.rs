//! Data access for the `courses` table.
//!
//! Queries are checked at runtime (`query_as::<_, T>`) so the crate builds
//! without a live database or an offline query cache.

use sqlx::SqlitePool;

use crate::models::{Course, NewCourse};

/// Inserts `course` when `id` is `None`, otherwise overwrites every column of
/// the row with that id. Returns the stored row.
pub async fn save(
    db: &SqlitePool,
    id: Option<i64>,
    course: &NewCourse,
) -> Result<Course, sqlx::Error> {
    sqlx::query_as::<_, Course>(
        r#"
        INSERT INTO courses
            (id, title, description, workload_hours, exercise_count, active)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        ON CONFLICT(id) DO UPDATE SET
            title = excluded.title,
            description = excluded.description,
            workload_hours = excluded.workload_hours,
            exercise_count = excluded.exercise_count,
            active = excluded.active
        RETURNING id, title, description, workload_hours, exercise_count, active
        "#,
    )
    .bind(id)
    .bind(&course.title)
    .bind(&course.description)
    .bind(course.workload_hours)
    .bind(course.exercise_count)
    .bind(course.active)
    .fetch_one(db)
    .await
}

pub async fn find_all(db: &SqlitePool) -> Result<Vec<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>(
        "SELECT id, title, description, workload_hours, exercise_count, active FROM courses ORDER BY id",
    )
    .fetch_all(db)
    .await
}

pub async fn find_by_id(db: &SqlitePool, id: i64) -> Result<Option<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>(
        "SELECT id, title, description, workload_hours, exercise_count, active FROM courses WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn exists_by_id(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM courses WHERE id = ?)")
        .bind(id)
        .fetch_one(db)
        .await
}

/// Returns whether a row was removed.
pub async fn delete_by_id(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM courses WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    Ok(result > 0)
}
