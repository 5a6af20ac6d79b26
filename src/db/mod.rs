//! SQLite access: pool setup, schema migrations and per-table operations.

pub mod courses;
pub mod students;

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::migrate::MigrateError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Opens a pool on `database_url`, creating the database file if needed.
///
/// Foreign keys are not enforced by SQLite: the handlers check that a
/// student's course exists, and deleting a course leaves its students alone.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(false);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

pub async fn migrate(db: &SqlitePool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(db).await
}

#[cfg(test)]
pub(crate) async fn setup_test_db() -> SqlitePool {
    // a single connection keeps every query on the same in-memory database
    let pool = connect("sqlite::memory:", 1)
        .await
        .expect("Failed to create test db");

    migrate(&pool).await.expect("Failed to run migrations");

    pool
}
