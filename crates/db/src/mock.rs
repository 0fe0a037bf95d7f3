pub mod repositories;

use sqlx::sqlite::SqlitePoolOptions;

use crate::DbPool;

/// Pool over a private in-memory database with the schema applied.
///
/// An in-memory SQLite database lives as long as its connection, so the pool
/// holds exactly one connection and never recycles it.
pub async fn create_test_pool() -> eyre::Result<DbPool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    crate::schema::initialize_database(&pool).await?;

    Ok(pool)
}
