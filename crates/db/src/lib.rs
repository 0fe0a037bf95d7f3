pub mod models;
pub mod repositories;
pub mod schema;

pub mod mock;

use std::{str::FromStr, time::Duration};

use eyre::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

pub type DbPool = Pool<Sqlite>;

/// Opens a pool on `database_url`, creating the database file if needed.
///
/// Writers on other connections wait up to the busy timeout for the file
/// lock instead of failing with `SQLITE_BUSY`.
pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
