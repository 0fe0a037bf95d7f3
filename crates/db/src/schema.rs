use eyre::Result;
use sqlx::{Pool, Sqlite};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Sqlite>) -> Result<()> {
    info!("Initializing database schema...");

    // Create appointments table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS appointments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            phone_number TEXT NOT NULL,
            date TEXT NOT NULL,
            time_slot TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Tables created by earlier deployments have no created_at column
    let column_exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (
            SELECT 1
            FROM pragma_table_info('appointments')
            WHERE name = 'created_at'
        );
        "#,
    )
    .fetch_one(pool)
    .await?;

    if !column_exists {
        info!("Adding created_at column to legacy appointments table");
        sqlx::query(
            r#"
            ALTER TABLE appointments
                ADD COLUMN created_at TEXT NOT NULL DEFAULT '1970-01-01T00:00:00Z';
            "#,
        )
        .execute(pool)
        .await?;
    }

    // One appointment per slot and day. Kept as an index so that databases
    // created without the constraint pick it up too.
    sqlx::query(
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS idx_appointments_date_time_slot
            ON appointments(date, time_slot);
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_appointments_date ON appointments(date);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
