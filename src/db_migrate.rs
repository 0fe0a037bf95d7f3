use color_eyre::eyre::Result;
use dotenv::dotenv;
use slotbook_api::config::ApiConfig;
use slotbook_db::schema::initialize_database;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let config = ApiConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("Connecting to database at {}", config.database_url);
    let db_pool = slotbook_db::create_pool(&config.database_url).await?;

    initialize_database(&db_pool).await?;
    info!("Database is ready.");

    Ok(())
}
