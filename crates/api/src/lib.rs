//! # SlotBook API
//!
//! The API crate provides the web server for the SlotBook appointment service:
//! listing the free slots of a day and booking one of them.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Extract requests and call the booking operations
//! - **Middleware**: Error-to-response mapping
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework. Storage is reached only through the
//! `AppointmentStore` trait, injected via [`ApiState`].

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    BoxError, Router,
    error_handling::HandleErrorLayer,
    http::{HeaderValue, StatusCode},
};
use eyre::Result;
use slotbook_core::{slots::SlotTemplate, store::AppointmentStore};
use slotbook_db::{DbPool, repositories::appointment::SqlAppointmentRepository};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// Holds no mutable data: the store handles its own synchronisation and the
/// template is a plain value.
///
/// # Example
///
/// ```rust,ignore
/// let state = Arc::new(ApiState::new(Arc::new(SqlAppointmentRepository::new(pool))));
/// let app = build_router(state);
/// ```
pub struct ApiState {
    /// Where appointments are read from and written to
    pub store: Arc<dyn AppointmentStore>,
    /// Daily schedule that defines the bookable slots
    pub template: SlotTemplate,
}

impl ApiState {
    /// State with the default daily template.
    pub fn new(store: Arc<dyn AppointmentStore>) -> Self {
        Self {
            store,
            template: SlotTemplate::default(),
        }
    }
}

/// Builds the application router with all routes and request tracing.
///
/// CORS and timeouts are added by [`start_server`] since they depend on the
/// configuration.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Welcome and health check endpoints
        .merge(routes::health::routes())
        // Availability and booking endpoints
        .merge(routes::appointment::routes())
        // Attach shared state to all routes
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Starts the API server with the provided configuration and database connection
///
/// This function initializes logging, wires the SQLite repository into the
/// shared state, applies CORS and timeout layers and serves until the
/// listener fails.
///
/// # Example
///
/// ```rust,ignore
/// let config = ApiConfig::from_env()?;
/// let db_pool = slotbook_db::create_pool(&config.database_url).await?;
/// start_server(config, db_pool).await?;
/// ```
pub async fn start_server(config: config::ApiConfig, db_pool: DbPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let store = Arc::new(SqlAppointmentRepository::new(db_pool));
    let state = Arc::new(ApiState::new(store));

    let app = build_router(state).layer(cors_layer(config.cors_origins.as_deref()));

    // Add request timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(HandleErrorLayer::new(|_: BoxError| async {
                StatusCode::REQUEST_TIMEOUT
            }))
            .timeout(Duration::from_secs(config.request_timeout)),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Any origin when none are configured, otherwise exactly the listed ones.
fn cors_layer(origins: Option<&[String]>) -> CorsLayer {
    let Some(origins) = origins else {
        return CorsLayer::permissive();
    };

    let allowed = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_origin(allowed)
        .allow_credentials(true)
}
