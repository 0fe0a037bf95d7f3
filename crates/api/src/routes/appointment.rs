use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/available_slots",
            get(handlers::appointment::available_slots),
        )
        .route(
            "/api/book_appointment",
            post(handlers::appointment::book_appointment),
        )
}
