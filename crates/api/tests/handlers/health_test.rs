use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::test_utils::TestContext;

#[tokio::test]
async fn test_welcome() {
    let ctx = TestContext::new().await;

    let response = ctx.server.get("/").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "message": "Welcome to the Appointment Booking API!" }));
}

#[tokio::test]
async fn test_health_check() {
    let ctx = TestContext::new().await;

    let response = ctx.server.get("/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_version() {
    let ctx = TestContext::new().await;

    let body: Value = ctx.server.get("/version").await.json();

    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
