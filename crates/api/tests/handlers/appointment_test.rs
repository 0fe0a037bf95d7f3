use std::{future::IntoFuture, sync::Arc};

use axum::http::StatusCode;
use chrono::{NaiveDate, Utc};
use mockall::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use slotbook_core::models::{
    appointment::{Appointment, BookAppointmentResponse},
    availability::AvailableSlotsResponse,
};
use slotbook_db::mock::repositories::MockAppointmentRepo;

use crate::test_utils::{TestContext, booking, default_slots};

#[tokio::test]
async fn test_available_slots_for_empty_day() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .get("/api/available_slots")
        .add_query_param("date", "2024-05-01")
        .await;

    response.assert_status_ok();
    let body: AvailableSlotsResponse = response.json();
    assert_eq!(body.date, "2024-05-01");
    assert_eq!(body.available_slots, default_slots());
    assert_eq!(body.available_slots.len(), 12);
}

#[tokio::test]
async fn test_book_then_slot_disappears() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/api/book_appointment")
        .json(&booking("2024-05-01", "10:30 AM"))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: BookAppointmentResponse = response.json();
    assert_eq!(body.message, "Appointment booked successfully.");

    let body: AvailableSlotsResponse = ctx
        .server
        .get("/api/available_slots")
        .add_query_param("date", "2024-05-01")
        .await
        .json();
    let expected: Vec<String> = default_slots()
        .into_iter()
        .filter(|slot| slot != "10:30 AM")
        .collect();
    assert_eq!(body.available_slots, expected);

    // Other days keep the full template
    let body: AvailableSlotsResponse = ctx
        .server
        .get("/api/available_slots")
        .add_query_param("date", "2024-05-02")
        .await
        .json();
    assert_eq!(body.available_slots, default_slots());
}

#[tokio::test]
async fn test_second_booking_is_rejected() {
    let ctx = TestContext::new().await;
    let request = booking("2024-05-01", "03:30 PM");

    ctx.server
        .post("/api/book_appointment")
        .json(&request)
        .await
        .assert_status(StatusCode::CREATED);

    let response = ctx.server.post("/api/book_appointment").json(&request).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "detail": "Time slot already booked." }));
}

#[rstest]
#[case("2024-13-40")]
#[case("not-a-date")]
#[case(" 2024-05-01")]
#[case("+2024-05-01")]
#[case("2024-05-01 ")]
#[tokio::test]
async fn test_invalid_date_on_both_endpoints(#[case] date: &str) {
    let ctx = TestContext::new().await;
    let expected = json!({ "detail": "Invalid date format. Use YYYY-MM-DD." });

    let response = ctx
        .server
        .get("/api/available_slots")
        .add_query_param("date", date)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&expected);

    let response = ctx
        .server
        .post("/api/book_appointment")
        .json(&booking(date, "10:00 AM"))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&expected);
}

#[rstest]
#[case("2024-05-01")]
#[case("2030-12-24")]
#[tokio::test]
async fn test_slot_outside_template(#[case] date: &str) {
    let ctx = TestContext::new().await;

    for slot in ["9:00 AM", "01:00 PM", "05:00 PM"] {
        let response = ctx
            .server
            .post("/api/book_appointment")
            .json(&booking(date, slot))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "detail": "Invalid time slot." }));
    }
}

#[tokio::test]
async fn test_blank_name_is_rejected() {
    let ctx = TestContext::new().await;
    let mut request = booking("2024-05-01", "10:00 AM");
    request["name"] = Value::String("  ".to_string());

    let response = ctx.server.post("/api/book_appointment").json(&request).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "detail": "Field 'name' must not be empty." }));
}

#[tokio::test]
async fn test_bad_date_reported_before_blank_name() {
    let ctx = TestContext::new().await;
    let mut request = booking("not-a-date", "10:00 AM");
    request["name"] = Value::String(String::new());

    let response = ctx.server.post("/api/book_appointment").json(&request).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "detail": "Invalid date format. Use YYYY-MM-DD." }));
}

#[tokio::test]
async fn test_missing_field_is_rejected_by_extractor() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/api/book_appointment")
        .json(&json!({ "name": "Grace Hopper", "date": "2024-05-01", "time_slot": "10:00 AM" }))
        .await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_concurrent_bookings_for_same_slot() {
    let ctx = TestContext::new().await;
    let request = booking("2024-06-10", "12:00 PM");

    let (first, second) = tokio::join!(
        ctx.server
            .post("/api/book_appointment")
            .json(&request)
            .into_future(),
        ctx.server
            .post("/api/book_appointment")
            .json(&request)
            .into_future(),
    );

    let mut statuses = vec![first.status_code(), second.status_code()];
    statuses.sort();
    assert_eq!(statuses, vec![StatusCode::CREATED, StatusCode::BAD_REQUEST]);

    let rejected = if first.status_code() == StatusCode::BAD_REQUEST {
        first
    } else {
        second
    };
    rejected.assert_json(&json!({ "detail": "Time slot already booked." }));
}

#[tokio::test]
async fn test_storage_failure_is_internal_error() {
    let mut store = MockAppointmentRepo::new();
    store
        .expect_booked_slots()
        .returning(|_| Err(eyre::eyre!("disk I/O error")));
    let ctx = TestContext::with_store(Arc::new(store));

    let response = ctx
        .server
        .get("/api/available_slots")
        .add_query_param("date", "2024-05-01")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "detail": "Internal server error." }));
}

#[tokio::test]
async fn test_booking_uses_store_with_parsed_date() {
    let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let mut store = MockAppointmentRepo::new();
    store
        .expect_insert_if_vacant()
        .withf(move |appointment| appointment.date == date && appointment.time_slot == "04:00 PM")
        .times(1)
        .returning(|appointment| {
            Ok(Some(Appointment {
                id: 42,
                name: appointment.name,
                phone_number: appointment.phone_number,
                date: appointment.date,
                time_slot: appointment.time_slot,
                created_at: Utc::now(),
            }))
        });
    store.expect_booked_slots().never();
    let ctx = TestContext::with_store(Arc::new(store));

    let response = ctx
        .server
        .post("/api/book_appointment")
        .json(&booking("2024-05-01", "04:00 PM"))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({
        "message": "Appointment booked successfully.",
        "id": 42,
    }));
}

#[tokio::test]
async fn test_booked_slots_from_store_are_subtracted() {
    let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let mut store = MockAppointmentRepo::new();
    store
        .expect_booked_slots()
        .with(predicate::eq(date))
        .returning(|_| Ok(vec!["10:00 AM".to_string(), "04:30 PM".to_string()]));
    let ctx = TestContext::with_store(Arc::new(store));

    let body: AvailableSlotsResponse = ctx
        .server
        .get("/api/available_slots")
        .add_query_param("date", "2024-05-01")
        .await
        .json();

    assert_eq!(body.available_slots.first().map(String::as_str), Some("10:30 AM"));
    assert_eq!(body.available_slots.last().map(String::as_str), Some("04:00 PM"));
    assert_eq!(body.available_slots.len(), 10);
}
