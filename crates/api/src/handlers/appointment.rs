//! # Appointment Handlers
//!
//! HTTP entry points for listing free slots and booking one. Both delegate to
//! the operations in `slotbook_core::booking`; the handlers only extract the
//! request, pick the response status and log the outcome.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use slotbook_core::{
    booking,
    errors::BookingError,
    models::{
        appointment::{BookAppointmentRequest, BookAppointmentResponse},
        availability::{AvailableSlotsQuery, AvailableSlotsResponse},
    },
};
use std::sync::Arc;
use tracing::{info, warn};

use crate::{ApiState, middleware::error_handling::AppError};

/// Lists the slots still free on a date
///
/// # Endpoint
///
/// ```text
/// GET /api/available_slots?date=2024-05-01
/// ```
///
/// # Errors
///
/// * `BookingError::InvalidDateFormat` - 400, the date is not `YYYY-MM-DD`
/// * `BookingError::Database` - 500
#[axum::debug_handler]
pub async fn available_slots(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<AvailableSlotsQuery>,
) -> Result<Json<AvailableSlotsResponse>, AppError> {
    let response =
        booking::available_slots(state.store.as_ref(), &state.template, &query.date).await?;

    Ok(Json(response))
}

/// Books a slot on a date
///
/// # Endpoint
///
/// ```text
/// POST /api/book_appointment
/// {"name": "...", "phone_number": "...", "date": "2024-05-01", "time_slot": "10:00 AM"}
/// ```
///
/// Responds `201 Created` on success.
///
/// # Errors
///
/// * `BookingError::InvalidDateFormat` - 400
/// * `BookingError::InvalidSlot` - 400, the slot is not in the daily template
/// * `BookingError::MissingField` - 400, blank name or phone number
/// * `BookingError::SlotAlreadyBooked` - 400
/// * `BookingError::Database` - 500
#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<BookAppointmentResponse>), AppError> {
    let date = payload.date.clone();
    let time_slot = payload.time_slot.clone();

    match booking::book(state.store.as_ref(), &state.template, payload).await {
        Ok(appointment) => {
            info!(
                "Appointment booked: id={}, date={}, time_slot={}",
                appointment.id, appointment.date, appointment.time_slot
            );
            Ok((
                StatusCode::CREATED,
                Json(BookAppointmentResponse::from(&appointment)),
            ))
        }
        Err(err @ BookingError::SlotAlreadyBooked) => {
            warn!("Rejected booking for taken slot: date={}, time_slot={}", date, time_slot);
            Err(AppError(err))
        }
        Err(err) => Err(AppError(err)),
    }
}
