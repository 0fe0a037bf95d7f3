//! # Availability and Booking
//!
//! The two operations exposed to clients, written against the
//! [`AppointmentStore`] port so they can run over any storage backend.
//!
//! Availability is the template minus whatever is already booked for the
//! day. Booking validates the request in a fixed order (date, slot membership,
//! required fields) and then hands the conflict check to the store as a single
//! conditional insert, so concurrent requests for the same slot cannot both
//! succeed.

use std::collections::HashSet;

use crate::{
    dates::{format_date, parse_date},
    errors::{BookingError, BookingResult},
    models::{
        appointment::{Appointment, BookAppointmentRequest, NewAppointment},
        availability::AvailableSlotsResponse,
    },
    slots::SlotTemplate,
    store::AppointmentStore,
};

/// Lists the slots still free on `date`, in template order.
///
/// # Errors
///
/// * `BookingError::InvalidDateFormat` - `date` is not a valid `YYYY-MM-DD` date
/// * `BookingError::Database` - the store could not be read
pub async fn available_slots(
    store: &dyn AppointmentStore,
    template: &SlotTemplate,
    date: &str,
) -> BookingResult<AvailableSlotsResponse> {
    let date = parse_date(date)?;

    let booked: HashSet<String> = store.booked_slots(date).await?.into_iter().collect();

    let available_slots = template
        .generate_slots()
        .into_iter()
        .filter(|slot| !booked.contains(slot))
        .collect();

    Ok(AvailableSlotsResponse {
        date: format_date(date),
        available_slots,
    })
}

/// Books a slot for a client.
///
/// # Errors
///
/// Checks run in order and the first failure is returned:
///
/// * `BookingError::InvalidDateFormat` - `date` is not a valid `YYYY-MM-DD` date
/// * `BookingError::InvalidSlot` - `time_slot` is not part of the template
/// * `BookingError::MissingField` - `name` or `phone_number` is blank
/// * `BookingError::SlotAlreadyBooked` - another appointment holds the slot
/// * `BookingError::Database` - the store failed
pub async fn book(
    store: &dyn AppointmentStore,
    template: &SlotTemplate,
    request: BookAppointmentRequest,
) -> BookingResult<Appointment> {
    let date = parse_date(&request.date)?;

    if !template.contains(&request.time_slot) {
        return Err(BookingError::InvalidSlot);
    }

    let name = required(request.name, "name")?;
    let phone_number = required(request.phone_number, "phone_number")?;

    let appointment = NewAppointment {
        name,
        phone_number,
        date,
        time_slot: request.time_slot,
    };

    store
        .insert_if_vacant(appointment)
        .await?
        .ok_or(BookingError::SlotAlreadyBooked)
}

fn required(value: String, field: &'static str) -> BookingResult<String> {
    if value.trim().is_empty() {
        return Err(BookingError::MissingField(field));
    }
    Ok(value)
}
