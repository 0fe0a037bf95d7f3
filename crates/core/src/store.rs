//! Port between the booking rules and whatever persists appointments.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::appointment::{Appointment, NewAppointment};

/// Persistent record of booked slots.
///
/// Implementations must enforce that at most one appointment exists per
/// `(date, time_slot)` pair, and must decide that at write time: two callers
/// racing for the same slot may both observe it as free in
/// [`booked_slots`](AppointmentStore::booked_slots), yet only one of their
/// inserts may succeed.
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// Slot labels already booked on `date`, in no particular order.
    async fn booked_slots(&self, date: NaiveDate) -> eyre::Result<Vec<String>>;

    /// Stores `appointment` unless its slot is already taken.
    ///
    /// Returns `Ok(None)` when another appointment holds the same
    /// `(date, time_slot)`.
    async fn insert_if_vacant(
        &self,
        appointment: NewAppointment,
    ) -> eyre::Result<Option<Appointment>>;
}
