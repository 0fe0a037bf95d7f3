use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const BOOKING_SUCCESS_MESSAGE: &str = "Appointment booked successfully.";

/// A booked slot. Appointments are never updated or removed once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    pub date: NaiveDate,
    pub time_slot: String,
    pub created_at: DateTime<Utc>,
}

/// A validated booking on its way into the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub name: String,
    pub phone_number: String,
    pub date: NaiveDate,
    pub time_slot: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub name: String,
    pub phone_number: String,
    pub date: String,
    pub time_slot: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentResponse {
    pub message: String,
    pub id: i64,
}

impl From<&Appointment> for BookAppointmentResponse {
    fn from(appointment: &Appointment) -> Self {
        Self {
            message: BOOKING_SUCCESS_MESSAGE.to_string(),
            id: appointment.id,
        }
    }
}
