use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use slotbook_core::models::appointment::Appointment;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    pub date: NaiveDate,
    pub time_slot: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbAppointment> for Appointment {
    fn from(row: DbAppointment) -> Self {
        Self {
            id: row.id,
            name: row.name,
            phone_number: row.phone_number,
            date: row.date,
            time_slot: row.time_slot,
            created_at: row.created_at,
        }
    }
}
