use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use eyre::Result;
use slotbook_core::{
    models::appointment::{Appointment, NewAppointment},
    store::AppointmentStore,
};
use sqlx::{Pool, Sqlite};

use crate::models::DbAppointment;

pub async fn get_booked_slots(pool: &Pool<Sqlite>, date: NaiveDate) -> Result<Vec<String>> {
    tracing::debug!("Getting booked slots for date: {}", date);

    let slots = sqlx::query_scalar::<_, String>(
        r#"
        SELECT time_slot
        FROM appointments
        WHERE date = ?
        "#,
    )
    .bind(date)
    .fetch_all(pool)
    .await?;

    Ok(slots)
}

pub async fn get_appointments_by_date(
    pool: &Pool<Sqlite>,
    date: NaiveDate,
) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, name, phone_number, date, time_slot, created_at
        FROM appointments
        WHERE date = ?
        ORDER BY id ASC
        "#,
    )
    .bind(date)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

/// Inserts an appointment unless its `(date, time_slot)` is taken.
///
/// The conflict is resolved by the unique index inside the single statement,
/// so two concurrent callers for the same slot cannot both get a row back.
pub async fn create_appointment_if_vacant(
    pool: &Pool<Sqlite>,
    appointment: &NewAppointment,
) -> Result<Option<DbAppointment>> {
    let now = Utc::now();

    tracing::debug!(
        "Creating appointment: date={}, time_slot={}",
        appointment.date,
        appointment.time_slot
    );

    let created = sqlx::query_as::<_, DbAppointment>(
        r#"
        INSERT INTO appointments (name, phone_number, date, time_slot, created_at)
        VALUES (?, ?, ?, ?, ?)
        ON CONFLICT (date, time_slot) DO NOTHING
        RETURNING id, name, phone_number, date, time_slot, created_at
        "#,
    )
    .bind(&appointment.name)
    .bind(&appointment.phone_number)
    .bind(appointment.date)
    .bind(&appointment.time_slot)
    .bind(now)
    .fetch_optional(pool)
    .await?;

    match &created {
        Some(row) => tracing::debug!("Appointment created successfully: id={}", row.id),
        None => tracing::debug!(
            "Slot already taken: date={}, time_slot={}",
            appointment.date,
            appointment.time_slot
        ),
    }

    Ok(created)
}

/// [`AppointmentStore`] backed by the SQLite pool.
#[derive(Debug, Clone)]
pub struct SqlAppointmentRepository {
    pool: Pool<Sqlite>,
}

impl SqlAppointmentRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentStore for SqlAppointmentRepository {
    async fn booked_slots(&self, date: NaiveDate) -> Result<Vec<String>> {
        get_booked_slots(&self.pool, date).await
    }

    async fn insert_if_vacant(&self, appointment: NewAppointment) -> Result<Option<Appointment>> {
        let created = create_appointment_if_vacant(&self.pool, &appointment).await?;
        Ok(created.map(Appointment::from))
    }
}
