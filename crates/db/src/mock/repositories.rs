use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;
use slotbook_core::{
    models::appointment::{Appointment, NewAppointment},
    store::AppointmentStore,
};

// Mock repositories for testing
mock! {
    pub AppointmentRepo {}

    #[async_trait]
    impl AppointmentStore for AppointmentRepo {
        async fn booked_slots(&self, date: NaiveDate) -> eyre::Result<Vec<String>>;

        async fn insert_if_vacant(
            &self,
            appointment: NewAppointment,
        ) -> eyre::Result<Option<Appointment>>;
    }
}
