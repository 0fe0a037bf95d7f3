use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Invalid date format. Use YYYY-MM-DD.")]
    InvalidDateFormat,

    #[error("Invalid time slot.")]
    InvalidSlot,

    #[error("Time slot already booked.")]
    SlotAlreadyBooked,

    #[error("Field '{0}' must not be empty.")]
    MissingField(&'static str),

    #[error("Invalid slot template: {0}")]
    InvalidTemplate(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),
}

impl BookingError {
    /// Whether the error was caused by the caller's input rather than by the
    /// service itself.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            BookingError::InvalidDateFormat
                | BookingError::InvalidSlot
                | BookingError::SlotAlreadyBooked
                | BookingError::MissingField(_)
        )
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
