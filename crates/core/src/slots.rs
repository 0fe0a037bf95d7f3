//! # Daily Slot Template
//!
//! Every calendar date shares the same schedule: business hours split into
//! fixed-size slots with a break window in the middle of the day. Slots are
//! identified by their 12-hour clock label (`"10:00 AM"`, `"02:30 PM"`), and
//! those labels are what gets persisted with a booking, so the formatting here
//! must stay stable.

use chrono::{Duration, NaiveTime};

use crate::errors::{BookingError, BookingResult};

/// 12-hour clock with zero-padded hour and AM/PM designator.
pub const SLOT_LABEL_FORMAT: &str = "%I:%M %p";

/// The fixed daily schedule from which bookable slots are derived.
///
/// The default template runs from 10:00 AM to 5:00 PM in 30 minute steps with
/// a break between 1:00 PM and 2:00 PM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotTemplate {
    day_start: NaiveTime,
    day_end: NaiveTime,
    break_start: NaiveTime,
    break_end: NaiveTime,
    granularity: Duration,
}

impl SlotTemplate {
    /// Creates a template, rejecting schedules that could never produce a
    /// well-formed day.
    ///
    /// # Errors
    ///
    /// * `BookingError::InvalidTemplate` - the granularity is not positive or
    ///   the day does not end after it starts
    pub fn new(
        day_start: NaiveTime,
        day_end: NaiveTime,
        break_start: NaiveTime,
        break_end: NaiveTime,
        granularity: Duration,
    ) -> BookingResult<Self> {
        if granularity <= Duration::zero() {
            return Err(BookingError::InvalidTemplate(
                "slot granularity must be positive".to_string(),
            ));
        }
        if day_end <= day_start {
            return Err(BookingError::InvalidTemplate(
                "day end must be after day start".to_string(),
            ));
        }

        Ok(Self {
            day_start,
            day_end,
            break_start,
            break_end,
            granularity,
        })
    }

    /// Produces the ordered slot labels for a single day.
    ///
    /// Walks from the day start towards the (exclusive) day end one
    /// granularity step at a time. Times inside `[break_start, break_end)` are
    /// skipped. The result is identical for every date.
    pub fn generate_slots(&self) -> Vec<String> {
        let mut slots = Vec::new();
        let mut current = self.day_start;

        while current < self.day_end {
            if !self.is_break(current) {
                slots.push(format_slot(current));
            }

            let (next, wrapped) = current.overflowing_add_signed(self.granularity);
            if wrapped != 0 {
                break;
            }
            current = next;
        }

        slots
    }

    /// Whether `label` names one of the slots of this template.
    pub fn contains(&self, label: &str) -> bool {
        self.generate_slots().iter().any(|slot| slot == label)
    }

    fn is_break(&self, time: NaiveTime) -> bool {
        self.break_start <= time && time < self.break_end
    }
}

impl Default for SlotTemplate {
    fn default() -> Self {
        Self {
            day_start: hm(10, 0),
            day_end: hm(17, 0),
            break_start: hm(13, 0),
            break_end: hm(14, 0),
            granularity: Duration::minutes(30),
        }
    }
}

/// Slot labels for the default template.
pub fn generate_slots() -> Vec<String> {
    SlotTemplate::default().generate_slots()
}

/// Formats a time the way slot labels are stored.
pub fn format_slot(time: NaiveTime) -> String {
    time.format(SLOT_LABEL_FORMAT).to_string()
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}
