//! # SlotBook Core
//!
//! Domain types and rules shared by the storage and HTTP layers: the daily
//! slot template, the booking error taxonomy, the appointment store port and
//! the availability/booking operations built on top of it.

pub mod booking;
pub mod dates;
pub mod errors;
pub mod models;
pub mod slots;
pub mod store;
