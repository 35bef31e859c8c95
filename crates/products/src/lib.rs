//! Products domain module (shelf life).
//!
//! This crate contains the expiry rules for products, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no clock reads).

pub mod calendar;
pub mod date;
pub mod expiry;

pub use calendar::CalendarDelta;
pub use date::ProductDate;
pub use expiry::{ExpiryReport, ExpiryStatus, SHELF_LIFE_MONTHS, compute, expiry_date_for};
