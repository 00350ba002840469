//! # slot-engine
//!
//! Deterministic booking-slot availability from calendar free/busy data.
//!
//! Given a reference instant, a lookahead horizon in days, and the busy
//! intervals already gathered from any number of source calendars, the engine
//! produces the ordered list of bookable slot start instants that clear every
//! scheduling rule: US Eastern business hours, weekends excluded, a minimum
//! advance notice, and buffer padding around existing bookings.
//!
//! The computation is pure and synchronous — no I/O, no shared state, no
//! cross-call caching. Fetching busy data from calendar providers and
//! serializing the result are the caller's job.
//!
//! ## Modules
//!
//! - [`calculator`] — candidate generation and constraint testing
//! - [`eastern`] — US Eastern DST rules, computed per year
//! - [`interval`] — busy-interval model, padding, merge/overlap helpers
//! - [`error`] — error types

pub mod calculator;
pub mod eastern;
pub mod error;
pub mod interval;

pub use calculator::{available_slots, SlotConfig};
pub use error::SlotError;
pub use interval::{merge_intervals, BusyInterval};
