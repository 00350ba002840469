//! Candidate-slot generation and constraint testing.
//!
//! Walks the requested number of calendar days starting at the reference
//! instant's UTC date, generates top-of-hour Eastern candidates inside the
//! business window, and keeps the ones that clear the minimum-advance rule
//! and every buffer-padded busy interval.

use chrono::{DateTime, Days, Duration, Utc};

use crate::eastern;
use crate::error::Result;
use crate::interval::BusyInterval;

/// Scheduling rules applied during slot generation.
///
/// The defaults match the production booking flow: 9:00–16:00 local start
/// hours (1-hour slots ending as late as 17:00), a 30-minute buffer around
/// every existing booking, and 4 hours of notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotConfig {
    /// First local hour a slot may start, inclusive.
    pub first_start_hour: u32,
    /// Last local hour a slot may start, inclusive.
    pub last_start_hour: u32,
    /// Length of a bookable slot.
    pub slot: Duration,
    /// Symmetric padding applied around every busy interval before overlap
    /// testing. Never shrinks the business window itself.
    pub buffer: Duration,
    /// Minimum lead time between the reference instant and a slot start.
    pub minimum_advance: Duration,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            first_start_hour: 9,
            last_start_hour: 16,
            slot: Duration::hours(1),
            buffer: Duration::minutes(30),
            minimum_advance: Duration::hours(4),
        }
    }
}

/// Compute the ordered list of bookable slot start instants.
///
/// Scans `horizon_days` consecutive calendar days, day 0 being the UTC date
/// of `reference` (the Eastern business day ends before 00:00 UTC, so no
/// bookable candidate precedes day 0). Weekend days contribute nothing. On each
/// remaining day, every top-of-hour candidate in the business window is
/// emitted unless it starts less than `minimum_advance` after `reference`
/// (wall-clock, not calendar-day) or overlaps any busy interval padded by
/// `buffer` on both ends. A candidate that touches a padded interval exactly
/// at a boundary is accepted.
///
/// Busy intervals may be unsorted and overlapping; they are tested
/// independently, which yields the same slots as merging them first because
/// the overlap test is existential.
///
/// The output is ordered day-major then hour-major, which for top-of-hour
/// candidates means strictly ascending start instants. An empty busy list, a
/// zero-day horizon, or a fully-booked horizon all produce an `Ok` result —
/// possibly empty, never an error.
///
/// # Errors
/// Returns [`SlotError::InvalidInterval`](crate::SlotError::InvalidInterval)
/// if any busy interval has `start >= end`.
pub fn available_slots(
    reference: DateTime<Utc>,
    horizon_days: u32,
    busy: &[BusyInterval],
    config: &SlotConfig,
) -> Result<Vec<DateTime<Utc>>> {
    for interval in busy {
        interval.validate()?;
    }

    let padded: Vec<BusyInterval> = busy.iter().map(|iv| iv.padded(config.buffer)).collect();

    let earliest_start = reference + config.minimum_advance;
    let first_date = reference.date_naive();

    let mut slots = Vec::new();
    for day in 0..horizon_days {
        let Some(date) = first_date.checked_add_days(Days::new(u64::from(day))) else {
            break;
        };
        if eastern::is_weekend(date) {
            continue;
        }

        for hour in config.first_start_hour..=config.last_start_hour {
            let Some(slot_start) = eastern::from_local(date, hour) else {
                continue;
            };
            let slot_end = slot_start + config.slot;

            if slot_start < earliest_start {
                continue;
            }
            if padded.iter().any(|iv| iv.overlaps(slot_start, slot_end)) {
                continue;
            }

            slots.push(slot_start);
        }
    }

    Ok(slots)
}
