//! Busy-interval model with padding and merge/overlap helpers.
//!
//! Intervals arrive from any number of source calendars, in any order, and
//! may overlap or touch. Overlap testing is open at the boundaries: an
//! interval that ends exactly when another starts does not conflict with it.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// A busy period on some calendar, in UTC.
///
/// Invariant: `start < end`. [`BusyInterval::new`] enforces it; values built
/// field-by-field (e.g. deserialized from JSON) should be checked with
/// [`BusyInterval::validate`] before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl BusyInterval {
    /// Construct a validated interval.
    ///
    /// # Errors
    /// Returns [`SlotError::InvalidInterval`] if `start >= end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        let interval = Self { start, end };
        interval.validate()?;
        Ok(interval)
    }

    /// Check the `start < end` invariant.
    ///
    /// # Errors
    /// Returns [`SlotError::InvalidInterval`] naming the offending bounds.
    pub fn validate(&self) -> Result<()> {
        if self.start >= self.end {
            return Err(SlotError::InvalidInterval {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Expand the interval symmetrically by `buffer` on both ends.
    #[must_use]
    pub fn padded(&self, buffer: Duration) -> Self {
        Self {
            start: self.start - buffer,
            end: self.end + buffer,
        }
    }

    /// Open-interval overlap test against a candidate `start..end` range.
    ///
    /// Two ranges overlap iff `start < self.end && end > self.start`, so a
    /// candidate touching the interval exactly at a boundary is not a
    /// conflict.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        start < self.end && end > self.start
    }
}

/// Merge overlapping or adjacent intervals into a sorted, disjoint list.
///
/// The calculator does not need merged input — it tests candidates against
/// each padded interval independently, and the test is existential — but
/// callers aggregating several calendars may want the compact form, and the
/// test suite uses it to confirm that both shapes produce identical slots.
pub fn merge_intervals(intervals: &[BusyInterval]) -> Vec<BusyInterval> {
    let mut sorted: Vec<BusyInterval> = intervals.to_vec();
    sorted.sort_by_key(|iv| (iv.start, iv.end));

    let mut merged: Vec<BusyInterval> = Vec::new();
    for iv in sorted {
        if let Some(last) = merged.last_mut() {
            if iv.start <= last.end {
                // Overlapping or adjacent — extend the current interval.
                last.end = last.end.max(iv.end);
                continue;
            }
        }
        merged.push(iv);
    }

    merged
}
