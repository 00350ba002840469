//! US Eastern civil-time rules.
//!
//! Daylight time (UTC-4) runs from the second Sunday of March, 02:00 local,
//! through the first Sunday of November, 02:00 local (exclusive). The
//! transition dates are computed from the weekday of the 1st of the month for
//! whatever year is asked about — never hardcoded.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc, Weekday};

/// Hours behind UTC during Eastern Daylight Time.
pub const EDT_OFFSET_HOURS: i64 = 4;
/// Hours behind UTC during Eastern Standard Time.
pub const EST_OFFSET_HOURS: i64 = 5;

/// The Nth Sunday of a month: take the weekday of the 1st, add the minimal
/// number of days to reach the first Sunday, then whole weeks.
fn nth_sunday(year: i32, month: u32, n: u32) -> NaiveDate {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .expect("the 1st of a real month is always a valid date");
    let days_to_first_sunday = (7 - first.weekday().num_days_from_sunday()) % 7;
    first + Duration::days(i64::from(days_to_first_sunday) + 7 * (i64::from(n) - 1))
}

/// The local date Daylight Saving Time begins: second Sunday of March.
pub fn dst_start(year: i32) -> NaiveDate {
    nth_sunday(year, 3, 2)
}

/// The local date Daylight Saving Time ends: first Sunday of November.
pub fn dst_end(year: i32) -> NaiveDate {
    nth_sunday(year, 11, 1)
}

/// UTC offset (hours behind UTC) in effect on an Eastern calendar date.
///
/// Returns 4 (EDT) for dates in `[dst_start, dst_end)` and 5 (EST)
/// otherwise. Date-level resolution: the 02:00 cutover only matters on the
/// two transition dates themselves — use [`offset_hours_at`] when an instant
/// on those dates must be classified exactly.
pub fn offset_hours_for(date: NaiveDate) -> i64 {
    let year = date.year();
    if date >= dst_start(year) && date < dst_end(year) {
        EDT_OFFSET_HOURS
    } else {
        EST_OFFSET_HOURS
    }
}

/// UTC offset (hours behind UTC) in effect at an absolute instant.
///
/// Honors the 02:00-local cutover: spring forward happens at 02:00 EST,
/// which is 07:00 UTC on the start date; fall back at 02:00 EDT, which is
/// 06:00 UTC on the end date. Daylight time is in effect between those two
/// instants.
pub fn offset_hours_at(instant: DateTime<Utc>) -> i64 {
    let year = instant.year();
    let spring = cutover_utc(dst_start(year), EST_OFFSET_HOURS);
    let fall = cutover_utc(dst_end(year), EDT_OFFSET_HOURS);
    if instant >= spring && instant < fall {
        EDT_OFFSET_HOURS
    } else {
        EST_OFFSET_HOURS
    }
}

/// The UTC instant of the 02:00-local cutover on a transition date, given
/// the offset in effect just before the transition.
fn cutover_utc(date: NaiveDate, offset_before_hours: i64) -> DateTime<Utc> {
    let local = date
        .and_hms_opt(2, 0, 0)
        .expect("02:00:00 is always a valid time of day");
    Utc.from_utc_datetime(&(local + Duration::hours(offset_before_hours)))
}

/// The Eastern calendar date an absolute instant falls on.
pub fn local_date(instant: DateTime<Utc>) -> NaiveDate {
    (instant - Duration::hours(offset_hours_at(instant))).date_naive()
}

/// The UTC instant corresponding to (Eastern calendar date, local hour,
/// :00:00), using the offset in effect on that date.
///
/// Returns `None` for an out-of-range hour (> 23).
pub fn from_local(date: NaiveDate, hour: u32) -> Option<DateTime<Utc>> {
    let local = date.and_hms_opt(hour, 0, 0)?;
    let offset = offset_hours_for(date);
    Some(Utc.from_utc_datetime(&(local + Duration::hours(offset))))
}

/// Whether an Eastern calendar date is a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
