//! Closed-interval overlap on calendar days.
//!
//! `[record_start, record_end]` and `[window_start, window_end]` overlap iff
//! `record_start <= window_end && record_end >= window_start`. Both ends are inclusive, so
//! a record ending on the day a window starts still counts.
//!
//! No normalization is applied to inverted intervals (start after end). Such an interval
//! only "overlaps" another interval that straddles it entirely, see the tests below.
//! The store refuses inverted records and [`crate::model::FilterWindow`] refuses inverted
//! windows, so in practice the predicate only ever sees well-formed input.

use chrono::NaiveDate;

pub fn overlaps(
    record_start: NaiveDate,
    record_end: NaiveDate,
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> bool {
    record_start <= window_end && record_end >= window_start
}
