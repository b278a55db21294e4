//! The filter engine.
//!
//! A record is part of the view iff its date range overlaps the window (both ends
//! inclusive) and, when the window names a department, its department code equals that
//! code exactly. Codes are compared case-sensitively with no normalization.
//!
//! Output keeps store order. The view is recomputed from scratch on every call.

use crate::model::{AttendanceRecord, FilterWindow};
use crate::range::overlaps;

pub fn run(records: &[AttendanceRecord], window: &FilterWindow) -> Vec<AttendanceRecord> {
    let view: Vec<AttendanceRecord> = records
        .iter()
        .filter(|r| matches(r, window))
        .cloned()
        .collect();
    tracing::debug!(
        total = records.len(),
        matched = view.len(),
        start = %window.range_start,
        end = %window.range_end,
        department = window.department().unwrap_or(""),
        "Filtered attendance records"
    );
    view
}

pub fn matches(record: &AttendanceRecord, window: &FilterWindow) -> bool {
    let in_range = overlaps(
        record.start_date,
        record.end_date,
        window.range_start,
        window.range_end,
    );
    let in_department = window
        .department()
        .is_none_or(|code| record.department_code == code);
    in_range && in_department
}
