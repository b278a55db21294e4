//! The print view.
//!
//! Printing works on the same filtered view the dashboard shows; there is no separate data
//! transform. This module only gathers what a printed page needs alongside the rows: the
//! window, a department label, the generation date and the status tally.

use crate::commands::{filter, summary};
use crate::model::{department_name, AttendanceRecord, Department, FilterWindow, StatusCount};
use crate::store::RecordStore;
use chrono::NaiveDate;
use serde::Serialize;

pub const ALL_DEPARTMENTS: &str = "All departments";

#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    /// 1-based position in the printed table.
    pub number: usize,
    pub department_name: String,
    #[serde(flatten)]
    pub record: AttendanceRecord,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub range_start: NaiveDate,
    pub range_end: NaiveDate,
    pub department: String,
    pub generated_on: NaiveDate,
    pub rows: Vec<ReportRow>,
    pub counts: Vec<StatusCount>,
    pub total: usize,
}

pub fn run<S: RecordStore>(
    store: &S,
    window: &FilterWindow,
    departments: &[Department],
    generated_on: NaiveDate,
) -> Report {
    let view = filter::run(store.list(), window);
    let counts = summary::aggregate(&view);
    let total = summary::total(&counts);

    let department = match window.department() {
        Some(code) => format!("{} ({})", department_name(departments, code), code),
        None => ALL_DEPARTMENTS.to_string(),
    };

    let rows = view
        .into_iter()
        .enumerate()
        .map(|(i, record)| ReportRow {
            number: i + 1,
            department_name: department_name(departments, &record.department_code).to_string(),
            record,
        })
        .collect();

    Report {
        range_start: window.range_start,
        range_end: window.range_end,
        department,
        generated_on,
        rows,
        counts,
        total,
    }
}
