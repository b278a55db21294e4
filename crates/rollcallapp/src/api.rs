//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. Every client (the CLI
//! one-shot commands and the interactive session alike) reaches the records through it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the record store and the department reference list
//! - **Dispatches** to the matching command function
//! - **Returns structured types** (`CmdResult`, `Report`, plain vectors)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Terminal I/O**: no stdout, stderr or formatting
//! - **Window state**: the current filter window is held by [`crate::session::Session`];
//!   the API takes a window per call and keeps nothing between calls
//!
//! ## Generic Over RecordStore
//!
//! `RollcallApi<S: RecordStore>` is generic over the storage backend, so it can be driven
//! by the session's store or by a test fixture alike.

use crate::commands;
use crate::error::Result;
use crate::model::{AttendanceRecord, Department, FilterWindow, NewAttendanceRecord, StatusCount};
use crate::store::RecordStore;
use chrono::NaiveDate;
use std::path::Path;

pub struct RollcallApi<S: RecordStore> {
    store: S,
    departments: Vec<Department>,
}

impl<S: RecordStore> RollcallApi<S> {
    pub fn new(store: S, departments: Vec<Department>) -> Self {
        Self { store, departments }
    }

    pub fn add_record(&mut self, new: NewAttendanceRecord) -> Result<CmdResult> {
        commands::add::run(&mut self.store, new, &self.departments)
    }

    /// The filtered rows and their status counts.
    pub fn view(&self, window: &FilterWindow) -> CmdResult {
        let records = commands::filter::run(self.store.list(), window);
        let counts = commands::summary::aggregate(&records);
        CmdResult::default().with_records(records).with_counts(counts)
    }

    pub fn summary(&self, window: &FilterWindow) -> Vec<StatusCount> {
        commands::summary::aggregate(&commands::filter::run(self.store.list(), window))
    }

    pub fn export(&self, window: &FilterWindow, dir: &Path) -> Result<CmdResult> {
        commands::export::run(&self.store, window, dir)
    }

    pub fn report(&self, window: &FilterWindow, generated_on: NaiveDate) -> Report {
        commands::report::run(&self.store, window, &self.departments, generated_on)
    }

    pub fn departments(&self) -> Vec<Department> {
        commands::departments::run(&self.departments)
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        self.store.list()
    }
}

pub use commands::report::{Report, ReportRow};
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_departments;
    use crate::model::Status;
    use crate::store::memory::fixtures::{date, StoreFixture};
    use crate::store::memory::InMemoryStore;

    fn api() -> RollcallApi<InMemoryStore> {
        RollcallApi::new(StoreFixture::november().store, default_departments())
    }

    fn window(start: &str, end: &str) -> FilterWindow {
        FilterWindow::new(date(start), date(end)).unwrap()
    }

    #[test]
    fn view_pairs_rows_with_counts() {
        let result = api().view(&window("2025-11-11", "2025-11-11"));
        assert_eq!(result.records.len(), 3);
        assert_eq!(result.counts.len(), 5);
        assert_eq!(commands::summary::total(&result.counts), 3);
    }

    #[test]
    fn summary_matches_view_counts() {
        let api = api();
        let w = window("2025-11-13", "2025-11-13");
        assert_eq!(api.summary(&w), api.view(&w).counts);
    }

    #[test]
    fn add_record_is_visible_in_next_view() {
        let mut api = api();
        let new = NewAttendanceRecord::new("Cik Aina", "JPKIC", Status::Office, "2025-11-11", "2025-11-11");
        let added = api.add_record(new).unwrap().added.unwrap();
        assert_eq!(added.id, 4);

        let view = api.view(&window("2025-11-11", "2025-11-11"));
        assert_eq!(view.records.len(), 4);
        assert_eq!(view.records[3].person_name, "Cik Aina");
        assert_eq!(api.records().len(), 4);
    }

    #[test]
    fn rejected_record_leaves_store_untouched() {
        let mut api = api();
        let new = NewAttendanceRecord::new("", "JMIP", Status::Office, "", "");
        assert!(api.add_record(new).is_err());
        assert_eq!(api.records().len(), 3);
    }

    #[test]
    fn departments_come_from_the_configured_list() {
        let api = RollcallApi::new(InMemoryStore::new(), vec![Department::new("HR", "Human Resources")]);
        assert_eq!(api.departments().len(), 1);
        assert!(api.records().is_empty());
    }

    #[test]
    fn report_uses_configured_department_names() {
        let report = api().report(&window("2025-11-10", "2025-11-10"), date("2025-11-10"));
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].department_name, "Jabatan Konsultasi dan Runding Cara");
    }
}
