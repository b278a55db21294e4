//! Application state for interactive clients.
//!
//! A [`Session`] owns the API (and through it the store) plus the current
//! [`FilterWindow`]. Nothing is cached: `dashboard`, `export` and `report` each filter and
//! aggregate from scratch, so a change to the window or a new record shows up in the very
//! next query.

use crate::api::{Report, RollcallApi};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{FilterWindow, NewAttendanceRecord, StatusCount};
use crate::store::RecordStore;
use chrono::NaiveDate;
use std::path::Path;

pub struct Session<S: RecordStore> {
    api: RollcallApi<S>,
    window: FilterWindow,
}

impl<S: RecordStore> Session<S> {
    /// Starts a session on today's date with no department constraint.
    pub fn new(api: RollcallApi<S>) -> Self {
        Self::with_window(api, FilterWindow::today())
    }

    pub fn with_window(api: RollcallApi<S>, window: FilterWindow) -> Self {
        Self { api, window }
    }

    pub fn api(&self) -> &RollcallApi<S> {
        &self.api
    }

    pub fn window(&self) -> &FilterWindow {
        &self.window
    }

    pub fn add(&mut self, new: NewAttendanceRecord) -> Result<CmdResult> {
        self.api.add_record(new)
    }

    /// Moves the date range, keeping the department constraint. An inverted range is
    /// rejected and the current window stays as it was.
    pub fn set_range(&mut self, start: NaiveDate, end: NaiveDate) -> Result<()> {
        let window =
            FilterWindow::new(start, end)?.with_department(self.window.department_code.clone());
        tracing::debug!(%start, %end, "Window moved");
        self.window = window;
        Ok(())
    }

    pub fn set_department(&mut self, code: impl Into<String>) {
        self.window = self.window.clone().with_department(Some(code.into()));
    }

    pub fn clear_department(&mut self) {
        self.window.department_code = None;
    }

    /// Back to a single-day window on today, all departments.
    pub fn reset(&mut self) {
        self.window = FilterWindow::today();
    }

    pub fn dashboard(&self) -> CmdResult {
        self.api.view(&self.window)
    }

    pub fn summary(&self) -> Vec<StatusCount> {
        self.api.summary(&self.window)
    }

    pub fn export(&self, dir: &Path) -> Result<CmdResult> {
        self.api.export(&self.window, dir)
    }

    pub fn report(&self, generated_on: NaiveDate) -> Report {
        self.api.report(&self.window, generated_on)
    }
}
