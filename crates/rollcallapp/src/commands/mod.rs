//! # Command Layer
//!
//! The **core business logic** of rollcall. Each operation lives in its own submodule as
//! plain functions over domain types.
//!
//! ## What Commands Do NOT Do
//!
//! - **Terminal I/O**: no stdout, stderr, colours or layout
//! - **Argument parsing**: that's the CLI layer's job
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! ## Structured Returns
//!
//! Commands that act on behalf of a user return [`CmdResult`], which carries:
//! - `added`: the record created by `add`, if any
//! - `records`: the filtered view, in store order
//! - `counts`: one [`StatusCount`] per status, zeros included
//! - `export_path`: where `export` wrote its file
//! - `messages`: user-facing notes with a [`MessageLevel`]
//!
//! The derivations underneath (`filter::run`, `summary::aggregate`, `export::to_csv`) are
//! exposed as pure functions so they can be tested and reused without a store.
//!
//! ## Command Modules
//!
//! - [`add`]: validate a form payload and append it
//! - [`filter`]: the date-window / department filter engine
//! - [`summary`]: per-status tallies over a filtered view
//! - [`export`]: CSV rendering and the report file
//! - [`report`]: the print-friendly view model
//! - [`departments`]: the department reference list

use crate::model::{AttendanceRecord, StatusCount};
use serde::Serialize;
use std::path::PathBuf;

pub mod add;
pub mod departments;
pub mod export;
pub mod filter;
pub mod report;
pub mod summary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added: Option<AttendanceRecord>,
    pub records: Vec<AttendanceRecord>,
    pub counts: Vec<StatusCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_added(mut self, record: AttendanceRecord) -> Self {
        self.added = Some(record);
        self
    }

    pub fn with_records(mut self, records: Vec<AttendanceRecord>) -> Self {
        self.records = records;
        self
    }

    pub fn with_counts(mut self, counts: Vec<StatusCount>) -> Self {
        self.counts = counts;
        self
    }

    pub fn with_export_path(mut self, path: PathBuf) -> Self {
        self.export_path = Some(path);
        self
    }
}
