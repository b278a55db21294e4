//! # Domain Model
//!
//! The types every layer speaks: [`Status`], [`Department`], [`AttendanceRecord`] and its
//! form-side twin [`NewAttendanceRecord`], the transient [`FilterWindow`], and the derived
//! [`StatusCount`].
//!
//! ## Form Payload vs. Stored Record
//!
//! A [`NewAttendanceRecord`] is exactly what a user typed: dates are still text and may be
//! blank or malformed. It only becomes an [`AttendanceRecord`] after
//! [`crate::commands::add`] validates it, at which point both dates are real
//! [`NaiveDate`]s with `start_date <= end_date`. A stored record therefore can never be
//! missing a date, so the filter never has to guess about incomplete rows.
//!
//! ## Status Order
//!
//! [`Status::ALL`] is the canonical order used for every summary:
//! Office, Medical Leave, Annual Leave, Public Holiday, External Assignment.

use crate::error::{Result, RollcallError};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Office,
    MedicalLeave,
    AnnualLeave,
    PublicHoliday,
    ExternalAssignment,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::Office,
        Status::MedicalLeave,
        Status::AnnualLeave,
        Status::PublicHoliday,
        Status::ExternalAssignment,
    ];

    /// Human label used in tables and exported files.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Office => "Office",
            Status::MedicalLeave => "Medical Leave",
            Status::AnnualLeave => "Annual Leave",
            Status::PublicHoliday => "Public Holiday",
            Status::ExternalAssignment => "External Assignment",
        }
    }

    /// Machine name, as accepted on the command line and written in JSON.
    pub fn key(&self) -> &'static str {
        match self {
            Status::Office => "office",
            Status::MedicalLeave => "medical-leave",
            Status::AnnualLeave => "annual-leave",
            Status::PublicHoliday => "public-holiday",
            Status::ExternalAssignment => "external-assignment",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown status '{0}' (expected one of: office, medical-leave, annual-leave, public-holiday, external-assignment)")]
pub struct ParseStatusError(pub String);

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        if needle == "mc" {
            return Ok(Status::MedicalLeave);
        }
        Status::ALL
            .into_iter()
            .find(|status| status.key() == needle || status.label().to_lowercase() == needle)
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// An organisational unit, referenced from records by its short `code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub code: String,
    pub name: String,
}

impl Department {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Looks up a department's display name, falling back to the code itself.
pub fn department_name<'a>(departments: &'a [Department], code: &'a str) -> &'a str {
    departments
        .iter()
        .find(|d| d.code == code)
        .map(|d| d.name.as_str())
        .unwrap_or(code)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: u64,
    pub person_name: String,
    pub department_code: String,
    pub status: Status,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub program_name: String,
    #[serde(default)]
    pub notes: String,
}

/// Raw form input for a new record. Everything except `status` is free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAttendanceRecord {
    pub person_name: String,
    pub department_code: String,
    pub status: Status,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub program_name: String,
    #[serde(default)]
    pub notes: String,
}

impl NewAttendanceRecord {
    pub fn new(
        person_name: impl Into<String>,
        department_code: impl Into<String>,
        status: Status,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            person_name: person_name.into(),
            department_code: department_code.into(),
            status,
            start_date: start_date.into(),
            end_date: end_date.into(),
            ..Default::default()
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_program(mut self, program_name: impl Into<String>) -> Self {
        self.program_name = program_name.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// The active date range and optional department constraint of a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterWindow {
    pub range_start: NaiveDate,
    pub range_end: NaiveDate,
    pub department_code: Option<String>,
}

impl FilterWindow {
    pub fn new(range_start: NaiveDate, range_end: NaiveDate) -> Result<Self> {
        if range_start > range_end {
            return Err(RollcallError::InvalidWindow {
                start: range_start,
                end: range_end,
            });
        }
        Ok(Self {
            range_start,
            range_end,
            department_code: None,
        })
    }

    /// A single-day window on the local current date.
    pub fn today() -> Self {
        let today = Local::now().date_naive();
        Self {
            range_start: today,
            range_end: today,
            department_code: None,
        }
    }

    /// Sets the department constraint. An empty code means "all departments"; any other
    /// code is matched verbatim against `AttendanceRecord::department_code`.
    pub fn with_department(mut self, code: Option<String>) -> Self {
        self.department_code = code.filter(|c| !c.is_empty());
        self
    }

    pub fn department(&self) -> Option<&str> {
        self.department_code.as_deref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: Status,
    pub count: usize,
}
