//! The records a fresh session starts with, so the dashboard has something to show for
//! the week of 10-13 November 2025.

use crate::error::{Result, ValidationError};
use crate::model::{AttendanceRecord, Status};
use crate::store::memory::InMemoryStore;
use chrono::NaiveDate;

fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        ValidationError::InvalidDate {
            field: "sample date",
            value: format!("{year:04}-{month:02}-{day:02}"),
        }
        .into()
    })
}

pub fn sample_records() -> Result<Vec<AttendanceRecord>> {
    Ok(vec![
        AttendanceRecord {
            id: 1,
            person_name: "Dr. Muslimin Bin Parman".to_string(),
            department_code: "JLKTD".to_string(),
            status: Status::ExternalAssignment,
            start_date: ymd(2025, 11, 11)?,
            end_date: ymd(2025, 11, 13)?,
            location: "IAB Cawangan Utara".to_string(),
            program_name: "Digital Leadership Workshop".to_string(),
            notes: "With JPN Kedah".to_string(),
        },
        AttendanceRecord {
            id: 2,
            person_name: "Puan Noraini Bt Ismail".to_string(),
            department_code: "JMIP".to_string(),
            status: Status::AnnualLeave,
            start_date: ymd(2025, 11, 11)?,
            end_date: ymd(2025, 11, 12)?,
            location: String::new(),
            program_name: String::new(),
            notes: String::new(),
        },
        AttendanceRecord {
            id: 3,
            person_name: "Encik Hafiz Bin Rahman".to_string(),
            department_code: "JKRC".to_string(),
            status: Status::MedicalLeave,
            start_date: ymd(2025, 11, 10)?,
            end_date: ymd(2025, 11, 12)?,
            location: String::new(),
            program_name: String::new(),
            notes: "Fever".to_string(),
        },
    ])
}

pub fn sample_store() -> Result<InMemoryStore> {
    InMemoryStore::with_records(sample_records()?)
}
