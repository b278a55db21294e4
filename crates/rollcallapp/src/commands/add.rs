use crate::commands::{departments, CmdMessage, CmdResult};
use crate::error::{Result, ValidationError};
use crate::model::{AttendanceRecord, Department, NewAttendanceRecord};
use crate::store::RecordStore;
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn run<S: RecordStore>(
    store: &mut S,
    new: NewAttendanceRecord,
    departments: &[Department],
) -> Result<CmdResult> {
    let (start_date, end_date) = match validate(&new) {
        Ok(dates) => dates,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected new attendance record");
            return Err(e.into());
        }
    };

    let record = AttendanceRecord {
        id: store.next_id(),
        person_name: new.person_name.trim().to_string(),
        department_code: new.department_code,
        status: new.status,
        start_date,
        end_date,
        location: new.location,
        program_name: new.program_name,
        notes: new.notes,
    };
    store.insert(record.clone())?;
    tracing::info!(id = record.id, status = record.status.key(), "Added attendance record");

    let mut result = CmdResult::default();
    if !departments::is_known(departments, &record.department_code) {
        result.add_message(CmdMessage::warning(format!(
            "Department '{}' is not in the department list",
            record.department_code
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Record {} added: {} ({}, {} to {})",
        record.id, record.person_name, record.status, record.start_date, record.end_date
    )));
    Ok(result.with_added(record))
}

/// Checks the required fields and parses both dates.
///
/// Missing fields are reported together, before any date is looked at.
pub fn validate(
    new: &NewAttendanceRecord,
) -> std::result::Result<(NaiveDate, NaiveDate), ValidationError> {
    let mut missing = Vec::new();
    if new.person_name.trim().is_empty() {
        missing.push("name");
    }
    if new.start_date.trim().is_empty() {
        missing.push("start date");
    }
    if new.end_date.trim().is_empty() {
        missing.push("end date");
    }
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    let start = parse_date("start date", &new.start_date)?;
    let end = parse_date("end date", &new.end_date)?;
    if start > end {
        return Err(ValidationError::InvertedRange { start, end });
    }
    Ok((start, end))
}

fn parse_date(field: &'static str, value: &str) -> std::result::Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        ValidationError::InvalidDate {
            field,
            value: value.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RollcallError;
    use crate::model::Status;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn departments() -> Vec<Department> {
        vec![
            Department::new("JMIP", "Institution Empowerment"),
            Department::new("JKRC", "Consultancy"),
        ]
    }

    fn form(name: &str, start: &str, end: &str) -> NewAttendanceRecord {
        NewAttendanceRecord::new(name, "JMIP", Status::AnnualLeave, start, end)
    }

    #[test]
    fn first_record_gets_id_one() {
        let mut store = InMemoryStore::new();
        let result = run(
            &mut store,
            form("Puan Aminah", "2025-11-11", "2025-11-12"),
            &departments(),
        )
        .unwrap();

        let added = result.added.unwrap();
        assert_eq!(added.id, 1);
        assert_eq!(added.start_date, NaiveDate::from_ymd_opt(2025, 11, 11).unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn sequential_adds_get_distinct_increasing_ids() {
        let mut store = StoreFixture::november().store;
        let mut ids = Vec::new();
        for i in 0..5 {
            let result = run(
                &mut store,
                form(&format!("Staff {i}"), "2025-12-01", "2025-12-01"),
                &departments(),
            )
            .unwrap();
            ids.push(result.added.unwrap().id);
        }
        assert_eq!(ids, vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn empty_name_is_rejected_without_consuming_an_id() {
        let mut store = StoreFixture::november().store;
        let err = run(&mut store, form("", "2025-11-11", "2025-11-12"), &departments())
            .unwrap_err();
        match err {
            RollcallError::Validation(ValidationError::MissingFields(fields)) => {
                assert_eq!(fields, vec!["name"]);
            }
            other => panic!("Expected MissingFields, got {:?}", other),
        }
        assert_eq!(store.len(), 3);
        assert_eq!(store.next_id(), 4);
    }

    #[test]
    fn whitespace_name_counts_as_missing() {
        let mut store = InMemoryStore::new();
        assert!(run(&mut store, form("   ", "2025-11-11", "2025-11-12"), &departments()).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn all_missing_fields_are_reported_together() {
        let err = validate(&form("", "", "")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields(vec!["name", "start date", "end date"])
        );
        assert_eq!(err.to_string(), "Please fill in name, start date, end date");
    }

    #[test]
    fn malformed_date_is_rejected() {
        let err = validate(&form("A", "11/11/2025", "2025-11-12")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidDate {
                field: "start date",
                value: "11/11/2025".into()
            }
        );
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = validate(&form("A", "2025-11-13", "2025-11-11")).unwrap_err();
        assert!(matches!(err, ValidationError::InvertedRange { .. }));
    }

    #[test]
    fn optional_fields_are_kept_verbatim() {
        let mut store = InMemoryStore::new();
        let new = form("Dr. Lim", "2025-11-11", "2025-11-13")
            .with_location("IAB Northern Branch")
            .with_program("Digital Leadership Workshop")
            .with_notes("He said \"hi\"");
        let added = run(&mut store, new, &departments())
            .unwrap()
            .added
            .unwrap();
        assert_eq!(added.location, "IAB Northern Branch");
        assert_eq!(added.program_name, "Digital Leadership Workshop");
        assert_eq!(added.notes, "He said \"hi\"");
    }

    #[test]
    fn unknown_department_is_accepted_with_warning() {
        let mut store = InMemoryStore::new();
        let new = NewAttendanceRecord::new("A", "NOPE", Status::Office, "2025-11-11", "2025-11-11");
        let result = run(&mut store, new, &departments()).unwrap();
        assert_eq!(store.len(), 1);
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == crate::commands::MessageLevel::Warning
                && m.content.contains("NOPE")));
    }
}
