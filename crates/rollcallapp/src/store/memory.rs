use super::RecordStore;
use crate::error::{Result, RollcallError};
use crate::model::AttendanceRecord;

#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    records: Vec<AttendanceRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-filled with `records`, keeping their ids.
    pub fn with_records(records: Vec<AttendanceRecord>) -> Result<Self> {
        let mut store = Self::new();
        for record in records {
            store.insert(record)?;
        }
        Ok(store)
    }
}

impl RecordStore for InMemoryStore {
    fn insert(&mut self, record: AttendanceRecord) -> Result<()> {
        if self.records.iter().any(|r| r.id == record.id) {
            return Err(RollcallError::DuplicateId(record.id));
        }
        self.records.push(record);
        Ok(())
    }

    fn list(&self) -> &[AttendanceRecord] {
        &self.records
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Status;
    use chrono::NaiveDate;

    pub fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("fixture date")
    }

    pub fn record(
        id: u64,
        name: &str,
        dept: &str,
        status: Status,
        start: &str,
        end: &str,
    ) -> AttendanceRecord {
        AttendanceRecord {
            id,
            person_name: name.to_string(),
            department_code: dept.to_string(),
            status,
            start_date: date(start),
            end_date: date(end),
            location: String::new(),
            program_name: String::new(),
            notes: String::new(),
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// The three overlapping November records used throughout the tests.
        pub fn november() -> Self {
            Self::new()
                .with_record(
                    "Dr. Muslimin Bin Parman",
                    "JLKTD",
                    Status::ExternalAssignment,
                    "2025-11-11",
                    "2025-11-13",
                )
                .with_record(
                    "Puan Noraini Bt Ismail",
                    "JMIP",
                    Status::AnnualLeave,
                    "2025-11-11",
                    "2025-11-12",
                )
                .with_record(
                    "Encik Hafiz Bin Rahman",
                    "JKRC",
                    Status::MedicalLeave,
                    "2025-11-10",
                    "2025-11-12",
                )
        }

        pub fn with_record(
            mut self,
            name: &str,
            dept: &str,
            status: Status,
            start: &str,
            end: &str,
        ) -> Self {
            let id = self.store.next_id();
            self.store
                .insert(record(id, name, dept, status, start, end))
                .expect("fixture insert");
            self
        }
    }
}
