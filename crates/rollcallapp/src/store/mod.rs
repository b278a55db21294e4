//! # Storage Layer
//!
//! The [`RecordStore`] trait is the only way commands reach attendance records.
//!
//! ## Append-Only Log
//!
//! Records are created and never touched again: there is no update and no delete. The
//! store is an ordered log, and insertion order is the order everything downstream sees
//! (the dashboard table, the printed report, the CSV rows).
//!
//! ## Identifiers
//!
//! Ids are assigned as `max(existing) + 1`, starting at `1` for an empty store. Since
//! nothing is ever removed, an id is never reused for the lifetime of the store.
//! Assignment happens in [`crate::commands::add`] via [`RecordStore::next_id`]; the store
//! itself only guarantees uniqueness by rejecting a duplicate on insert.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the only backend. Records live as long as the session
//!   that owns the store, nothing is written to disk.

use crate::error::Result;
use crate::model::AttendanceRecord;

pub mod memory;

pub trait RecordStore {
    /// Append a record. Fails if its id is already present.
    fn insert(&mut self, record: AttendanceRecord) -> Result<()>;

    /// All records, in insertion order.
    fn list(&self) -> &[AttendanceRecord];

    fn next_id(&self) -> u64 {
        self.list().iter().map(|r| r.id).max().map_or(1, |max| max + 1)
    }

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}
