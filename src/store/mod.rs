//! Persistence boundary for employee records.
//!
//! The UI only ever talks to [`EmployeeStore`], so the state machine can be
//! exercised in tests against an in-memory fake while the binary runs against
//! the embedded SQLite implementation in [`sqlite`].

mod sqlite;

use thiserror::Error;

use crate::models::Employee;

pub use sqlite::{open_default_store, SqliteStore};

/// Failures a store operation can surface. The UI converts these into error
/// notices verbatim, so the display strings are user-facing text.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Employee not found")]
    NotFound,
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

/// Backend contract the component consumes. `save` is an upsert keyed on the
/// record's id: an absent id inserts and assigns one, a present id updates in
/// place. `delete_many` removes the whole id set as one logical operation.
pub trait EmployeeStore {
    /// Fetch every record. Ordering is the store's insertion order; the UI
    /// paginates client-side and never passes filter or page parameters.
    fn list(&self) -> Result<Vec<Employee>, StoreError>;

    /// Insert or update one record.
    fn save(&mut self, employee: &Employee) -> Result<(), StoreError>;

    /// Remove one record, failing with [`StoreError::NotFound`] when the id
    /// does not exist.
    fn delete(&mut self, id: i64) -> Result<(), StoreError>;

    /// Remove all given records atomically: either every id is deleted or
    /// none are.
    fn delete_many(&mut self, ids: &[i64]) -> Result<(), StoreError>;
}
