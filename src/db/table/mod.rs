use std::fmt::Debug;

use crate::DatabaseError;

pub mod row;
pub mod schema;

pub use row::{Record, RecordId};
pub use schema::Schema;

/// The CRUD contract every simulated data system fulfils.
///
/// A [`Session`](crate::Session) holds its profiles as `Box<dyn DataStore>` and
/// swaps between them at runtime. Currently only implemented by
/// [`Profile`](crate::Profile), whose behavior is driven entirely by data.
///
/// Records are addressed by position. The `*_by_id` methods resolve a
/// [`RecordId`] to its current position first.
pub trait DataStore: Debug {
    /// Unique key of this data system.
    fn name(&self) -> &str;

    /// Long display name, used as the heading of the rationale text.
    fn title(&self) -> &str;

    /// One-line label of the scenario this data system illustrates.
    fn use_case(&self) -> &str;

    /// Multi-paragraph explanation of why the paradigm fits the scenario.
    fn rationale(&self) -> &str;

    /// The column schema.
    fn schema(&self) -> &Schema;

    /// Appends a record built from `fields`.
    fn create(&mut self, fields: Vec<String>) -> Result<RecordId, DatabaseError>;

    /// Read-only view of the live records.
    fn read(&self) -> &[Record];

    /// Replaces the fields of the record at `index`, keeping its id.
    fn update(&mut self, index: usize, fields: Vec<String>) -> Result<(), DatabaseError>;

    /// Removes and returns the record at `index`.
    fn delete(&mut self, index: usize) -> Result<Record, DatabaseError>;

    /// The ordered column names.
    fn columns(&self) -> &[String] {
        &self.schema().columns
    }

    /// Current position of the record with the given id.
    fn position_of(&self, id: RecordId) -> Option<usize> {
        self.read().iter().position(|record| record.id() == id)
    }

    fn update_by_id(&mut self, id: RecordId, fields: Vec<String>) -> Result<(), DatabaseError> {
        let index = self
            .position_of(id)
            .ok_or(DatabaseError::RecordNotFound(id))?;
        self.update(index, fields)
    }

    fn delete_by_id(&mut self, id: RecordId) -> Result<Record, DatabaseError> {
        let index = self
            .position_of(id)
            .ok_or(DatabaseError::RecordNotFound(id))?;
        self.delete(index)
    }
}
