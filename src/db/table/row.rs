use std::fmt;

/// Stable identifier of a record within its profile.
///
/// Ids are handed out from a per-profile counter and are never reused, so an
/// id stays valid while the record's position shifts under deletes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(pub(crate) u64);

impl RecordId {
    /// Returns the raw numeric value of this id.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A row of text fields, one per column of the owning profile.
///
/// Records are only built by a profile, which guarantees the field count
/// matches its schema.
///
/// # Example
///
/// ```
/// use paradigm_db::{DataStore, Profile, BUILTIN_PROFILES};
///
/// let profile = Profile::from_definition(&BUILTIN_PROFILES[1]);
/// let record = &profile.read()[0];
///
/// assert_eq!(record.fields(), ["1", "Arroz 5kg", "R$ 25.00"]);
/// assert_eq!(record.get_value(1), Some("Arroz 5kg"));
/// assert_eq!(record.get_value(3), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: RecordId,
    fields: Vec<String>,
}

impl Record {
    pub(crate) fn new(id: RecordId, fields: Vec<String>) -> Self {
        Self { id, fields }
    }

    /// The stable id assigned when the record was created.
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// The ordered field values.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Gets the value at the given column index.
    pub fn get_value(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub(crate) fn replace_fields(&mut self, fields: Vec<String>) {
        self.fields = fields;
    }
}
