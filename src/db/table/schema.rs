use crate::DatabaseError;

/// The ordered column names of a profile.
///
/// Every record stored under a schema carries exactly one field per column.
///
/// # Example
///
/// ```
/// use paradigm_db::Schema;
///
/// let schema = Schema::new(["ID", "Produto", "Preço"]);
///
/// assert_eq!(schema.len(), 3);
/// assert_eq!(schema.get_column_index("Preço"), Some(2));
/// assert_eq!(schema.get_column_index("Estoque"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// The ordered column names.
    pub columns: Vec<String>,
}

impl Schema {
    /// Creates a schema from anything yielding column names.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Finds the index of a column by name.
    pub fn get_column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|col| col == name)
    }

    /// Checks that a set of fields lines up with this schema.
    ///
    /// Fields are never padded or truncated; a length mismatch is rejected.
    pub(crate) fn check_fields(&self, fields: &[String]) -> Result<(), DatabaseError> {
        if fields.len() != self.columns.len() {
            return Err(DatabaseError::SchemaMismatch {
                expected: self.columns.len(),
                found: fields.len(),
            });
        }

        Ok(())
    }
}
