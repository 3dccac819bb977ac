use miette::Diagnostic;
use thiserror::Error;

use crate::db::table::RecordId;

/// Errors raised at the profile or session boundary.
///
/// Every variant is a local precondition violation. A failed operation never
/// touches the stored records, so callers can show the message and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum DatabaseError {
    #[error("Index {index} is out of range for {len} records")]
    #[diagnostic(
        code(paradigm::index_out_of_range),
        help("pick a row number shown in the table")
    )]
    IndexOutOfRange { index: usize, len: usize },

    #[error("No profile is active")]
    #[diagnostic(
        code(paradigm::no_active_profile),
        help("select a profile before working with records")
    )]
    NoActiveProfile,

    #[error("Expected {expected} fields but got {found}")]
    #[diagnostic(code(paradigm::schema_mismatch))]
    SchemaMismatch { expected: usize, found: usize },

    #[error("Profile not found: {0}")]
    #[diagnostic(code(paradigm::profile_not_found), help("run `list` to see profiles"))]
    ProfileNotFound(String),

    #[error("Duplicate profile name: {0}")]
    #[diagnostic(code(paradigm::duplicate_profile))]
    DuplicateProfile(String),

    #[error("Record not found: {0}")]
    #[diagnostic(code(paradigm::record_not_found))]
    RecordNotFound(RecordId),

    #[error("Invalid command: {0}")]
    #[diagnostic(code(paradigm::invalid_command), help("type `help` for commands"))]
    InvalidCommand(String),
}
