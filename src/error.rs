//! Error types for structured-output validation.

use thiserror::Error;

/// Rejection for malformed structured-output input.
///
/// The pure renderers in [`crate::table`] and [`crate::output`] return this
/// directly. The printing entry points never propagate it; they report the
/// message as an `Error`-level line instead, so nothing is raised past the
/// crate boundary.
#[derive(Error, Debug)]
pub enum InvalidInputError {
    /// Table rendering was asked for zero records.
    #[error("Invalid table data: expected a non-empty list of records")]
    Empty,

    /// Object dump input did not serialize to an array or collection.
    #[error("Invalid data type: expected an array or collection")]
    NotCollection,

    /// A table row did not serialize to a key-value object.
    #[error("Invalid record at index {0}: expected a key-value object")]
    NotARecord(usize),

    /// A table row's ordered key set differs from the header row's.
    #[error("Invalid record at index {0}: columns do not match the header")]
    ColumnMismatch(usize),

    /// Records without columns cannot form a bordered table.
    #[error("Invalid table data: records have no columns")]
    NoColumns,

    /// The input could not be serialized to JSON at all.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
