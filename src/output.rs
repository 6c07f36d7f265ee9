//! Leveled console printing and structured JSON dumps.
//!
//! Every entry point writes synchronously to stdout: a blank spacer line,
//! then one badge-prefixed, timestamped line. The structured dumps
//! ([`object`], [`table`]) place their payload on the lines below the badge
//! line. Malformed input never escapes as an error; it degrades to an
//! `Error`-level line carrying the [`InvalidInputError`] message.

use chrono::Local;
use serde::Serialize;
use serde_json::Value;

use crate::error::InvalidInputError;
use crate::level::Level;

/// Timestamp format used in every printed line (local time).
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Print a plain progress note.
pub fn log(message: &str) {
    emit(Level::Log, message);
}

/// Print a success line.
pub fn success(message: &str) {
    emit(Level::Success, message);
}

/// Print an informational line.
pub fn info(message: &str) {
    emit(Level::Info, message);
}

/// Print a warning line.
pub fn warning(message: &str) {
    emit(Level::Warning, message);
}

/// Print a side comment.
pub fn comment(message: &str) {
    emit(Level::Comment, message);
}

/// Print an error line.
pub fn error(message: &str) {
    emit(Level::Error, message);
}

/// Pretty-print a serializable collection as indented JSON.
///
/// The JSON block starts on the line below the badge line. Values that do
/// not serialize to an array or object are rejected the same way malformed
/// table input is: the rejection text is printed as an `Error`-level line.
pub fn object<T: Serialize>(data: &T) {
    match render_object(data) {
        Ok(json) => emit(Level::Object, &format!("\n{json}")),
        Err(err) => error(&err.to_string()),
    }
}

/// Render a record sequence as a box-drawing table and print it.
///
/// The table starts on the line below the badge line. See
/// [`crate::table::render`] for the layout contract; on
/// [`InvalidInputError`] an `Error`-level line is printed instead.
pub fn table<T: Serialize>(rows: &[T]) {
    match crate::table::render(rows) {
        Ok(rendered) => emit(Level::Table, &format!("\n{rendered}")),
        Err(err) => error(&err.to_string()),
    }
}

/// Serialize `data` and pretty-print it when it forms an array or object.
///
/// This is the pure counterpart of [`object`]: no printing, the result or
/// the rejection is returned to the caller.
pub fn render_object<T: Serialize>(data: &T) -> Result<String, InvalidInputError> {
    let value = serde_json::to_value(data)?;
    match value {
        Value::Array(_) | Value::Object(_) => Ok(serde_json::to_string_pretty(&value)?),
        _ => Err(InvalidInputError::NotCollection),
    }
}

/// Compose one badge-prefixed line without printing it.
///
/// Shape: colored ` [X] ` badge, bracketed local timestamp, ` : `, message.
pub fn format_line(level: Level, message: &str) -> String {
    compose(
        level,
        &Local::now().format(TIMESTAMP_FORMAT).to_string(),
        message,
    )
}

/// Badge, bracketed timestamp, colon, message.
fn compose(level: Level, timestamp: &str, message: &str) -> String {
    let badge = level.badge();
    format!("{badge} [{timestamp}] : {message}")
}

/// Write a blank spacer line, then the composed line, to stdout.
fn emit(level: Level, message: &str) {
    println!();
    println!("{}", format_line(level, message));
}
