//! Overseer - Developer Diagnostics Console
//!
//! Overseer prints leveled, color-badged diagnostic lines and renders
//! structured data (pretty JSON dumps and box-drawing tables) to standard
//! output. It is a formatting surface, not a logging framework: no routing,
//! no filtering, no configuration, just synchronous writes the moment they
//! are requested.
//!
//! Each printed line opens with a colored ` [X] ` badge (one initial per
//! [`Level`]), a local timestamp, and the message. Structured payloads start
//! on the lines below their badge line. Malformed structured input degrades
//! to an `Error`-level line instead of propagating
//! ([`InvalidInputError`]).
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! overseer::info("routing table refreshed");
//!
//! let rows = vec![
//!     json!({"name": "Al", "age": "30"}),
//!     json!({"name": "Bo", "age": "7"}),
//! ];
//! overseer::table(&rows);
//!
//! // The pure renderer is available when the caller wants the string.
//! let table = overseer::table::render(&rows).unwrap();
//! assert_eq!(table.lines().count(), 6);
//! ```

pub mod error;
pub mod level;
pub mod output;
pub mod table;

// Re-export commonly used items
pub use error::InvalidInputError;
pub use level::Level;
pub use output::{
    comment, error, format_line, info, log, object, render_object, success, table, warning,
};
