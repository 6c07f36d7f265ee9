//! Box-drawing table rendering for uniform record sequences.
//!
//! [`render`] turns a non-empty slice of serializable records into a bordered,
//! column-aligned table. Every record must serialize to a key-value object
//! whose ordered key set matches the first record's; anything else is
//! rejected with [`InvalidInputError`] rather than rendered misaligned.
//!
//! Column widths are measured in display columns, not bytes: ANSI escape
//! sequences contribute zero width and wide CJK glyphs count as two, so
//! colored or non-ASCII cells stay aligned.

use console::measure_text_width;
use serde::Serialize;
use serde_json::Value;

use crate::error::InvalidInputError;

/// Unicode box-drawing characters for table borders
const VERTICAL: &str = "│";
const HORIZONTAL: &str = "─";
const TOP_BORDER: (&str, &str, &str) = ("┌", "┬", "┐");
const MID_BORDER: (&str, &str, &str) = ("├", "┼", "┤");
const BOTTOM_BORDER: (&str, &str, &str) = ("└", "┴", "┘");

/// Platform line separator used to join rendered lines.
#[cfg(windows)]
const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
const LINE_SEPARATOR: &str = "\n";

/// Render a sequence of uniform records as a bordered table.
///
/// The header row is taken from the first record's keys in order; each data
/// row is that record's values projected in header order. Cells are
/// center-padded to the widest entry of their column, with the extra space on
/// the right when the padding is odd.
///
/// The result has `rows + 4` lines (top border, header, separator, one line
/// per record, bottom border) joined by the platform line separator, with no
/// trailing separator. Rendering is pure: the same input always produces the
/// same string, and nothing is printed.
///
/// # Example
///
/// ```
/// use serde_json::json;
///
/// let rows = vec![
///     json!({"name": "Al", "age": "30"}),
///     json!({"name": "Bo", "age": "7"}),
/// ];
/// let table = overseer::table::render(&rows).unwrap();
/// assert_eq!(table.lines().next().unwrap(), "┌──────┬─────┐");
/// ```
pub fn render<T: Serialize>(rows: &[T]) -> Result<String, InvalidInputError> {
    let projection = project(rows)?;
    Ok(layout(&projection.header, &projection.rows))
}

/// Header and cell text of validated, uniformly shaped input.
struct Projection {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Serialize and validate records, projecting values in header order.
fn project<T: Serialize>(rows: &[T]) -> Result<Projection, InvalidInputError> {
    if rows.is_empty() {
        return Err(InvalidInputError::Empty);
    }

    let mut header: Vec<String> = Vec::new();
    let mut projected: Vec<Vec<String>> = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        let value = serde_json::to_value(row)?;
        let Value::Object(record) = value else {
            return Err(InvalidInputError::NotARecord(index));
        };

        if index == 0 {
            if record.is_empty() {
                return Err(InvalidInputError::NoColumns);
            }
            header = record.keys().cloned().collect();
        } else if !record.keys().eq(header.iter()) {
            return Err(InvalidInputError::ColumnMismatch(index));
        }

        projected.push(record.values().map(cell_text).collect());
    }

    Ok(Projection {
        header,
        rows: projected,
    })
}

/// Convert one cell value to its display text.
///
/// Strings render bare, null renders empty, other scalars render as their
/// JSON text, and nested structures render as compact JSON. Cell values are
/// expected to be single-line.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Assemble the bordered table from projected header and rows.
fn layout(header: &[String], rows: &[Vec<String>]) -> String {
    let widths = column_widths(header, rows);

    let mut lines = vec![
        border(&widths, TOP_BORDER),
        data_line(header, &widths),
        border(&widths, MID_BORDER),
    ];
    for row in rows {
        lines.push(data_line(row, &widths));
    }
    lines.push(border(&widths, BOTTOM_BORDER));

    lines.join(LINE_SEPARATOR)
}

/// Per-column width: the widest of the header label and every cell below it.
fn column_widths(header: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = header
        .iter()
        .map(|label| measure_text_width(label))
        .collect();
    for row in rows {
        for (column, cell) in row.iter().enumerate() {
            widths[column] = widths[column].max(measure_text_width(cell));
        }
    }
    widths
}

/// One `│ cell │ cell │` content line with center-padded cells.
fn data_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str(VERTICAL);
        line.push(' ');
        line.push_str(&pad_center(cell, *width));
        line.push(' ');
    }
    line.push_str(VERTICAL);
    line
}

/// One horizontal border: per-column runs of `─` joined by junction glyphs.
fn border(widths: &[usize], (left, junction, right): (&str, &str, &str)) -> String {
    let runs: Vec<String> = widths
        .iter()
        .map(|width| HORIZONTAL.repeat(width + 2))
        .collect();
    format!("{left}{}{right}", runs.join(junction))
}

/// Center `text` within `width` display columns.
///
/// The padding splits as evenly as possible, with the extra space on the
/// right when the total is odd.
fn pad_center(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(measure_text_width(text));
    let left = padding / 2;
    let right = padding - left;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}
