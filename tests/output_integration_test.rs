//! Integration tests for the public formatting surface.

use console::measure_text_width;
use serde::Serialize;
use serde_json::json;

use overseer::{table, InvalidInputError, Level};

#[test]
fn test_rendered_table_matches_expected_lines() {
    let rows = vec![
        json!({"name": "Al", "age": "30"}),
        json!({"name": "Bo", "age": "7"}),
    ];

    let rendered = table::render(&rows).unwrap();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(
        lines,
        vec![
            "┌──────┬─────┐",
            "│ name │ age │",
            "├──────┼─────┤",
            "│  Al  │ 30  │",
            "│  Bo  │  7  │",
            "└──────┴─────┘",
        ]
    );
}

#[test]
fn test_struct_rows_render_in_field_order() {
    #[derive(Serialize)]
    struct Peer {
        host: String,
        port: u16,
        healthy: bool,
    }

    let rows = vec![
        Peer {
            host: "10.0.0.1".to_string(),
            port: 7100,
            healthy: true,
        },
        Peer {
            host: "10.0.0.2".to_string(),
            port: 7101,
            healthy: false,
        },
    ];

    let rendered = table::render(&rows).unwrap();
    let header = rendered.lines().nth(1).unwrap();

    let labels: Vec<&str> = header
        .split('│')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .collect();
    assert_eq!(labels, vec!["host", "port", "healthy"]);
    assert!(rendered.contains("7100"));
    assert!(rendered.contains("false"));
}

#[test]
fn test_mixed_width_unicode_stays_aligned() {
    let rows = vec![
        json!({"name": "中文名", "role": "scout"}),
        json!({"name": "al", "role": "✓ done"}),
    ];

    let rendered = table::render(&rows).unwrap();
    let widths: Vec<usize> = rendered.lines().map(measure_text_width).collect();
    assert_eq!(widths.len(), 6);
    assert!(widths.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn test_malformed_table_input_is_rejected() {
    let empty: Vec<serde_json::Value> = vec![];
    assert!(matches!(
        table::render(&empty).unwrap_err(),
        InvalidInputError::Empty
    ));

    let not_records = vec![json!("just a string")];
    assert!(matches!(
        table::render(&not_records).unwrap_err(),
        InvalidInputError::NotARecord(0)
    ));

    let mismatched = vec![json!({"a": 1}), json!({"b": 2})];
    assert!(matches!(
        table::render(&mismatched).unwrap_err(),
        InvalidInputError::ColumnMismatch(1)
    ));

    let no_columns = vec![json!({})];
    assert!(matches!(
        table::render(&no_columns).unwrap_err(),
        InvalidInputError::NoColumns
    ));
}

#[test]
fn test_format_line_shape_without_color() {
    colored::control::set_override(false);

    let line = overseer::format_line(Level::Comment, "spawning pool ready");
    assert!(line.starts_with(" [C]  ["));
    assert!(line.ends_with("] : spawning pool ready"));

    let error_line = overseer::format_line(Level::Error, "disk full");
    assert!(error_line.starts_with(" [E]  ["));
}

#[test]
fn test_render_object_pretty_output() {
    let dump = overseer::render_object(&json!({
        "queue": {"depth": 4},
        "workers": ["a", "b"],
    }))
    .unwrap();

    assert!(dump.starts_with('{'));
    assert!(dump.ends_with('}'));
    assert!(dump.lines().count() > 1);
    assert!(dump.contains("\"depth\": 4"));

    assert!(matches!(
        overseer::render_object(&3.5).unwrap_err(),
        InvalidInputError::NotCollection
    ));
}

#[test]
fn test_error_messages_read_as_diagnostics() {
    assert_eq!(
        InvalidInputError::Empty.to_string(),
        "Invalid table data: expected a non-empty list of records"
    );
    assert_eq!(
        InvalidInputError::NotCollection.to_string(),
        "Invalid data type: expected an array or collection"
    );
    assert_eq!(
        InvalidInputError::ColumnMismatch(3).to_string(),
        "Invalid record at index 3: columns do not match the header"
    );
}
