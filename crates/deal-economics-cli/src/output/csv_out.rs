use serde_json::{Map, Value};
use std::io;

use super::{format_scalar, GridView};

/// Write output as CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let body = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Some(grid) = GridView::from_result(body) {
        let _ = wtr.write_record(grid.header());
        for record in grid.records() {
            let _ = wtr.write_record(&record);
        }
    } else if let Value::Object(map) = body {
        let _ = wtr.write_record(["field", "value"]);
        write_fields(&mut wtr, "", map);
    } else {
        let _ = wtr.write_record([&format_scalar(body)]);
    }

    let _ = wtr.flush();
}

/// Two-column field/value rows; nested records flatten to dotted field names.
fn write_fields<W: io::Write>(wtr: &mut csv::Writer<W>, prefix: &str, map: &Map<String, Value>) {
    for (key, val) in map {
        let field = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match val {
            Value::Object(inner) => write_fields(wtr, &field, inner),
            _ => {
                let _ = wtr.write_record([field.as_str(), &format_scalar(val)]);
            }
        }
    }
}
