use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{format_scalar, GridView};

/// Format output as tables using the tabled crate.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result_table(result, map);
            } else {
                print_fields(map);
            }
        }
        _ => println!("{}", value),
    }
}

fn print_result_table(result: &Value, envelope: &Map<String, Value>) {
    if let Some(grid) = GridView::from_result(result) {
        let mut builder = Builder::default();
        builder.push_record(grid.header());
        for record in grid.records() {
            builder.push_record(record);
        }
        println!("{}", Table::from(builder));
        if let Some(base) = result.get("base_case_value") {
            println!("\nBase case: {}", format_scalar(base));
        }
    } else if let Value::Object(res_map) = result {
        print_fields(res_map);
    } else {
        println!("{}", result);
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

/// Scalars in one Field/Value table; each nested record (a scenario, a
/// proforma phase) gets its own titled table after it.
fn print_fields(map: &Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    let mut sections = Vec::new();
    let mut has_scalars = false;
    for (key, val) in map {
        match val {
            Value::Object(inner) => sections.push((key, inner)),
            _ => {
                builder.push_record([key.as_str(), &format_value(val)]);
                has_scalars = true;
            }
        }
    }
    if has_scalars {
        println!("{}", Table::from(builder));
    }

    for (title, inner) in sections {
        println!("\n{}", title);
        print_fields(inner);
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Array(arr) => arr.iter().map(format_value).collect::<Vec<_>>().join(", "),
        _ => format_scalar(value),
    }
}
