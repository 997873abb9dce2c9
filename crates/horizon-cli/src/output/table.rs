use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{flatten, format_cell};

/// Format output as a Field/Value table using the tabled crate.
pub fn print_table(value: &Value) {
    println!("{}", render_table(value));
}

fn render_table(value: &Value) -> String {
    match value {
        Value::Object(map) => match map.get("result") {
            Some(Value::Object(result)) => render_result_table(result, map),
            _ => field_table(map).to_string(),
        },
        other => format_cell(other),
    }
}

fn field_table(map: &Map<String, Value>) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in flatten(map) {
        builder.push_record([key, format_cell(&val)]);
    }
    builder.build()
}

fn render_result_table(result: &Map<String, Value>, envelope: &Map<String, Value>) -> String {
    let mut out = field_table(result).to_string();

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            out.push_str("\n\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                out.push_str(&format!("\n  - {}", w));
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        out.push_str(&format!("\n\nMethodology: {}", meth));
    }
    out
}
