pub mod csv_out;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::{Map, Value};

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Pretty-print JSON to stdout.
fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}

/// Flatten nested objects into dotted keys (`insurance.net_need`).
/// Arrays are kept as leaf values.
pub fn flatten(map: &Map<String, Value>) -> Vec<(String, Value)> {
    let mut rows = Vec::new();
    flatten_into(&mut rows, "", map);
    rows
}

fn flatten_into(rows: &mut Vec<(String, Value)>, prefix: &str, map: &Map<String, Value>) {
    for (key, val) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match val {
            Value::Object(inner) => flatten_into(rows, &path, inner),
            other => rows.push((path, other.clone())),
        }
    }
}

/// Render a scalar for a single table or CSV cell.
pub fn format_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(arr) => arr.iter().map(format_cell).collect::<Vec<_>>().join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_flatten_nested_result() {
        let value = json!({
            "insurance": { "net_need": "933439", "gross_need": "948439" },
            "monthly_savings_required": "2474.1",
            "risk": { "label": "High" }
        });
        let rows = flatten(value.as_object().unwrap());
        let keys: Vec<&str> = rows.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "insurance.gross_need",
                "insurance.net_need",
                "monthly_savings_required",
                "risk.label",
            ]
        );
    }

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(&json!("High")), "High");
        assert_eq!(format_cell(&json!(30)), "30");
        assert_eq!(format_cell(&Value::Null), "");
        assert_eq!(format_cell(&json!(["a", "b"])), "a, b");
    }
}
