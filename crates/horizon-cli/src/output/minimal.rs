use serde_json::Value;

use super::{flatten, format_cell};

/// Key answer fields, most specific first.
const PRIORITY_KEYS: [&str; 5] = [
    "monthly_savings_required",
    "net_need",
    "target_corpus",
    "label",
    "capital_gap",
];

/// Print just the key answer value from the output.
///
/// Looks for well-known result fields in order of priority, then falls back
/// to the first flattened field of the result object.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_answer(value));
}

fn minimal_answer(value: &Value) -> String {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let Value::Object(map) = result_obj else {
        return format_cell(result_obj);
    };

    for key in PRIORITY_KEYS {
        if let Some(val) = map.get(key).filter(|v| !v.is_null()) {
            return format_cell(val);
        }
    }

    match flatten(map).into_iter().next() {
        Some((key, val)) => format!("{}: {}", key, format_cell(&val)),
        None => String::new(),
    }
}
