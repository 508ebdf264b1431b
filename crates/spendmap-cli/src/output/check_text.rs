use std::io;

use serde_json::Value;

use super::format::key_value_rows;

pub fn render_check(data: &Value) -> io::Result<String> {
    let mut lines = Vec::new();
    lines.push("Snapshot check completed.".to_string());
    lines.push(String::new());
    lines.push("Summary:".to_string());

    let entries = vec![
        ("Source:", value_str(data, "source")),
        ("Format:", value_str(data, "format")),
        ("Rows read:", value_i64(data, "rows_read")),
        ("Awards normalized:", value_i64(data, "awards")),
        ("Missing state:", value_i64(data, "missing_state")),
        ("Missing recipient:", value_i64(data, "missing_recipient")),
        ("Zero/negative amount:", value_i64(data, "nonpositive_amount")),
        ("Defaulted amount:", value_i64(data, "defaulted_amount")),
        ("Map/chart eligible:", value_i64(data, "geo_eligible")),
    ];
    lines.extend(key_value_rows(&entries, 2));

    let states = data
        .get("states_present")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    lines.push(String::new());
    if states.is_empty() {
        lines.push("No states would appear on the map from this snapshot.".to_string());
    } else {
        let codes: Vec<String> = states
            .iter()
            .filter_map(|value| value.as_str().map(str::to_string))
            .collect();
        lines.push(format!("States present: {}", codes.join(", ")));
    }

    Ok(lines.join("\n"))
}

fn value_str(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

fn value_i64(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_i64)
        .unwrap_or(0)
        .to_string()
}
