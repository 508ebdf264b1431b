use std::io;

use serde_json::Value;

use super::format::{Align, Column, format_usd, key_value_rows, render_table, terminal_width};

pub fn render_summary(data: &Value) -> io::Result<String> {
    let states = data
        .get("states")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    let metric = value_str(data, "metric");

    let mut lines = Vec::new();

    if states.is_empty() {
        let message = data
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("No awards match the current filters.");
        lines.push(message.to_string());
        lines.extend(filter_lines(data));
        return Ok(lines.join("\n"));
    }

    lines.push(format!(
        "Award totals for {} states (shaded by {metric}).",
        states.len()
    ));
    lines.extend(filter_lines(data));
    lines.push(String::new());
    lines.push("States:".to_string());

    let columns = [
        Column {
            name: "State",
            align: Align::Left,
        },
        Column {
            name: "Name",
            align: Align::Left,
        },
        Column {
            name: "Amount",
            align: Align::Right,
        },
        Column {
            name: "Awards",
            align: Align::Right,
        },
    ];
    let rows: Vec<Vec<String>> = states
        .iter()
        .map(|row| {
            vec![
                value_str(row, "state"),
                value_str(row, "state_name"),
                format_usd(row.get("amount").and_then(Value::as_f64).unwrap_or(0.0)),
                row.get("count")
                    .and_then(Value::as_i64)
                    .unwrap_or(0)
                    .to_string(),
            ]
        })
        .collect();
    lines.extend(render_table(&columns, &rows, terminal_width()));

    Ok(lines.join("\n"))
}

fn filter_lines(data: &Value) -> Vec<String> {
    let mut entries = Vec::new();
    if let Some(psc) = data.get("psc_prefix").and_then(Value::as_str) {
        entries.push(("PSC prefix:", psc.to_string()));
    }
    if let Some(naics) = data.get("naics_prefix").and_then(Value::as_str) {
        entries.push(("NAICS prefix:", naics.to_string()));
    }
    key_value_rows(&entries, 2)
}

fn value_str(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}
