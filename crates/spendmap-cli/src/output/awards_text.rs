use std::io;

use serde_json::Value;

use super::format::{Align, Column, format_usd, key_value_rows, render_table, terminal_width};

pub fn render_awards(data: &Value) -> io::Result<String> {
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    let mut lines = Vec::new();

    if rows.is_empty() {
        let message = data
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("No awards match the current filters.");
        lines.push(message.to_string());
        return Ok(lines.join("\n"));
    }

    let page = data.get("page").and_then(Value::as_i64).unwrap_or(1);
    let total_pages = data.get("total_pages").and_then(Value::as_i64).unwrap_or(1);
    let total_rows = data.get("total_rows").and_then(Value::as_i64).unwrap_or(0);
    lines.push(format!(
        "Awards page {page} of {total_pages} ({total_rows} rows total)."
    ));

    let mut entries = vec![(
        "Sorted by:",
        format!("{} {}", value_str(data, "sort"), value_str(data, "order")),
    )];
    if let Some(state) = data.get("state").and_then(Value::as_str) {
        entries.push(("State:", state.to_string()));
    }
    if let Some(since) = data.get("since").and_then(Value::as_str) {
        entries.push(("Since:", since.to_string()));
    }
    lines.extend(key_value_rows(&entries, 2));
    lines.push(String::new());
    lines.push("Awards:".to_string());

    let columns = [
        Column {
            name: "Date",
            align: Align::Left,
        },
        Column {
            name: "Recipient",
            align: Align::Left,
        },
        Column {
            name: "Amount",
            align: Align::Right,
        },
        Column {
            name: "St",
            align: Align::Left,
        },
        Column {
            name: "PSC",
            align: Align::Left,
        },
        Column {
            name: "NAICS",
            align: Align::Left,
        },
    ];
    let table_rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            vec![
                value_str(row, "action_date"),
                value_str(row, "recipient_name"),
                format_usd(row.get("award_amount").and_then(Value::as_f64).unwrap_or(0.0)),
                value_str(row, "state"),
                value_str(row, "psc"),
                value_str(row, "naics"),
            ]
        })
        .collect();
    lines.extend(render_table(&columns, &table_rows, terminal_width()));

    Ok(lines.join("\n"))
}

fn value_str(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}
