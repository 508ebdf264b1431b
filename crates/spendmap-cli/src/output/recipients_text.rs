use std::io;

use serde_json::Value;

use super::format::{Align, Column, format_usd, key_value_rows, render_table, terminal_width};

pub fn render_recipients(data: &Value) -> io::Result<String> {
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
        lines.extend(scope_lines(data));
        return Ok(lines.join("\n"));
    }

    let scope = match data.get("state").and_then(Value::as_str) {
        Some(state) => format!("in {state}"),
        None => "nationally".to_string(),
    };
    lines.push(format!("Top {} recipients {scope}.", rows.len()));
    lines.extend(scope_lines(data));
    lines.push(String::new());
    lines.push("Recipients:".to_string());

    let has_links = rows
        .iter()
        .any(|row| row.get("careers_search").and_then(Value::as_str).is_some());

    let mut columns = vec![
        Column {
            name: "#",
            align: Align::Right,
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
            name: "Awards",
            align: Align::Right,
        },
        Column {
            name: "Class",
            align: Align::Left,
        },
    ];
    if has_links {
        columns.push(Column {
            name: "Careers",
            align: Align::Left,
        });
    }

    let table_rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            let mut cells = vec![
                row.get("rank").and_then(Value::as_i64).unwrap_or(0).to_string(),
                value_str(row, "recipient_name"),
                format_usd(row.get("amount").and_then(Value::as_f64).unwrap_or(0.0)),
                row.get("count").and_then(Value::as_i64).unwrap_or(0).to_string(),
                value_str(row, "size_class"),
            ];
            if has_links {
                cells.push(value_str(row, "careers_search"));
            }
            cells
        })
        .collect();
    lines.extend(render_table(&columns, &table_rows, terminal_width()));

    Ok(lines.join("\n"))
}

fn scope_lines(data: &Value) -> Vec<String> {
    let mut entries = Vec::new();
    if let Some(psc) = data.get("psc_prefix").and_then(Value::as_str) {
        entries.push(("PSC prefix:", psc.to_string()));
    }
    if let Some(naics) = data.get("naics_prefix").and_then(Value::as_str) {
        entries.push(("NAICS prefix:", naics.to_string()));
    }
    if let Some(class) = data.get("set_aside").and_then(Value::as_str)
        && class != "all"
    {
        entries.push(("Size class:", class.to_string()));
    }
    if let Some(source) = data.get("source").and_then(Value::as_str) {
        entries.push(("Source:", source.to_string()));
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

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::render_recipients;

    #[test]
    fn recipients_render_with_rank_and_class() {
        let rendered = render_recipients(&json!({
            "state": "MD",
            "source": "derived",
            "set_aside": "all",
            "rows": [
                {"rank": 1, "recipient_name": "ACME", "amount": 5000.0, "count": 2, "size_class": "8(a) / Small"}
            ]
        }));
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("Top 1 recipients in MD."));
            assert!(text.contains("ACME"));
            assert!(text.contains("$5,000.00"));
            assert!(text.contains("8(a) / Small"));
            assert!(text.contains("Source:"));
        }
    }

    #[test]
    fn careers_column_appears_only_when_links_exist() {
        let rendered = render_recipients(&json!({
            "source": "enriched_snapshot",
            "set_aside": "all",
            "rows": [
                {"rank": 1, "recipient_name": "ACME", "amount": 10.0, "count": 1,
                 "size_class": "Other", "careers_search": "https://example.test/acme"}
            ]
        }));
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("Careers"));
            assert!(text.contains("example.test"));
        }
    }

    #[test]
    fn empty_rows_show_message() {
        let rendered = render_recipients(&json!({
            "rows": [],
            "message": "No awards match the current filters."
        }));
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("No awards match the current filters."));
        }
    }
}
