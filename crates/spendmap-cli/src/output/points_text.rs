use std::io;

use serde_json::Value;

use super::format::{Align, Column, format_usd, key_value_rows, render_table, terminal_width};

pub fn render_points(data: &Value) -> io::Result<String> {
    let points = data
        .get("points")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    let state = data.get("state").and_then(Value::as_str).unwrap_or("");

    let mut lines = Vec::new();

    if points.is_empty() {
        let message = data.get("message").and_then(Value::as_str).unwrap_or(
            "No mappable awards for the current filters; the state outline still renders.",
        );
        lines.push(message.to_string());
        lines.extend(context_lines(data));
        return Ok(lines.join("\n"));
    }

    lines.push(format!(
        "{} point clusters for {state}.",
        points.len()
    ));
    lines.extend(context_lines(data));
    lines.push(String::new());
    lines.push("Clusters:".to_string());

    let columns = [
        Column {
            name: "ZIP",
            align: Align::Left,
        },
        Column {
            name: "Label",
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
            name: "Size",
            align: Align::Right,
        },
    ];
    let rows: Vec<Vec<String>> = points
        .iter()
        .map(|point| {
            vec![
                value_str(point, "zip5"),
                value_str(point, "label"),
                format_usd(point.get("amount").and_then(Value::as_f64).unwrap_or(0.0)),
                point
                    .get("count")
                    .and_then(Value::as_i64)
                    .unwrap_or(0)
                    .to_string(),
                format!(
                    "{:.1}",
                    point.get("size").and_then(Value::as_f64).unwrap_or(0.0)
                ),
            ]
        })
        .collect();
    lines.extend(render_table(&columns, &rows, terminal_width()));

    Ok(lines.join("\n"))
}

fn context_lines(data: &Value) -> Vec<String> {
    let mut entries = Vec::new();
    let visible = data
        .get("points_visible")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    entries.push(("Points visible:", visible.to_string()));
    if let Some(count) = data.get("county_features").and_then(Value::as_i64) {
        entries.push(("County outlines:", count.to_string()));
    }
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

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::render_points;

    #[test]
    fn clusters_render_with_sizes() {
        let rendered = render_points(&json!({
            "state": "MD",
            "points_visible": true,
            "county_features": 24,
            "points": [
                {"zip5": "20850", "label": "Rockville, MD 20850", "amount": 1500.0,
                 "count": 2, "size": 22.0, "lat": 39.09, "lon": -77.15}
            ]
        }));
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("1 point clusters for MD."));
            assert!(text.contains("Rockville, MD 20850"));
            assert!(text.contains("22.0"));
            assert!(text.contains("Points visible:"));
        }
    }

    #[test]
    fn empty_layer_keeps_outline_message() {
        let rendered = render_points(&json!({
            "state": "MD",
            "points_visible": false,
            "points": [],
            "message": "No mappable awards for the current filters; the state outline still renders."
        }));
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("state outline still renders"));
            assert!(text.contains("Points visible:  false"));
        }
    }
}
