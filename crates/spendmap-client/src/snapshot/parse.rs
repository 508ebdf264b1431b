use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::SNAPSHOT_HELP_COMMAND;
use crate::{ClientError, ClientResult};

/// One cell as delivered by the tabular source. CSV cells arrive as
/// `Text`; JSON snapshots may carry real numbers and nulls.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Number(f64),
    Null,
}

impl Scalar {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            Self::Number(_) | Self::Null => None,
        }
    }
}

/// An untyped source row: header string to cell value. Headers keep their
/// original casing and spacing; normalization resolves them downstream.
pub type RawRow = BTreeMap<String, Scalar>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    JsonArray,
}

impl SourceFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::JsonArray => "json_array",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParsedSource {
    pub format: SourceFormat,
    pub rows: Vec<RawRow>,
}

pub fn parse_source(content: &str) -> ClientResult<ParsedSource> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(invalid_source_error("Snapshot source is empty."));
    }

    if looks_like_ndjson(trimmed) {
        return Err(ClientError::invalid_snapshot_format(
            "NDJSON is not supported. Provide a CSV with headers or a JSON array.",
            "ndjson",
        ));
    }

    if trimmed.starts_with('[') {
        return parse_json_array(trimmed);
    }

    if looks_like_csv(trimmed) {
        return parse_csv(trimmed);
    }

    if serde_json::from_str::<Value>(trimmed).is_ok() {
        return Err(ClientError::invalid_snapshot_format(
            "JSON input must be a top-level array of award objects.",
            "json_non_array",
        ));
    }

    Err(ClientError::invalid_snapshot_format(
        "Unsupported snapshot format. Provide a CSV with headers or a JSON array.",
        "unknown",
    ))
}

fn parse_json_array(content: &str) -> ClientResult<ParsedSource> {
    let parsed = serde_json::from_str::<Value>(content)
        .map_err(|_| invalid_source_error("Invalid JSON input. Provide a valid JSON array."))?;

    let Some(items) = parsed.as_array() else {
        return Err(invalid_source_error(
            "JSON input must be a top-level array of award objects.",
        ));
    };

    let mut rows = Vec::new();
    for item in items {
        let Some(object) = item.as_object() else {
            return Err(invalid_source_error(
                "JSON array entries must all be objects with award fields.",
            ));
        };

        let mut row = RawRow::new();
        for (key, value) in object {
            row.insert(key.clone(), scalar_from_json(value));
        }
        rows.push(row);
    }

    Ok(ParsedSource {
        format: SourceFormat::JsonArray,
        rows,
    })
}

fn parse_csv(content: &str) -> ClientResult<ParsedSource> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|_| invalid_source_error("CSV header row is missing or unreadable."))?
        .iter()
        .map(|value| value.trim().to_string())
        .collect::<Vec<String>>();

    let mut rows = Vec::new();
    for result_row in reader.records() {
        let record =
            result_row.map_err(|_| invalid_source_error("CSV rows are malformed or not UTF-8."))?;

        let mut row = RawRow::new();
        for (index, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let cell = record.get(index).unwrap_or("");
            row.insert(header.clone(), Scalar::Text(cell.to_string()));
        }
        rows.push(row);
    }

    Ok(ParsedSource {
        format: SourceFormat::Csv,
        rows,
    })
}

fn scalar_from_json(value: &Value) -> Scalar {
    if value.is_null() {
        return Scalar::Null;
    }
    if let Some(number) = value.as_f64() {
        return Scalar::Number(number);
    }
    if let Some(text) = value.as_str() {
        return Scalar::Text(text.to_string());
    }
    Scalar::Text(value.to_string())
}

fn looks_like_ndjson(content: &str) -> bool {
    let lines = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<&str>>();
    if lines.len() < 2 {
        return false;
    }

    lines.iter().all(|line| {
        let parsed = serde_json::from_str::<Value>(line.trim());
        if let Ok(value) = parsed {
            return value.is_object();
        }
        false
    })
}

fn looks_like_csv(content: &str) -> bool {
    let Some(first_line) = content.lines().find(|line| !line.trim().is_empty()) else {
        return false;
    };
    first_line.contains(',')
}

fn invalid_source_error(message: &str) -> ClientError {
    ClientError::invalid_argument_with_recovery(
        message,
        vec![
            "Provide CSV or JSON-array snapshot input via path or stdin.".to_string(),
            format!("Run `{SNAPSHOT_HELP_COMMAND}` for accepted formats."),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::{Scalar, SourceFormat, parse_source};

    #[test]
    fn csv_rows_keep_original_headers() {
        let parsed = parse_source("Recipient Name,Award Amount\nACME,100\n");
        assert!(parsed.is_ok());
        if let Ok(source) = parsed {
            assert_eq!(source.format, SourceFormat::Csv);
            assert_eq!(source.rows.len(), 1);
            assert_eq!(
                source.rows[0].get("Recipient Name"),
                Some(&Scalar::Text("ACME".to_string()))
            );
        }
    }

    #[test]
    fn json_array_preserves_numbers_and_nulls() {
        let parsed = parse_source(r#"[{"Award Amount": 12.5, "Piid": null}]"#);
        assert!(parsed.is_ok());
        if let Ok(source) = parsed {
            assert_eq!(source.format, SourceFormat::JsonArray);
            assert_eq!(
                source.rows[0].get("Award Amount"),
                Some(&Scalar::Number(12.5))
            );
            assert_eq!(source.rows[0].get("Piid"), Some(&Scalar::Null));
        }
    }

    #[test]
    fn ndjson_is_rejected_with_format_hint() {
        let parsed = parse_source("{\"a\": 1}\n{\"a\": 2}\n");
        assert!(parsed.is_err());
        if let Err(error) = parsed {
            assert_eq!(error.code, "invalid_argument");
        }
    }

    #[test]
    fn short_csv_rows_default_missing_cells() {
        let parsed = parse_source("State,Amount,Extra\nMD,100\n");
        assert!(parsed.is_ok());
        if let Ok(source) = parsed {
            assert_eq!(
                source.rows[0].get("Extra"),
                Some(&Scalar::Text(String::new()))
            );
        }
    }

    #[test]
    fn non_array_json_is_rejected() {
        let parsed = parse_source(r#"{"results": []}"#);
        assert!(parsed.is_err());
    }
}
