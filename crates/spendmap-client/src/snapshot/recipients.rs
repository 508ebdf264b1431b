use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::setup::DataContext;
use crate::snapshot::normalize::fold_header;

const RECIPIENT_NAME_KEYS: &[&str] = &["recipient name", "recipient_name", "recipient"];
const RECIPIENT_AMOUNT_KEYS: &[&str] = &["award amount", "award_amount", "total", "amount"];
const CAREERS_KEYS: &[&str] = &["careers search", "careers_search", "careers link"];

#[derive(Debug, Clone, PartialEq)]
pub struct RecipientSnapshotRow {
    pub recipient_name: String,
    pub award_amount: f64,
    pub careers_search: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipientSource {
    Enriched,
    Snapshot,
    Derived,
}

impl RecipientSource {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enriched => "enriched_snapshot",
            Self::Snapshot => "snapshot",
            Self::Derived => "derived",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecipientSnapshot {
    pub source: RecipientSource,
    pub rows: Vec<RecipientSnapshotRow>,
}

/// Companion top-recipients snapshot: the enriched file (with careers
/// links) is preferred, the plain file is the fallback, and `None` tells
/// the caller to derive recipient aggregates from the per-award data.
/// Unreadable or malformed companions are treated as absent.
pub fn load_recipient_snapshot(context: &DataContext) -> Option<RecipientSnapshot> {
    if let Some(rows) = read_recipient_csv(&context.enriched_recipients_path()) {
        return Some(RecipientSnapshot {
            source: RecipientSource::Enriched,
            rows,
        });
    }
    if let Some(rows) = read_recipient_csv(&context.recipients_path()) {
        return Some(RecipientSnapshot {
            source: RecipientSource::Snapshot,
            rows,
        });
    }
    None
}

/// Careers links keyed by recipient name, for joining onto derived
/// aggregates when filters make the snapshot totals inapplicable.
pub fn careers_links(snapshot: &RecipientSnapshot) -> BTreeMap<String, String> {
    let mut links = BTreeMap::new();
    for row in &snapshot.rows {
        if let Some(link) = &row.careers_search {
            links.insert(row.recipient_name.clone(), link.clone());
        }
    }
    links
}

fn read_recipient_csv(path: &Path) -> Option<Vec<RecipientSnapshotRow>> {
    let body = fs::read_to_string(path).ok()?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .ok()?
        .iter()
        .map(|header| fold_header(header))
        .collect();

    let name_index = find_column(&headers, RECIPIENT_NAME_KEYS)?;
    let amount_index = find_column(&headers, RECIPIENT_AMOUNT_KEYS);
    let careers_index = find_column(&headers, CAREERS_KEYS);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.ok()?;
        let name = record.get(name_index).unwrap_or("").trim().to_string();
        if name.is_empty() {
            continue;
        }

        let amount = amount_index
            .and_then(|index| record.get(index))
            .map(parse_snapshot_amount)
            .unwrap_or(0.0);
        let careers_search = careers_index
            .and_then(|index| record.get(index))
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);

        rows.push(RecipientSnapshotRow {
            recipient_name: name,
            award_amount: amount,
            careers_search,
        });
    }

    Some(rows)
}

fn find_column(headers: &[String], variants: &[&str]) -> Option<usize> {
    variants.iter().find_map(|variant| {
        headers
            .iter()
            .position(|header| header == variant)
    })
}

fn parse_snapshot_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|character| !matches!(character, '$' | ',') && !character.is_whitespace())
        .collect();
    let parsed = cleaned.parse::<f64>().unwrap_or(0.0);
    if parsed.is_finite() { parsed } else { 0.0 }
}
