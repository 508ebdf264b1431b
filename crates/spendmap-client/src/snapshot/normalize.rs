use std::collections::BTreeMap;

use crate::award::Award;
use crate::snapshot::parse::{RawRow, Scalar};

/// Ordered header variants per logical field. First match against the
/// folded row wins, so adding a new source format is a data change here,
/// not a code change.
const ACTION_DATE_KEYS: &[&str] = &["action date", "action_date", "actiondate"];
const RECIPIENT_KEYS: &[&str] = &["recipient name", "recipient_name", "recipient"];
const AMOUNT_KEYS: &[&str] = &[
    "award amount",
    "award_amount",
    "transaction amount",
    "transaction_amount",
    "federal action obligation",
    "awardamount",
];
const PIID_KEYS: &[&str] = &["piid", "award id", "award_id", "awardid"];
const SET_ASIDE_KEYS: &[&str] = &[
    "type of set aside description",
    "type of set aside",
    "type_set_aside_description",
    "type_set_aside",
    "set aside",
    "set_aside",
    "contracting officer business size determination",
];
const STATE_KEYS: &[&str] = &[
    "place of performance state code",
    "pop_state_code",
    "pop state code",
    "state code",
    "state",
];
const STATE_NAME_KEYS: &[&str] = &[
    "place of performance state name",
    "pop_state_name",
    "state name",
];
const CITY_KEYS: &[&str] = &[
    "place of performance city name",
    "pop_city_name",
    "pop_city",
    "city",
];
const ZIP_KEYS: &[&str] = &[
    "place of performance zip code",
    "pop_zip5",
    "pop_zip4",
    "zip code",
    "zip",
];
const LAT_KEYS: &[&str] = &["latitude", "lat", "pop_latitude"];
const LON_KEYS: &[&str] = &["longitude", "lon", "lng", "pop_longitude"];
const PSC_KEYS: &[&str] = &[
    "product or service code (psc)",
    "product_or_service_code",
    "psc code",
    "psc",
];
const PSC_DESC_KEYS: &[&str] = &[
    "psc description",
    "product_or_service_description",
    "psc_description",
];
const NAICS_KEYS: &[&str] = &["naics code", "naics_code", "naics"];
const NAICS_DESC_KEYS: &[&str] = &["naics description", "naics_description"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub rows_read: i64,
    pub missing_state: i64,
    pub missing_recipient: i64,
    pub nonpositive_amount: i64,
    pub defaulted_amount: i64,
}

/// A row with header casing and spacing folded away, so variant lookup is
/// a plain map probe.
struct FoldedRow<'a> {
    cells: BTreeMap<String, &'a Scalar>,
}

impl<'a> FoldedRow<'a> {
    fn from_raw(row: &'a RawRow) -> Self {
        let mut cells = BTreeMap::new();
        for (key, value) in row {
            // First occurrence wins when two headers fold to the same key.
            cells.entry(fold_header(key)).or_insert(value);
        }
        Self { cells }
    }

    fn first(&self, variants: &[&str]) -> Option<&'a Scalar> {
        variants
            .iter()
            .find_map(|variant| self.cells.get(*variant).copied())
    }
}

pub fn fold_header(header: &str) -> String {
    let mut folded = String::with_capacity(header.len());
    let mut previous_space = false;
    for character in header.trim().chars() {
        if character.is_whitespace() {
            if !previous_space {
                folded.push(' ');
                previous_space = true;
            }
        } else {
            folded.extend(character.to_lowercase());
            previous_space = false;
        }
    }
    folded
}

pub fn normalize_rows(rows: &[RawRow]) -> (Vec<Award>, LoadReport) {
    let mut awards = Vec::with_capacity(rows.len());
    let mut report = LoadReport {
        rows_read: rows.len() as i64,
        ..LoadReport::default()
    };

    for row in rows {
        let award = award_from_row(row);
        if award.state.is_empty() {
            report.missing_state += 1;
        }
        if award.recipient_name.is_empty() {
            report.missing_recipient += 1;
        }
        if !award.has_positive_amount() {
            report.nonpositive_amount += 1;
        }
        if amount_was_defaulted(row) {
            report.defaulted_amount += 1;
        }
        awards.push(award);
    }

    (awards, report)
}

/// Pure row-to-award transform: same `RawRow` in, same `Award` out.
/// Every field falls back to its documented default; nothing here throws.
pub fn award_from_row(row: &RawRow) -> Award {
    let folded = FoldedRow::from_raw(row);

    let set_aside = text_field(&folded, SET_ASIDE_KEYS)
        .or_else(|| crate::set_aside::scan_set_aside_text(row));

    Award {
        action_date: text_field(&folded, ACTION_DATE_KEYS),
        recipient_name: text_field(&folded, RECIPIENT_KEYS).unwrap_or_default(),
        award_amount: number_field(&folded, AMOUNT_KEYS),
        piid: text_field(&folded, PIID_KEYS),
        set_aside,
        state: state_code(text_field(&folded, STATE_KEYS)),
        state_name: text_field(&folded, STATE_NAME_KEYS).unwrap_or_default(),
        pop_city: text_field(&folded, CITY_KEYS).unwrap_or_default(),
        pop_zip5: zip5(text_field(&folded, ZIP_KEYS)),
        lat: coordinate_field(&folded, LAT_KEYS),
        lon: coordinate_field(&folded, LON_KEYS),
        psc: text_field(&folded, PSC_KEYS).unwrap_or_default(),
        psc_desc: text_field(&folded, PSC_DESC_KEYS).unwrap_or_default(),
        naics: text_field(&folded, NAICS_KEYS).unwrap_or_default(),
        naics_desc: text_field(&folded, NAICS_DESC_KEYS).unwrap_or_default(),
    }
}

fn amount_was_defaulted(row: &RawRow) -> bool {
    let folded = FoldedRow::from_raw(row);
    match folded.first(AMOUNT_KEYS) {
        Some(scalar) => parse_amount(Some(scalar)).is_none(),
        None => true,
    }
}

fn text_field(folded: &FoldedRow<'_>, variants: &[&str]) -> Option<String> {
    let scalar = folded.first(variants)?;
    let text = match scalar {
        Scalar::Text(value) => value.trim().to_string(),
        Scalar::Number(value) => format_number_as_text(*value),
        Scalar::Null => return None,
    };
    if text.is_empty() { None } else { Some(text) }
}

fn number_field(folded: &FoldedRow<'_>, variants: &[&str]) -> f64 {
    parse_amount(folded.first(variants)).unwrap_or(0.0)
}

fn coordinate_field(folded: &FoldedRow<'_>, variants: &[&str]) -> Option<f64> {
    parse_amount(folded.first(variants))
}

/// Tolerant amount parsing: strips `$`, thousands separators, and
/// whitespace. `None` for anything that is not a finite number.
fn parse_amount(scalar: Option<&Scalar>) -> Option<f64> {
    let scalar = scalar?;
    let value = match scalar {
        Scalar::Number(value) => *value,
        Scalar::Text(text) => {
            let cleaned = text
                .chars()
                .filter(|character| !matches!(character, '$' | ',') && !character.is_whitespace())
                .collect::<String>();
            if cleaned.is_empty() {
                return None;
            }
            cleaned.parse::<f64>().ok()?
        }
        Scalar::Null => return None,
    };

    if value.is_finite() { Some(value) } else { None }
}

fn format_number_as_text(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

fn state_code(raw: Option<String>) -> String {
    let Some(value) = raw else {
        return String::new();
    };
    value
        .trim()
        .chars()
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

fn zip5(raw: Option<String>) -> String {
    let Some(value) = raw else {
        return String::new();
    };
    value.trim().chars().take(5).collect()
}
