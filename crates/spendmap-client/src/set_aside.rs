use std::collections::BTreeSet;

use crate::award::Award;
use crate::snapshot::parse::RawRow;

/// Any single match classifies the award; the list order never changes
/// the boolean result.
const SET_ASIDE_PATTERNS: &[&str] = &[
    "8(a)",
    "8a",
    "small business",
    "sba",
    "sdb",
    "wosb",
    "edwosb",
    "women-owned",
    "hubzone",
    "service-disabled",
    "veteran-owned",
];

/// Header substrings that mark a column as possibly carrying set-aside or
/// business-size text when none of the known variants are present.
const SET_ASIDE_SCAN_HINTS: &[&str] = &["set aside", "set_aside", "business", "category"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Small,
    Other,
}

impl SizeClass {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "8(a) / Small",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClassFilter {
    All,
    Small,
    Other,
}

impl SizeClassFilter {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Small => "small",
            Self::Other => "other",
        }
    }

    pub fn admits(self, class: SizeClass) -> bool {
        match self {
            Self::All => true,
            Self::Small => class == SizeClass::Small,
            Self::Other => class == SizeClass::Other,
        }
    }
}

/// Total and order-independent: absent or empty text is never small
/// business; any single pattern hit is sufficient.
pub fn is_small_business_set_aside(text: Option<&str>) -> bool {
    let Some(value) = text else {
        return false;
    };
    let folded = value.to_lowercase();
    if folded.trim().is_empty() {
        return false;
    }
    SET_ASIDE_PATTERNS
        .iter()
        .any(|pattern| folded.contains(pattern))
}

pub fn award_size_class(award: &Award) -> SizeClass {
    if is_small_business_set_aside(award.set_aside.as_deref()) {
        SizeClass::Small
    } else {
        SizeClass::Other
    }
}

/// Best-guess set-aside text for rows whose headers match none of the
/// known variants: every loosely-matching column is collected so a hit in
/// any of them classifies the row.
pub fn scan_set_aside_text(row: &RawRow) -> Option<String> {
    let mut pieces = Vec::new();
    for (header, cell) in row {
        let folded = header.to_lowercase();
        if !SET_ASIDE_SCAN_HINTS.iter().any(|hint| folded.contains(hint)) {
            continue;
        }
        if let Some(text) = cell.as_text() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                pieces.push(trimmed.to_string());
            }
        }
    }

    if pieces.is_empty() {
        None
    } else {
        Some(pieces.join(" | "))
    }
}

/// Recipient-level rollup: a recipient is small/8(a) when ANY of its
/// awards in the window classifies true.
pub fn small_recipient_rollup(awards: &[Award]) -> BTreeSet<String> {
    let mut recipients = BTreeSet::new();
    for award in awards {
        if award.recipient_name.is_empty() {
            continue;
        }
        if is_small_business_set_aside(award.set_aside.as_deref()) {
            recipients.insert(award.recipient_name.clone());
        }
    }
    recipients
}

pub fn recipient_size_class(name: &str, small_recipients: &BTreeSet<String>) -> SizeClass {
    if small_recipients.contains(name) {
        SizeClass::Small
    } else {
        SizeClass::Other
    }
}
