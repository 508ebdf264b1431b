use chrono::NaiveDate;

use crate::award::Award;
use crate::commands::{SessionOptions, award_row, empty_message, load_session, snapshot_context};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::AwardsPageData;
use crate::filter::{GeoFilter, Metric};
use crate::geo::fips;
use crate::{ClientError, ClientResult};

pub const DEFAULT_PAGE_SIZE: usize = 50;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Date,
    Amount,
    Recipient,
}

impl SortField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Amount => "amount",
            Self::Recipient => "recipient",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "date" => Some(Self::Date),
            "amount" => Some(Self::Amount),
            "recipient" => Some(Self::Recipient),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct AwardsQuery {
    pub state: Option<String>,
    pub psc_prefix: Option<String>,
    pub naics_prefix: Option<String>,
    pub since: Option<String>,
    pub sort: SortField,
    pub ascending: bool,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

pub fn run(query: AwardsQuery, options: SessionOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let state = match &query.state {
        Some(code) => {
            let normalized = code.trim().to_uppercase();
            if !fips::is_known_state(&normalized) {
                return Err(ClientError::unknown_state_code(code));
            }
            Some(normalized)
        }
        None => None,
    };

    let since_cutoff = match query.since.as_deref() {
        Some(value) => match parse_action_date(value) {
            Some(date) => Some(date),
            None => {
                return Err(ClientError::invalid_argument_for_command(
                    "`since` must use YYYY-MM-DD format with a real calendar date.",
                    Some("awards"),
                ));
            }
        },
        None => None,
    };

    let filter = GeoFilter::new(query.psc_prefix.as_deref(), query.naics_prefix.as_deref());
    let loaded = load_session(&options, filter.clone(), Metric::Amount)?;

    // The raw table is the one surface that keeps zero and negative
    // amounts; it shares the PSC/NAICS gate with every other surface.
    let mut rows: Vec<&Award> = loaded
        .session
        .awards()
        .iter()
        .filter(|award| filter.matches(award))
        .filter(|award| match &state {
            Some(code) => award.state == *code,
            None => true,
        })
        .filter(|award| match since_cutoff {
            Some(cutoff) => award
                .action_date
                .as_deref()
                .and_then(parse_action_date)
                .map(|date| date >= cutoff)
                .unwrap_or(false),
            None => true,
        })
        .collect();

    sort_rows(&mut rows, query.sort, query.ascending);

    let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
    let page = query.page.unwrap_or(1).max(1);
    let total_rows = rows.len();
    let total_pages = total_rows.div_ceil(page_size).max(1);

    let start = (page - 1).saturating_mul(page_size).min(total_rows);
    let end = start.saturating_add(page_size).min(total_rows);
    let page_rows = rows[start..end].iter().map(|award| award_row(award)).collect();

    let message = empty_message(total_rows > 0);
    let data = AwardsPageData {
        state,
        psc_prefix: filter.psc_prefix().map(str::to_string),
        naics_prefix: filter.naics_prefix().map(str::to_string),
        since: query.since.clone(),
        sort: query.sort.as_str().to_string(),
        order: if query.ascending { "asc" } else { "desc" }.to_string(),
        page: page as i64,
        page_size: page_size as i64,
        total_rows: total_rows as i64,
        total_pages: total_pages as i64,
        rows: page_rows,
        message,
        snapshot: snapshot_context(&loaded.context, &loaded.report),
    };

    success("awards", data)
}

/// Dates in published snapshots are ISO day strings; anything else is
/// treated as undated rather than guessed at.
fn parse_action_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn sort_rows(rows: &mut [&Award], sort: SortField, ascending: bool) {
    match sort {
        SortField::Date => rows.sort_by(|left, right| {
            // Dateless (or unparseable-date) rows sink to the end in
            // either direction.
            let left_date = left.action_date.as_deref().and_then(parse_action_date);
            let right_date = right.action_date.as_deref().and_then(parse_action_date);
            match (left_date, right_date) {
                (Some(a), Some(b)) => {
                    if ascending {
                        a.cmp(&b)
                    } else {
                        b.cmp(&a)
                    }
                }
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            }
        }),
        SortField::Amount => rows.sort_by(|left, right| {
            if ascending {
                left.award_amount.total_cmp(&right.award_amount)
            } else {
                right.award_amount.total_cmp(&left.award_amount)
            }
        }),
        SortField::Recipient => rows.sort_by(|left, right| {
            if ascending {
                left.recipient_name.cmp(&right.recipient_name)
            } else {
                right.recipient_name.cmp(&left.recipient_name)
            }
        }),
    }
}
