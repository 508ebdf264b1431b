use std::collections::BTreeMap;

use crate::ClientResult;
use crate::aggregate::{DEFAULT_RECIPIENT_LIMIT, RecipientAggregate};
use crate::commands::{SessionOptions, empty_message, load_session, snapshot_context};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{RecipientRow, RecipientsData};
use crate::filter::{GeoFilter, Metric};
use crate::set_aside::{SizeClassFilter, recipient_size_class, small_recipient_rollup};
use crate::snapshot::recipients::{RecipientSource, careers_links, load_recipient_snapshot};

pub fn run(
    state: Option<&str>,
    psc_prefix: Option<&str>,
    naics_prefix: Option<&str>,
    size_class: SizeClassFilter,
    limit: Option<usize>,
    options: SessionOptions<'_>,
) -> ClientResult<SuccessEnvelope> {
    let limit = limit.unwrap_or(DEFAULT_RECIPIENT_LIMIT);
    let filter = GeoFilter::new(psc_prefix, naics_prefix);

    // Class filtering happens after ranking, so rank over an uncapped
    // pool whenever a class is selected and truncate at the end.
    let pool = if size_class == SizeClassFilter::All {
        limit
    } else {
        usize::MAX
    };

    let loaded = load_session(&options, filter.clone(), Metric::Amount)?;
    let mut session = loaded.session.with_recipient_limit(pool);
    if let Some(code) = state {
        session.on_state_selected(code)?;
    }

    let small_recipients = small_recipient_rollup(session.awards());
    let companion = load_recipient_snapshot(&loaded.context);
    let links = companion
        .as_ref()
        .map(careers_links)
        .unwrap_or_default();

    // The published companion snapshot carries national, unfiltered
    // totals; it is preferred exactly when those are what was asked for.
    let snapshot_applies = state.is_none() && filter.is_empty();
    let (source, ranked) = match (&companion, snapshot_applies) {
        (Some(snapshot), true) => {
            let counts: BTreeMap<&str, i64> = session
                .top_recipients()
                .iter()
                .map(|row| (row.name.as_str(), row.count))
                .collect();
            let mut rows: Vec<RecipientAggregate> = snapshot
                .rows
                .iter()
                .map(|row| RecipientAggregate {
                    name: row.recipient_name.clone(),
                    amount: row.award_amount,
                    count: counts.get(row.recipient_name.as_str()).copied().unwrap_or(0),
                })
                .collect();
            rows.sort_by(|left, right| {
                right
                    .amount
                    .total_cmp(&left.amount)
                    .then_with(|| right.count.cmp(&left.count))
            });
            (snapshot.source, rows)
        }
        _ => (RecipientSource::Derived, session.top_recipients().to_vec()),
    };

    let mut rows: Vec<RecipientRow> = Vec::new();
    for aggregate in ranked {
        let class = recipient_size_class(&aggregate.name, &small_recipients);
        if !size_class.admits(class) {
            continue;
        }
        if rows.len() == limit {
            break;
        }
        rows.push(RecipientRow {
            rank: rows.len() as i64 + 1,
            recipient_name: aggregate.name.clone(),
            amount: aggregate.amount,
            count: aggregate.count,
            size_class: class.as_str().to_string(),
            careers_search: links.get(&aggregate.name).cloned(),
        });
    }

    let message = empty_message(!rows.is_empty());
    let data = RecipientsData {
        state: session.drill_state().selected_state.clone(),
        psc_prefix: filter.psc_prefix().map(str::to_string),
        naics_prefix: filter.naics_prefix().map(str::to_string),
        set_aside: size_class.as_str().to_string(),
        limit: limit as i64,
        source: source.as_str().to_string(),
        rows,
        message,
        snapshot: snapshot_context(&loaded.context, &loaded.report),
    };

    success("recipients", data)
}
