use crate::ClientResult;
use crate::commands::{SessionOptions, empty_message, load_session, snapshot_context};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{StateSummaryRow, SummaryData};
use crate::filter::{GeoFilter, Metric};
use crate::geo::fips;

pub fn run(
    psc_prefix: Option<&str>,
    naics_prefix: Option<&str>,
    metric: Metric,
    options: SessionOptions<'_>,
) -> ClientResult<SuccessEnvelope> {
    let filter = GeoFilter::new(psc_prefix, naics_prefix);
    let loaded = load_session(&options, filter.clone(), metric)?;

    let mut states: Vec<StateSummaryRow> = loaded
        .session
        .state_aggregates()
        .iter()
        .map(|(state, aggregate)| StateSummaryRow {
            state: state.clone(),
            state_name: fips::state_display_name(state).unwrap_or("").to_string(),
            amount: aggregate.amount,
            count: aggregate.count,
            value: match metric {
                Metric::Amount => aggregate.amount,
                Metric::Count => aggregate.count as f64,
            },
        })
        .collect();
    states.sort_by(|left, right| right.value.total_cmp(&left.value));

    let message = empty_message(!states.is_empty());
    let data = SummaryData {
        metric: metric.as_str().to_string(),
        psc_prefix: filter.psc_prefix().map(str::to_string),
        naics_prefix: filter.naics_prefix().map(str::to_string),
        states,
        message,
        snapshot: snapshot_context(&loaded.context, &loaded.report),
    };

    success("summary", data)
}
