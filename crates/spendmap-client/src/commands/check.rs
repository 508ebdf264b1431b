use crate::ClientResult;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::CheckData;
use crate::snapshot::{self, normalize, parse};

/// Dry-runs normalization over any snapshot file (or stdin) and reports
/// what the dashboard would make of it, without touching session state.
pub fn run(path: Option<String>) -> ClientResult<SuccessEnvelope> {
    run_with_stdin(path, None)
}

#[doc(hidden)]
pub fn run_with_stdin(
    path: Option<String>,
    stdin_override: Option<String>,
) -> ClientResult<SuccessEnvelope> {
    let resolved = snapshot::resolve_source(path, stdin_override)?;
    let source = parse::parse_source(&resolved.content)?;
    let (awards, report) = normalize::normalize_rows(&source.rows);

    let mut states_present: Vec<String> = awards
        .iter()
        .filter(|award| award.geo_eligible())
        .map(|award| award.state.clone())
        .collect();
    states_present.sort();
    states_present.dedup();

    let geo_eligible = awards.iter().filter(|award| award.geo_eligible()).count() as i64;

    let data = CheckData {
        source: resolved
            .source_ref
            .unwrap_or_else(|| resolved.source_kind.as_str().to_string()),
        format: source.format.as_str().to_string(),
        rows_read: report.rows_read,
        awards: awards.len() as i64,
        missing_state: report.missing_state,
        missing_recipient: report.missing_recipient,
        nonpositive_amount: report.nonpositive_amount,
        defaulted_amount: report.defaulted_amount,
        geo_eligible,
        states_present,
    };

    success("check", data)
}
