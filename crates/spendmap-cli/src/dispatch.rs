use spendmap_client::commands;
use spendmap_client::commands::SessionOptions;
use spendmap_client::commands::awards::{AwardsQuery, SortField};
use spendmap_client::filter::Metric;
use spendmap_client::set_aside::SizeClassFilter;
use spendmap_client::{ClientResult, SuccessEnvelope};

use crate::cli::{Cli, Commands, SnapshotArgs};

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Summary {
            snapshot,
            filter,
            metric,
            ..
        } => commands::summary::run(
            filter.psc.as_deref(),
            filter.naics.as_deref(),
            metric_from_flag(metric),
            session_options(snapshot),
        ),
        Commands::Recipients {
            snapshot,
            filter,
            state,
            set_aside,
            limit,
            ..
        } => commands::recipients::run(
            state.as_deref(),
            filter.psc.as_deref(),
            filter.naics.as_deref(),
            size_class_from_flag(set_aside),
            *limit,
            session_options(snapshot),
        ),
        Commands::Awards {
            snapshot,
            filter,
            state,
            since,
            sort,
            asc,
            page,
            page_size,
            ..
        } => commands::awards::run(
            AwardsQuery {
                state: state.clone(),
                psc_prefix: filter.psc.clone(),
                naics_prefix: filter.naics.clone(),
                since: since.as_ref().map(|date| date.as_str().to_string()),
                sort: SortField::parse(sort).unwrap_or_default(),
                ascending: *asc,
                page: *page,
                page_size: *page_size,
            },
            session_options(snapshot),
        ),
        Commands::Points {
            snapshot,
            filter,
            state,
            ..
        } => commands::points::run(
            state,
            filter.psc.as_deref(),
            filter.naics.as_deref(),
            session_options(snapshot),
        ),
        Commands::Check { path, .. } => commands::check::run(path.clone()),
    }
}

fn session_options(snapshot: &SnapshotArgs) -> SessionOptions<'_> {
    SessionOptions {
        agency: snapshot.agency.clone(),
        days: snapshot.days,
        data_dir_override: snapshot.data_dir.as_deref(),
    }
}

fn metric_from_flag(value: &str) -> Metric {
    Metric::parse(value).unwrap_or_default()
}

fn size_class_from_flag(value: &str) -> SizeClassFilter {
    match value {
        "small" => SizeClassFilter::Small,
        "other" => SizeClassFilter::Other,
        _ => SizeClassFilter::All,
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::parse_from;

    use super::dispatch;

    #[test]
    fn check_dispatches_with_stdin_source_error_when_empty() {
        let parsed = parse_from(["spendmap", "check", "/nonexistent/snapshot.csv"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            let response = dispatch(&cli);
            assert!(response.is_err());
            if let Err(error) = response {
                assert_eq!(error.code, "invalid_argument");
            }
        }
    }

    #[test]
    fn summary_against_missing_data_dir_reports_snapshot_not_found() {
        let parsed = parse_from([
            "spendmap",
            "summary",
            "--data-dir",
            "/nonexistent/spendmap-data",
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            let response = dispatch(&cli);
            assert!(response.is_err());
            if let Err(error) = response {
                assert_eq!(error.code, "snapshot_not_found");
            }
        }
    }
}
