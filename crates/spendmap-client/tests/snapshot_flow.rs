use serde_json::Value;
use spendmap_client::commands::awards::AwardsQuery;
use spendmap_client::commands::{self, SessionOptions};
use spendmap_client::contracts::envelope::failure_from_error;
use spendmap_client::filter::Metric;
use spendmap_client::set_aside::SizeClassFilter;
use tempfile::tempdir;

#[path = "support/testkit.rs"]
mod testkit;

fn options(dir: &std::path::Path) -> SessionOptions<'_> {
    SessionOptions {
        agency: None,
        days: None,
        data_dir_override: Some(dir),
    }
}

#[test]
fn summary_aggregates_published_snapshot() {
    let dir = tempdir();
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        testkit::seed_data_dir(dir.path());

        let result = commands::summary::run(None, None, Metric::Amount, options(dir.path()));
        assert!(result.is_ok());
        if let Ok(envelope) = result {
            let states = envelope.data["states"].as_array().cloned().unwrap_or_default();
            // DELTA GROUP has no state and the de-obligation is negative:
            // exactly MD and CA survive.
            assert_eq!(states.len(), 2);
            assert_eq!(states[0]["state"], Value::String("CA".to_string()));
            assert_eq!(states[0]["amount"], Value::from(2000.0));
            assert_eq!(states[1]["state"], Value::String("MD".to_string()));
            assert_eq!(states[1]["amount"], Value::from(1500.0));
            assert_eq!(states[1]["count"], Value::from(2));
        }
    }
}

#[test]
fn summary_psc_filter_matches_contract_scenario() {
    let dir = tempdir();
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        testkit::seed_data_dir(dir.path());

        let result = commands::summary::run(Some("R"), None, Metric::Amount, options(dir.path()));
        assert!(result.is_ok());
        if let Ok(envelope) = result {
            let states = envelope.data["states"].as_array().cloned().unwrap_or_default();
            assert_eq!(states.len(), 2);
            for row in &states {
                let state = row["state"].as_str().unwrap_or("");
                match state {
                    "MD" => {
                        assert_eq!(row["amount"], Value::from(1000.0));
                        assert_eq!(row["count"], Value::from(1));
                    }
                    "CA" => {
                        assert_eq!(row["amount"], Value::from(2000.0));
                        assert_eq!(row["count"], Value::from(1));
                    }
                    other => panic!("unexpected state {other}"),
                }
            }
        }
    }
}

#[test]
fn summary_count_metric_swaps_choropleth_value() {
    let dir = tempdir();
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        testkit::seed_data_dir(dir.path());

        let result = commands::summary::run(None, None, Metric::Count, options(dir.path()));
        assert!(result.is_ok());
        if let Ok(envelope) = result {
            let states = envelope.data["states"].as_array().cloned().unwrap_or_default();
            // MD has two positive awards to CA's one, so count ordering
            // flips the ranking.
            assert_eq!(states[0]["state"], Value::String("MD".to_string()));
            assert_eq!(states[0]["value"], Value::from(2.0));
            // Amount is still computed alongside the selected metric.
            assert_eq!(states[0]["amount"], Value::from(1500.0));
        }
    }
}

#[test]
fn missing_snapshot_is_the_one_visible_failure() {
    let dir = tempdir();
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        let result = commands::summary::run(None, None, Metric::Amount, options(dir.path()));
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "snapshot_not_found");
            assert!(!error.recovery_steps.is_empty());

            let envelope = failure_from_error(&error);
            assert!(!envelope.ok);
            assert_eq!(envelope.error.code, "snapshot_not_found");
        }
    }
}

#[test]
fn json_twin_is_accepted_when_csv_is_absent() {
    let dir = tempdir();
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        testkit::write_file(
            &dir.path().join("nih_awards_last_90d.json"),
            r#"[
  {"Recipient Name": "ACME", "Award Amount": 1000, "Place Of Performance State Code": "MD"},
  {"Recipient Name": "BETA", "Award Amount": 400.5, "Place Of Performance State Code": "VA"}
]"#,
        );

        let result = commands::summary::run(None, None, Metric::Amount, options(dir.path()));
        assert!(result.is_ok());
        if let Ok(envelope) = result {
            let states = envelope.data["states"].as_array().cloned().unwrap_or_default();
            assert_eq!(states.len(), 2);
        }
    }
}

#[test]
fn empty_filter_result_reports_no_data_not_an_error() {
    let dir = tempdir();
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        testkit::seed_data_dir(dir.path());

        let result = commands::summary::run(Some("ZZZ"), None, Metric::Amount, options(dir.path()));
        assert!(result.is_ok());
        if let Ok(envelope) = result {
            assert_eq!(
                envelope.data["states"].as_array().map(Vec::len),
                Some(0)
            );
            assert_eq!(
                envelope.data["message"],
                Value::String("No awards match the current filters.".to_string())
            );
        }
    }
}

#[test]
fn recipients_prefer_the_enriched_companion_snapshot() {
    let dir = tempdir();
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        testkit::seed_data_dir_with_recipients(dir.path());

        let result = commands::recipients::run(
            None,
            None,
            None,
            SizeClassFilter::All,
            None,
            options(dir.path()),
        );
        assert!(result.is_ok());
        if let Ok(envelope) = result {
            assert_eq!(
                envelope.data["source"],
                Value::String("enriched_snapshot".to_string())
            );
            let rows = envelope.data["rows"].as_array().cloned().unwrap_or_default();
            assert_eq!(rows[0]["recipient_name"], Value::String("GAMMA CORP".to_string()));
            assert_eq!(
                rows[0]["careers_search"],
                Value::String("https://search.example.test/gamma-corp".to_string())
            );
        }
    }
}

#[test]
fn filtered_recipients_fall_back_to_derived_aggregates() {
    let dir = tempdir();
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        testkit::seed_data_dir_with_recipients(dir.path());

        let result = commands::recipients::run(
            None,
            Some("R"),
            None,
            SizeClassFilter::All,
            None,
            options(dir.path()),
        );
        assert!(result.is_ok());
        if let Ok(envelope) = result {
            assert_eq!(envelope.data["source"], Value::String("derived".to_string()));
            let rows = envelope.data["rows"].as_array().cloned().unwrap_or_default();
            // BETA LABS is B100-only and must disappear under the R filter.
            assert!(rows.iter().all(|row| row["recipient_name"] != "BETA LABS"));
            // Careers links still join onto derived rows by name.
            assert_eq!(
                rows[0]["careers_search"],
                Value::String("https://search.example.test/gamma-corp".to_string())
            );
        }
    }
}

#[test]
fn set_aside_class_filters_the_recipient_rollup() {
    let dir = tempdir();
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        testkit::seed_data_dir(dir.path());

        let small = commands::recipients::run(
            None,
            None,
            None,
            SizeClassFilter::Small,
            None,
            options(dir.path()),
        );
        assert!(small.is_ok());
        if let Ok(envelope) = small {
            let rows = envelope.data["rows"].as_array().cloned().unwrap_or_default();
            assert_eq!(rows.len(), 1);
            assert_eq!(
                rows[0]["recipient_name"],
                Value::String("ACME BIOSCIENCES".to_string())
            );
            assert_eq!(
                rows[0]["size_class"],
                Value::String("8(a) / Small".to_string())
            );
        }

        let other = commands::recipients::run(
            None,
            None,
            None,
            SizeClassFilter::Other,
            None,
            options(dir.path()),
        );
        assert!(other.is_ok());
        if let Ok(envelope) = other {
            let rows = envelope.data["rows"].as_array().cloned().unwrap_or_default();
            assert!(
                rows.iter()
                    .all(|row| row["size_class"] == Value::String("Other".to_string()))
            );
        }
    }
}

#[test]
fn awards_table_keeps_deobligations_and_pages() {
    let dir = tempdir();
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        testkit::seed_data_dir(dir.path());

        let result = commands::awards::run(
            AwardsQuery {
                page_size: Some(2),
                ..AwardsQuery::default()
            },
            options(dir.path()),
        );
        assert!(result.is_ok());
        if let Ok(envelope) = result {
            assert_eq!(envelope.data["total_rows"], Value::from(5));
            assert_eq!(envelope.data["total_pages"], Value::from(3));
            assert_eq!(envelope.data["page_size"], Value::from(2));
            let rows = envelope.data["rows"].as_array().cloned().unwrap_or_default();
            assert_eq!(rows.len(), 2);
            // Default sort is date descending.
            assert_eq!(rows[0]["action_date"], Value::String("2026-05-03".to_string()));
        }

        let negatives = commands::awards::run(
            AwardsQuery {
                sort: spendmap_client::commands::awards::SortField::Amount,
                ascending: true,
                ..AwardsQuery::default()
            },
            options(dir.path()),
        );
        assert!(negatives.is_ok());
        if let Ok(envelope) = negatives {
            let rows = envelope.data["rows"].as_array().cloned().unwrap_or_default();
            assert_eq!(rows[0]["award_amount"], Value::from(-250.0));
        }
    }
}

#[test]
fn awards_since_filter_drops_older_rows() {
    let dir = tempdir();
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        testkit::seed_data_dir(dir.path());

        let result = commands::awards::run(
            AwardsQuery {
                since: Some("2026-05-01".to_string()),
                ..AwardsQuery::default()
            },
            options(dir.path()),
        );
        assert!(result.is_ok());
        if let Ok(envelope) = result {
            assert_eq!(envelope.data["total_rows"], Value::from(3));
        }
    }
}

#[test]
fn check_reports_normalization_counters() {
    let dir = tempdir();
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        let path = dir.path().join("draft_snapshot.csv");
        testkit::write_file(&path, testkit::AWARDS_CSV);

        let result = commands::check::run_with_stdin(Some(path.display().to_string()), None);
        assert!(result.is_ok());
        if let Ok(envelope) = result {
            assert_eq!(envelope.data["format"], Value::String("csv".to_string()));
            assert_eq!(envelope.data["rows_read"], Value::from(5));
            assert_eq!(envelope.data["awards"], Value::from(5));
            assert_eq!(envelope.data["missing_state"], Value::from(1));
            assert_eq!(envelope.data["nonpositive_amount"], Value::from(1));
            assert_eq!(envelope.data["geo_eligible"], Value::from(3));
            let states = envelope.data["states_present"].as_array().cloned().unwrap_or_default();
            assert_eq!(states, vec![Value::from("CA"), Value::from("MD")]);
        }
    }
}

#[test]
fn check_accepts_stdin_source() {
    let result = commands::check::run_with_stdin(
        Some("-".to_string()),
        Some("Recipient Name,Award Amount\nACME,100\n".to_string()),
    );
    assert!(result.is_ok());
    if let Ok(envelope) = result {
        assert_eq!(envelope.data["source"], Value::String("stdin".to_string()));
        assert_eq!(envelope.data["rows_read"], Value::from(1));
    }
}
