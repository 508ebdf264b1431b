pub mod input;
pub mod normalize;
pub mod parse;
pub mod recipients;

use std::fs;

use crate::award::Award;
use crate::setup::DataContext;
use crate::snapshot::normalize::LoadReport;
use crate::{ClientError, ClientResult};

pub(crate) use input::resolve_source;

/// Loads and normalizes the primary awards snapshot. The CSV is the
/// canonical artifact; the JSON twin is accepted when the CSV is absent.
/// This is the one data source whose absence is a visible failure;
/// without it no view is meaningful.
pub fn load_awards(context: &DataContext) -> ClientResult<(Vec<Award>, LoadReport)> {
    let csv_path = context.awards_csv_path();
    let json_path = context.awards_json_path();

    let content = if csv_path.is_file() {
        fs::read_to_string(&csv_path)
            .map_err(|error| ClientError::snapshot_unreadable(&csv_path, &error.to_string()))?
    } else if json_path.is_file() {
        fs::read_to_string(&json_path)
            .map_err(|error| ClientError::snapshot_unreadable(&json_path, &error.to_string()))?
    } else {
        let searched = vec![
            csv_path.display().to_string(),
            json_path.display().to_string(),
        ];
        return Err(ClientError::snapshot_not_found(
            &context.agency,
            context.window_days,
            &searched,
        ));
    };

    let source = parse::parse_source(&content)?;
    Ok(normalize::normalize_rows(&source.rows))
}
