use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

pub(crate) const SNAPSHOT_HELP_COMMAND: &str = "spendmap check --help";

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `spendmap {cmd} --help` for usage."),
            None => "Run `spendmap --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn invalid_snapshot_format(message: &str, received_format: &str) -> Self {
        Self::invalid_argument_with_recovery(
            message,
            vec![
                "Provide a supported snapshot format (CSV with headers or JSON array).".to_string(),
                format!("Run `{SNAPSHOT_HELP_COMMAND}` to review accepted inputs."),
            ],
        )
        .with_data(json!({
            "received_format": received_format,
            "supported_formats": ["csv", "json_array"],
        }))
    }

    pub fn snapshot_not_found(agency: &str, window_days: u32, searched: &[String]) -> Self {
        Self::new(
            "snapshot_not_found",
            &format!(
                "No awards snapshot found for agency `{agency}` over the last {window_days} days."
            ),
            vec![
                format!(
                    "Place `{agency}_awards_last_{window_days}d.csv` (or the `.json` twin) in the data directory."
                ),
                "Pass `--data-dir <path>` or set `SPENDMAP_DATA` to point at your snapshot directory."
                    .to_string(),
                "Pick another snapshot with `--agency <slug>` and `--days <n>`.".to_string(),
            ],
        )
        .with_data(json!({
            "agency": agency,
            "window_days": window_days,
            "searched_paths": searched,
        }))
    }

    pub fn snapshot_unreadable(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "snapshot_unreadable",
            &format!("Could not read awards snapshot at `{location}`: {detail}"),
            vec![
                "Verify the snapshot file is readable and valid UTF-8.".to_string(),
                "Re-publish the snapshot and retry.".to_string(),
            ],
        )
    }

    pub fn unknown_state_code(code: &str) -> Self {
        Self::new(
            "unknown_state_code",
            &format!("`{code}` is not a recognized two-letter state code."),
            vec![
                "Use a USPS state abbreviation such as MD, CA, or DC.".to_string(),
                "Run `spendmap summary` to list states present in the snapshot.".to_string(),
            ],
        )
        .with_data(json!({
            "state": code,
        }))
    }

    pub fn state_boundary_missing(code: &str) -> Self {
        Self::new(
            "state_boundary_missing",
            &format!("No boundary data is available for `{code}`; the view was reset to national."),
            vec![
                "Place `us_states_topo.json` and `us_counties_topo.json` in the data directory."
                    .to_string(),
                "Rerun the command once boundary data is published.".to_string(),
            ],
        )
        .with_data(json!({
            "state": code,
        }))
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
