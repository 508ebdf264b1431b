use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoDate(pub String);

impl IsoDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn parse_iso_date(value: &str) -> Result<IsoDate, String> {
    if value.len() != 10 {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return Err("date must use YYYY-MM-DD format".to_string());
        }
    }

    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        return Err("date must use valid calendar values".to_string());
    }

    Ok(IsoDate(value.to_string()))
}

pub fn parse_state_code(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.len() != 2 || !trimmed.chars().all(|character| character.is_ascii_alphabetic()) {
        return Err("state must be a two-letter USPS code such as MD or CA".to_string());
    }
    Ok(trimmed.to_uppercase())
}

pub fn parse_metric(value: &str) -> Result<String, String> {
    match value {
        "amount" | "count" => Ok(value.to_string()),
        _ => Err("metric must be one of: amount, count".to_string()),
    }
}

pub fn parse_sort_field(value: &str) -> Result<String, String> {
    match value {
        "date" | "amount" | "recipient" => Ok(value.to_string()),
        _ => Err("sort must be one of: date, amount, recipient".to_string()),
    }
}

pub fn parse_size_class(value: &str) -> Result<String, String> {
    match value {
        "all" | "small" | "other" => Ok(value.to_string()),
        _ => Err("set-aside must be one of: all, small, other".to_string()),
    }
}

/// Extended help shown after `spendmap check --help`.
pub const CHECK_AFTER_HELP: &str = "\
How snapshots work:
  spendmap reads published award snapshot files from a data directory;
  it never fetches from the network itself. The fetcher publishes one
  awards file per agency and window, plus optional companions:

    <agency>_awards_last_<days>d.csv            awards snapshot (canonical)
    <agency>_awards_last_<days>d.json           JSON-array twin, used when no CSV
    <agency>_top_recipients_last_<days>d.csv    companion recipient totals
    ..._top_recipients_last_<days>d_enriched.csv  with careers links
    zip_centroids.json                          ZIP5 -> {lat, lon} lookup
    us_states_topo.json / us_counties_topo.json boundary topology

Accepted formats for `check`:
  CSV  — one header row; header casing and spacing are not significant
  JSON — one top-level array of award objects

  <path> is a local file path. To read stdin explicitly, use `-`.
  Example: cat snapshot.csv | spendmap check -

Column detection (best effort, first match wins):
  Recipient Name / recipient_name
  Award Amount / Transaction Amount / Federal Action Obligation
  Action Date / action_date
  Place Of Performance State Code / pop_state_code / state
  Place Of Performance ZIP Code / pop_zip5
  Product Or Service Code (Psc) / product_or_service_code / psc
  Naics Code / naics_code
  Type Of Set Aside [Description] / set_aside, plus a loose scan of any
  column mentioning set aside, business, or category

Field defaults (rows are never rejected):
  unparseable amounts     -> 0
  missing recipient/state -> empty string
  missing dates           -> null
  Rows with zero or negative amounts stay in the awards table but are
  excluded from maps, charts, and recipient rankings.
";

#[derive(Debug, Parser)]
#[command(
    name = "spendmap",
    version,
    about = "federal contract award map explorer",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Args)]
pub struct SnapshotArgs {
    /// Agency slug baked into the snapshot filename (default: nih)
    #[arg(long)]
    pub agency: Option<String>,
    /// Snapshot window in days baked into the filename (default: 90)
    #[arg(long)]
    pub days: Option<u32>,
    /// Data directory holding published snapshots (default: $SPENDMAP_DATA, then ./data)
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct FilterArgs {
    /// PSC code prefix filter (case-insensitive)
    #[arg(long, value_name = "PREFIX")]
    pub psc: Option<String>,
    /// NAICS code prefix filter (exact digits)
    #[arg(long, value_name = "PREFIX")]
    pub naics: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Per-state award totals, the choropleth input
    Summary {
        #[command(flatten)]
        snapshot: SnapshotArgs,
        #[command(flatten)]
        filter: FilterArgs,
        /// Which metric drives choropleth shading
        #[arg(long, value_parser = parse_metric, default_value = "amount")]
        metric: String,
        /// Emit structured JSON output for machine parsing
        #[arg(long)]
        json: bool,
    },
    /// Ranked recipients, nationally or within one state
    Recipients {
        #[command(flatten)]
        snapshot: SnapshotArgs,
        #[command(flatten)]
        filter: FilterArgs,
        /// Drill into one state (two-letter USPS code)
        #[arg(long, value_parser = parse_state_code)]
        state: Option<String>,
        /// Restrict to a size class: all, small, or other
        #[arg(long = "set-aside", value_parser = parse_size_class, default_value = "all")]
        set_aside: String,
        /// Maximum recipients returned (default 100)
        #[arg(long)]
        limit: Option<usize>,
        /// Emit structured JSON output for machine parsing
        #[arg(long)]
        json: bool,
    },
    /// The raw awards table, paged and sortable
    Awards {
        #[command(flatten)]
        snapshot: SnapshotArgs,
        #[command(flatten)]
        filter: FilterArgs,
        /// Restrict to one state (two-letter USPS code)
        #[arg(long, value_parser = parse_state_code)]
        state: Option<String>,
        /// Keep only awards dated on or after this day (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        since: Option<IsoDate>,
        /// Sort column: date, amount, or recipient
        #[arg(long, value_parser = parse_sort_field, default_value = "date")]
        sort: String,
        /// Sort ascending instead of descending
        #[arg(long)]
        asc: bool,
        /// Page number, starting at 1
        #[arg(long)]
        page: Option<usize>,
        /// Rows per page (default 50)
        #[arg(long = "page-size")]
        page_size: Option<usize>,
        /// Emit structured JSON output for machine parsing
        #[arg(long)]
        json: bool,
    },
    /// ZIP-cluster point layer for one state's drill-down view
    Points {
        #[command(flatten)]
        snapshot: SnapshotArgs,
        #[command(flatten)]
        filter: FilterArgs,
        /// State to drill into (two-letter USPS code)
        #[arg(long, value_parser = parse_state_code)]
        state: String,
        /// Emit structured JSON output for machine parsing
        #[arg(long)]
        json: bool,
    },
    /// Validate a snapshot file and report what the dashboard would load
    #[command(after_long_help = CHECK_AFTER_HELP)]
    Check {
        /// Path to a snapshot file (use `-` for stdin)
        path: Option<String>,
        /// Emit structured JSON output for machine parsing
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}
