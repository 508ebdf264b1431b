use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SnapshotContext {
    pub agency: String,
    pub window_days: u32,
    pub data_dir: String,
    pub rows_read: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StateSummaryRow {
    pub state: String,
    pub state_name: String,
    pub amount: f64,
    pub count: i64,
    /// The metric-selected value used for choropleth shading.
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub metric: String,
    pub psc_prefix: Option<String>,
    pub naics_prefix: Option<String>,
    pub states: Vec<StateSummaryRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub snapshot: SnapshotContext,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecipientRow {
    pub rank: i64,
    pub recipient_name: String,
    pub amount: f64,
    pub count: i64,
    pub size_class: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub careers_search: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecipientsData {
    pub state: Option<String>,
    pub psc_prefix: Option<String>,
    pub naics_prefix: Option<String>,
    pub set_aside: String,
    pub limit: i64,
    pub source: String,
    pub rows: Vec<RecipientRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub snapshot: SnapshotContext,
}

#[derive(Debug, Clone, Serialize)]
pub struct AwardRow {
    pub action_date: Option<String>,
    pub recipient_name: String,
    pub award_amount: f64,
    pub piid: Option<String>,
    pub state: String,
    pub pop_city: String,
    pub pop_zip5: String,
    pub psc: String,
    pub naics: String,
    pub set_aside: Option<String>,
    pub is_small_business: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AwardsPageData {
    pub state: Option<String>,
    pub psc_prefix: Option<String>,
    pub naics_prefix: Option<String>,
    pub since: Option<String>,
    pub sort: String,
    pub order: String,
    pub page: i64,
    pub page_size: i64,
    pub total_rows: i64,
    pub total_pages: i64,
    pub rows: Vec<AwardRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub snapshot: SnapshotContext,
}

#[derive(Debug, Clone, Serialize)]
pub struct PointRow {
    pub zip5: String,
    pub lat: f64,
    pub lon: f64,
    pub size: f64,
    pub label: String,
    pub amount: f64,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PointsData {
    pub state: String,
    pub psc_prefix: Option<String>,
    pub naics_prefix: Option<String>,
    pub points_visible: bool,
    pub trace_id: String,
    pub centroid_table_size: i64,
    pub county_features: i64,
    pub points: Vec<PointRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub snapshot: SnapshotContext,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckData {
    pub source: String,
    pub format: String,
    pub rows_read: i64,
    pub awards: i64,
    pub missing_state: i64,
    pub missing_recipient: i64,
    pub nonpositive_amount: i64,
    pub defaulted_amount: i64,
    pub geo_eligible: i64,
    pub states_present: Vec<String>,
}
