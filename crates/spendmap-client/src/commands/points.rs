use crate::ClientResult;
use crate::commands::{SessionOptions, load_session, snapshot_context};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{PointRow, PointsData};
use crate::filter::{GeoFilter, Metric};
use crate::geo::fips;

pub fn run(
    state: &str,
    psc_prefix: Option<&str>,
    naics_prefix: Option<&str>,
    options: SessionOptions<'_>,
) -> ClientResult<SuccessEnvelope> {
    let filter = GeoFilter::new(psc_prefix, naics_prefix);
    let loaded = load_session(&options, filter.clone(), Metric::Amount)?;
    let mut session = loaded.session;

    session.on_state_selected(state)?;

    let selected = session
        .drill_state()
        .selected_state
        .clone()
        .unwrap_or_else(|| state.trim().to_uppercase());
    let state_fips = fips::abbr_to_fips(&selected).unwrap_or("");

    let (trace_id, points): (String, Vec<PointRow>) = match session.point_layer() {
        Some(layer) => (
            layer.trace_id.clone(),
            layer
                .points
                .iter()
                .map(|point| PointRow {
                    zip5: point.zip5.clone(),
                    lat: point.lat,
                    lon: point.lon,
                    size: point.size,
                    label: point.label.clone(),
                    amount: point.amount,
                    count: point.count,
                })
                .collect(),
        ),
        None => (String::new(), Vec::new()),
    };

    let message = if points.is_empty() {
        Some(
            "No mappable awards for the current filters; the state outline still renders."
                .to_string(),
        )
    } else {
        None
    };

    let data = PointsData {
        state: selected,
        psc_prefix: filter.psc_prefix().map(str::to_string),
        naics_prefix: filter.naics_prefix().map(str::to_string),
        points_visible: session.drill_state().points_visible,
        trace_id,
        centroid_table_size: session.geo().centroids().len() as i64,
        county_features: session.geo().boundaries().county_count(state_fips) as i64,
        points,
        message,
        snapshot: snapshot_context(&loaded.context, &loaded.report),
    };

    success("points", data)
}
