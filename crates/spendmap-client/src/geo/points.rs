use std::collections::HashMap;

use ulid::Ulid;

use crate::award::Award;
use crate::filter::GeoFilter;
use crate::geo::centroids::ZipCentroids;
use crate::geo::markers::{MAX_MARKER_SIZE, MIN_MARKER_SIZE, MarkerScale};

/// One ZIP-level cluster of awards, positioned at the resolved centroid
/// and sized by total obligated amount.
#[derive(Debug, Clone, PartialEq)]
pub struct AwardPoint {
    pub zip5: String,
    pub lat: f64,
    pub lon: f64,
    pub size: f64,
    pub label: String,
    pub amount: f64,
    pub count: i64,
}

/// The trace id changes on every rebuild so consumers can tell a fresh
/// layer from a re-surfaced one without comparing point contents.
#[derive(Debug, Clone)]
pub struct PointLayer {
    pub trace_id: String,
    pub points: Vec<AwardPoint>,
}

impl PointLayer {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

struct Cluster {
    zip5: String,
    lat: f64,
    lon: f64,
    city: String,
    amount: f64,
    count: i64,
}

/// Builds the point layer for one state under the same filter gate the
/// aggregates use. Awards that resolve to no centroid are omitted; they
/// still count toward the choropleth and the table.
pub fn build_point_layer(
    awards: &[Award],
    state: &str,
    filter: &GeoFilter,
    centroids: &ZipCentroids,
) -> PointLayer {
    let mut order: Vec<Cluster> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for award in awards {
        if award.state != state || !award.geo_eligible() || !filter.matches(award) {
            continue;
        }
        let Some(point) = centroids.resolve(award) else {
            continue;
        };

        let key = if award.pop_zip5.is_empty() {
            format!("{:.4},{:.4}", point.lat, point.lon)
        } else {
            award.pop_zip5.clone()
        };

        let slot = match index_by_key.get(&key) {
            Some(existing) => *existing,
            None => {
                order.push(Cluster {
                    zip5: award.pop_zip5.clone(),
                    lat: point.lat,
                    lon: point.lon,
                    city: award.pop_city.clone(),
                    amount: 0.0,
                    count: 0,
                });
                let new_index = order.len() - 1;
                index_by_key.insert(key, new_index);
                new_index
            }
        };
        let cluster = &mut order[slot];
        cluster.amount += award.award_amount;
        cluster.count += 1;
        if cluster.city.is_empty() && !award.pop_city.is_empty() {
            cluster.city = award.pop_city.clone();
        }
    }

    let magnitudes: Vec<f64> = order.iter().map(|cluster| cluster.amount).collect();
    let scale = MarkerScale::fit(&magnitudes, MIN_MARKER_SIZE, MAX_MARKER_SIZE);

    let mut points: Vec<AwardPoint> = order
        .into_iter()
        .map(|cluster| AwardPoint {
            size: scale.size_for(cluster.amount),
            label: cluster_label(&cluster.city, &cluster.zip5, state),
            zip5: cluster.zip5,
            lat: cluster.lat,
            lon: cluster.lon,
            amount: cluster.amount,
            count: cluster.count,
        })
        .collect();

    points.sort_by(|left, right| {
        right
            .amount
            .total_cmp(&left.amount)
            .then_with(|| left.zip5.cmp(&right.zip5))
    });

    PointLayer {
        trace_id: Ulid::new().to_string(),
        points,
    }
}

fn cluster_label(city: &str, zip5: &str, state: &str) -> String {
    match (city.is_empty(), zip5.is_empty()) {
        (false, false) => format!("{city}, {state} {zip5}"),
        (false, true) => format!("{city}, {state}"),
        (true, false) => format!("{state} {zip5}"),
        (true, true) => state.to_string(),
    }
}
