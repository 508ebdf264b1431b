use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde_json::Value;

/// Which boundary features exist, keyed by FIPS id. The engine never
/// decodes geometry (that belongs to the renderer); it only needs to know
/// whether a drill-down target has an outline and how many county
/// features sit under it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryCatalog {
    state_features: BTreeSet<String>,
    county_features_by_state: BTreeMap<String, usize>,
}

impl BoundaryCatalog {
    /// Either document failing to load leaves that layer empty; a state
    /// with no feature bounces drill-down back to national, which is the
    /// documented degraded behavior rather than an error.
    pub fn load(states_path: &Path, counties_path: &Path) -> Self {
        let mut catalog = Self::default();

        for id in topology_feature_ids(states_path) {
            catalog.state_features.insert(id);
        }

        for id in topology_feature_ids(counties_path) {
            // County ids are 5-digit FIPS; the leading two digits name the state.
            if id.len() < 2 {
                continue;
            }
            let state_fips = id[..2].to_string();
            *catalog.county_features_by_state.entry(state_fips).or_insert(0) += 1;
        }

        catalog
    }

    pub fn from_features(states: &[&str], counties: &[&str]) -> Self {
        let mut catalog = Self::default();
        for id in states {
            catalog.state_features.insert((*id).to_string());
        }
        for id in counties {
            if id.len() < 2 {
                continue;
            }
            *catalog
                .county_features_by_state
                .entry(id[..2].to_string())
                .or_insert(0) += 1;
        }
        catalog
    }

    pub fn is_empty(&self) -> bool {
        self.state_features.is_empty()
    }

    pub fn has_state(&self, state_fips: &str) -> bool {
        self.state_features.contains(state_fips)
    }

    pub fn county_count(&self, state_fips: &str) -> usize {
        self.county_features_by_state
            .get(state_fips)
            .copied()
            .unwrap_or(0)
    }
}

/// Pulls every geometry id out of a topology document:
/// `objects.<name>.geometries[].id`, as string or number.
fn topology_feature_ids(path: &Path) -> Vec<String> {
    let Ok(body) = fs::read_to_string(path) else {
        return Vec::new();
    };
    let Ok(document) = serde_json::from_str::<Value>(&body) else {
        return Vec::new();
    };

    let mut ids = Vec::new();
    let Some(objects) = document.get("objects").and_then(Value::as_object) else {
        return ids;
    };

    for object in objects.values() {
        let Some(geometries) = object.get("geometries").and_then(Value::as_array) else {
            continue;
        };
        for geometry in geometries {
            match geometry.get("id") {
                Some(Value::String(id)) => ids.push(id.clone()),
                Some(Value::Number(id)) => {
                    // Numeric ids lose their leading zero ("4" for Arizona).
                    let raw = id.to_string();
                    if raw.len() == 1 {
                        ids.push(format!("0{raw}"));
                    } else {
                        ids.push(raw);
                    }
                }
                _ => {}
            }
        }
    }

    ids
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::BoundaryCatalog;

    #[test]
    fn missing_documents_yield_empty_catalog() {
        let catalog = BoundaryCatalog::load(
            Path::new("/nonexistent/us_states_topo.json"),
            Path::new("/nonexistent/us_counties_topo.json"),
        );
        assert!(catalog.is_empty());
        assert!(!catalog.has_state("24"));
        assert_eq!(catalog.county_count("24"), 0);
    }

    #[test]
    fn county_features_group_under_their_state() {
        let catalog =
            BoundaryCatalog::from_features(&["24", "06"], &["24031", "24033", "06037"]);
        assert!(catalog.has_state("24"));
        assert_eq!(catalog.county_count("24"), 2);
        assert_eq!(catalog.county_count("06"), 1);
        assert_eq!(catalog.county_count("51"), 0);
    }
}
