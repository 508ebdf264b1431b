use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::award::Award;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ZipPoint {
    pub lat: f64,
    pub lon: f64,
}

/// ZIP5 → centroid lookup table. A missing document, unreadable file, or
/// malformed JSON all degrade to an empty table: downstream consumers
/// treat "ZIP not found" as "omit this point", never as an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZipCentroids {
    table: BTreeMap<String, ZipPoint>,
}

impl ZipCentroids {
    pub fn load(path: &Path) -> Self {
        let Ok(body) = fs::read_to_string(path) else {
            return Self::default();
        };
        let Ok(table) = serde_json::from_str::<BTreeMap<String, ZipPoint>>(&body) else {
            return Self::default();
        };
        Self { table }
    }

    pub fn from_table(table: BTreeMap<String, ZipPoint>) -> Self {
        Self { table }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn lookup(&self, zip5: &str) -> Option<ZipPoint> {
        self.table.get(zip5).copied()
    }

    /// Coordinates carried on the award itself win; the table is the
    /// fallback. `None` excludes the award from point layers only; it
    /// still counts toward choropleth and table output.
    pub fn resolve(&self, award: &Award) -> Option<ZipPoint> {
        if let (Some(lat), Some(lon)) = (award.lat, award.lon) {
            return Some(ZipPoint { lat, lon });
        }
        if award.pop_zip5.is_empty() {
            return None;
        }
        self.lookup(&award.pop_zip5)
    }
}
