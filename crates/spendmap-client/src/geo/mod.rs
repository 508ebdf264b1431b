pub mod boundaries;
pub mod centroids;
pub mod fips;
pub mod markers;
pub mod points;

use std::path::PathBuf;
use std::sync::OnceLock;

use crate::geo::boundaries::BoundaryCatalog;
use crate::geo::centroids::ZipCentroids;
use crate::setup::DataContext;

/// Session-wide geographic reference data. Both tables load lazily, at
/// most once, and are read-only afterward; a failed load yields an empty
/// table rather than an error so the dashboard degrades instead of dying.
#[derive(Debug)]
pub struct GeoCatalog {
    centroids_path: PathBuf,
    states_path: PathBuf,
    counties_path: PathBuf,
    centroids: OnceLock<ZipCentroids>,
    boundaries: OnceLock<BoundaryCatalog>,
}

impl GeoCatalog {
    pub fn for_context(context: &DataContext) -> Self {
        Self {
            centroids_path: context.centroids_path(),
            states_path: context.states_topology_path(),
            counties_path: context.counties_topology_path(),
            centroids: OnceLock::new(),
            boundaries: OnceLock::new(),
        }
    }

    /// Preloaded tables, for tests that inject reference data directly.
    pub fn preloaded(centroids: ZipCentroids, boundaries: BoundaryCatalog) -> Self {
        let catalog = Self {
            centroids_path: PathBuf::new(),
            states_path: PathBuf::new(),
            counties_path: PathBuf::new(),
            centroids: OnceLock::new(),
            boundaries: OnceLock::new(),
        };
        let _ = catalog.centroids.set(centroids);
        let _ = catalog.boundaries.set(boundaries);
        catalog
    }

    pub fn centroids(&self) -> &ZipCentroids {
        self.centroids
            .get_or_init(|| ZipCentroids::load(&self.centroids_path))
    }

    pub fn boundaries(&self) -> &BoundaryCatalog {
        self.boundaries
            .get_or_init(|| BoundaryCatalog::load(&self.states_path, &self.counties_path))
    }
}
