//! Linear-scan index.

use std::collections::BTreeSet;

use geo::Coord;
use rstar::PointDistance;

use super::{IndexedPoi, SpatialQuery};
use crate::{LocationStore, PoiId, Viewport};

/// Spatial index that tests every entry on each query.
///
/// Adequate for a handful of salons. Datasets beyond a few hundred entries
/// should use [`RTreeIndex`](super::RTreeIndex).
#[derive(Debug, Default)]
pub struct LinearScanIndex {
    entries: Vec<IndexedPoi>,
}

impl LinearScanIndex {
    /// Copy the positions of every salon in `store`.
    #[must_use]
    pub fn from_store(store: &LocationStore) -> Self {
        Self {
            entries: store.list().iter().map(IndexedPoi::from).collect(),
        }
    }
}

impl SpatialQuery for LinearScanIndex {
    fn query(&self, viewport: &Viewport) -> BTreeSet<PoiId> {
        self.entries
            .iter()
            .filter(|entry| viewport.contains(entry.location))
            .map(|entry| entry.id.clone())
            .collect()
    }

    fn nearest(&self, point: Coord<f64>) -> Option<PoiId> {
        let target = [point.x, point.y];
        self.entries
            .iter()
            .min_by(|a, b| a.distance_2(&target).total_cmp(&b.distance_2(&target)))
            .map(|entry| entry.id.clone())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
