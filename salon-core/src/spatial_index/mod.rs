//! Viewport queries over the salons in a [`LocationStore`](crate::LocationStore).
//!
//! [`RTreeIndex`] partitions coordinates in an R\*-tree and is the index the
//! session uses. [`LinearScanIndex`] checks every entry and exists as a
//! reference for small datasets and for cross-checking the tree in tests.
//! Both treat viewport boundaries as inside and split regions that cross
//! the antimeridian.

use std::collections::BTreeSet;

use geo::Coord;
use rstar::{AABB, PointDistance, RTreeObject};

use crate::{PoiId, PointOfInterest, Viewport};

mod linear;
mod rtree;

pub use linear::LinearScanIndex;
pub use rtree::RTreeIndex;

/// Answers "which salons are visible" for a viewport.
pub trait SpatialQuery: Send + Sync {
    /// Identifiers of every entry inside `viewport`; empty when nothing matches.
    fn query(&self, viewport: &Viewport) -> BTreeSet<PoiId>;

    /// Identifier of the entry closest to `point` in lon/lat space.
    fn nearest(&self, point: Coord<f64>) -> Option<PoiId>;

    /// Number of indexed entries.
    fn len(&self) -> usize;

    /// Whether the index holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Identifier and position of an indexed salon.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct IndexedPoi {
    pub(crate) id: PoiId,
    pub(crate) location: Coord<f64>,
}

impl From<&PointOfInterest> for IndexedPoi {
    fn from(poi: &PointOfInterest) -> Self {
        Self {
            id: poi.id().clone(),
            location: poi.location(),
        }
    }
}

impl RTreeObject for IndexedPoi {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.location.x, self.location.y])
    }
}

impl PointDistance for IndexedPoi {
    #[expect(
        clippy::float_arithmetic,
        reason = "squared planar distance between two coordinates"
    )]
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let [x, y] = *point;
        let dx = self.location.x - x;
        let dy = self.location.y - y;
        dx * dx + dy * dy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LocationStore, test_support::record};
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> LocationStore {
        LocationStore::from_records([
            record("centre", 0.0, 0.0),
            record("plaza", 0.2, 0.3),
            record("riverside", 1.0, 5.0),
            record("east-edge", 0.0, 179.9),
            record("west-edge", 0.0, -179.9),
        ])
        .expect("valid records")
    }

    fn indices(store: &LocationStore) -> [Box<dyn SpatialQuery>; 2] {
        [
            Box::new(RTreeIndex::from_store(store)),
            Box::new(LinearScanIndex::from_store(store)),
        ]
    }

    fn ids(values: &[&str]) -> BTreeSet<PoiId> {
        values.iter().copied().map(PoiId::from).collect()
    }

    #[rstest]
    fn returns_every_entry_inside_the_viewport(store: LocationStore) {
        let viewport = Viewport::around(0.0, 0.0, 1.0, 1.0).expect("valid viewport");
        for index in indices(&store) {
            assert_eq!(index.query(&viewport), ids(&["centre", "plaza"]));
        }
    }

    #[rstest]
    fn returns_empty_set_when_nothing_matches(store: LocationStore) {
        let viewport = Viewport::around(-40.0, 100.0, 1.0, 1.0).expect("valid viewport");
        for index in indices(&store) {
            assert!(index.query(&viewport).is_empty());
        }
    }

    #[rstest]
    fn finds_entries_across_the_antimeridian(store: LocationStore) {
        let viewport = Viewport::around(0.0, 180.0, 1.0, 1.0).expect("valid viewport");
        for index in indices(&store) {
            assert_eq!(index.query(&viewport), ids(&["east-edge", "west-edge"]));
        }
    }

    #[rstest]
    fn nearest_picks_the_closest_entry(store: LocationStore) {
        for index in indices(&store) {
            assert_eq!(
                index.nearest(Coord { x: 4.0, y: 1.2 }),
                Some(PoiId::from("riverside"))
            );
        }
    }

    #[rstest]
    fn empty_index_has_no_nearest_entry() {
        for index in indices(&LocationStore::default()) {
            assert!(index.is_empty());
            assert_eq!(index.nearest(Coord { x: 0.0, y: 0.0 }), None);
        }
    }
}
