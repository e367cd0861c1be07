//! R\*-tree backed index.

use std::collections::BTreeSet;

use geo::Coord;
use rstar::{AABB, RTree};

use super::{IndexedPoi, SpatialQuery};
use crate::{LocationStore, PoiId, Viewport};

/// Spatial index partitioning salons in an R\*-tree keyed on coordinate.
///
/// # Examples
///
/// ```
/// use salon_core::{RTreeIndex, SpatialQuery, Viewport, seed};
///
/// let store = seed::store()?;
/// let index = RTreeIndex::from_store(&store);
/// let viewport = Viewport::around(5.36, -4.0083, 0.01, 0.01)?;
/// assert!(index.query(&viewport).iter().any(|id| id.as_str() == "1"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct RTreeIndex {
    tree: RTree<IndexedPoi>,
}

impl RTreeIndex {
    /// Bulk-load every salon in `store`.
    #[must_use]
    pub fn from_store(store: &LocationStore) -> Self {
        let entries = store.list().iter().map(IndexedPoi::from).collect();
        Self {
            tree: RTree::bulk_load(entries),
        }
    }
}

impl SpatialQuery for RTreeIndex {
    fn query(&self, viewport: &Viewport) -> BTreeSet<PoiId> {
        viewport
            .bounds()
            .iter()
            .flat_map(|rect| {
                let envelope = AABB::from_corners(
                    [rect.min().x, rect.min().y],
                    [rect.max().x, rect.max().y],
                );
                self.tree
                    .locate_in_envelope_intersecting(&envelope)
                    .map(|entry| entry.id.clone())
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    fn nearest(&self, point: Coord<f64>) -> Option<PoiId> {
        self.tree
            .nearest_neighbor(&[point.x, point.y])
            .map(|entry| entry.id.clone())
    }

    fn len(&self) -> usize {
        self.tree.size()
    }
}
