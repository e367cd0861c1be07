//! Translate store, viewport, selection and position into what the map draws.
//!
//! [`present`] is a pure function: the same inputs always produce the same
//! [`RenderModel`], and nothing is mutated.

use geo::Coord;

use crate::{
    LocationStore, PoiId, PointOfInterest, Selection, SheetPosition, SpatialQuery, UserPosition,
    Viewport, center_target,
};

/// A pin on the map.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Marker {
    /// Salon the pin stands for.
    pub id: PoiId,
    /// Where to draw it.
    pub location: Coord<f64>,
    /// Whether the salon is the current selection.
    pub highlighted: bool,
}

/// Everything the map surface and detail sheet need for one frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RenderModel {
    /// Pins inside the viewport, in store order.
    pub markers: Vec<Marker>,
    /// Full record of the salon whose detail is open.
    pub detail: Option<PointOfInterest>,
    /// Snap point of the detail sheet.
    pub sheet: SheetPosition,
    /// Where "centre on me" moves the map.
    pub recenter: Coord<f64>,
    /// Region the model was built for.
    pub viewport: Viewport,
}

/// Inputs to [`present`].
#[derive(Clone, Copy)]
pub struct PresentationInput<'a> {
    /// Source of the salon records.
    pub store: &'a LocationStore,
    /// Index answering the viewport query.
    pub index: &'a dyn SpatialQuery,
    /// Visible region.
    pub viewport: &'a Viewport,
    /// Current selection.
    pub selection: &'a Selection,
    /// Last known user position.
    pub position: &'a UserPosition,
    /// Region used when the user position is unknown.
    pub fallback: &'a Viewport,
}

/// Build the render model for one set of inputs.
///
/// # Examples
///
/// ```
/// use salon_core::{
///     PresentationInput, RTreeIndex, Selection, UserPosition, Viewport, present, seed,
/// };
///
/// let store = seed::store()?;
/// let index = RTreeIndex::from_store(&store);
/// let viewport = Viewport::around(5.36, -4.0083, 0.01, 0.01)?;
/// let anchor = seed::default_anchor();
/// let model = present(&PresentationInput {
///     store: &store,
///     index: &index,
///     viewport: &viewport,
///     selection: &Selection::Idle,
///     position: &UserPosition::default(),
///     fallback: &anchor,
/// });
/// assert_eq!(model.markers.len(), 1);
/// assert!(model.detail.is_none());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn present(input: &PresentationInput<'_>) -> RenderModel {
    let visible = input.index.query(input.viewport);
    let selected = input.selection.selected();
    let markers = input
        .store
        .list()
        .iter()
        .filter(|poi| visible.contains(poi.id()))
        .map(|poi| Marker {
            id: poi.id().clone(),
            location: poi.location(),
            highlighted: selected == Some(poi.id()),
        })
        .collect();
    let detail = match input.selection {
        Selection::DetailOpen(id) => input.store.get(id).ok().cloned(),
        Selection::Idle | Selection::Previewing(_) => None,
    };
    RenderModel {
        markers,
        detail,
        sheet: input.selection.sheet(),
        recenter: center_target(input.position, input.fallback),
        viewport: *input.viewport,
    }
}
