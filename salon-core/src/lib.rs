//! Core domain for the salon map.
//!
//! The crate is synchronous and free of I/O beyond reading dataset files:
//!
//! - [`LocationStore`] holds the validated, read-only salon records.
//! - [`SpatialQuery`] implementations answer viewport queries.
//! - [`SelectionController`] owns the preview/detail state machine.
//! - [`present`] turns all of the above into a [`RenderModel`].
//!
//! Coordinates are WGS84 [`geo::Coord`] values with `x = longitude` and
//! `y = latitude`.

#![forbid(unsafe_code)]

pub mod actions;
pub mod coordinate;
pub mod poi;
pub mod position;
pub mod presentation;
pub mod seed;
pub mod selection;
pub mod spatial_index;
pub mod store;
pub mod viewport;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use actions::{ActionCommand, ActionError, ActionKind, ActionSink, command_for};
pub use coordinate::{CoordinateError, checked_coord};
pub use poi::{PoiId, PoiRecord, PointOfInterest, RecordError};
pub use position::{Fix, PositionStatus, UserPosition, center_target};
pub use presentation::{Marker, PresentationInput, RenderModel, present};
pub use selection::{
    Selection, SelectionController, SelectionError, SelectionEvent, SheetPosition, Transition,
};
pub use spatial_index::{LinearScanIndex, RTreeIndex, SpatialQuery};
#[cfg(feature = "serde")]
pub use store::JsonFileSource;
pub use store::{LocationStore, PoiSource, SourceError, StaticSource, StoreError};
pub use viewport::{Viewport, ViewportError};
