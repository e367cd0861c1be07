//! Facade crate for the salon map.
//!
//! This crate re-exports the core domain types and, behind the `session`
//! feature, the asynchronous session and geolocation layer. Every type named
//! by a re-exported trait's signature is re-exported alongside it, so
//! [`PoiSource`] and the session's `LocationService` can be implemented
//! against this crate alone.

#![forbid(unsafe_code)]

pub use salon_core::{
    ActionCommand, ActionError, ActionKind, ActionSink, CoordinateError, Fix, LinearScanIndex,
    LocationStore, Marker, PoiId, PoiRecord, PoiSource, PointOfInterest, PositionStatus,
    PresentationInput, RTreeIndex, RecordError, RenderModel, Selection, SelectionController,
    SelectionError, SelectionEvent, SheetPosition, SourceError, SpatialQuery, StaticSource,
    StoreError, Transition, UserPosition, Viewport, ViewportError, center_target, checked_coord,
    command_for, present, seed,
};

#[cfg(feature = "serde")]
pub use salon_core::JsonFileSource;

#[cfg(feature = "session")]
pub use salon_session::{
    DEFAULT_LOCATE_TIMEOUT_MS, GeolocationError, GeolocationProvider, LocateOutcome, LocateTask,
    LocationService, MapEvent, PermissionStatus, PositionError, Session, SessionConfig,
    SessionDeps, SessionError, SessionHandle,
};
