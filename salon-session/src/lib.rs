//! Asynchronous side of the salon map.
//!
//! [`GeolocationProvider`] resolves the user's position as a cancellable
//! Tokio task whose outcome is delivered once. [`Session`] serialises map
//! events for one user and publishes a fresh
//! [`RenderModel`](salon_core::RenderModel) after each of them.

#![forbid(unsafe_code)]

mod config;
mod geolocation;
mod session;

pub use config::{DEFAULT_LOCATE_TIMEOUT_MS, SessionConfig};
pub use geolocation::{
    GeolocationError, GeolocationProvider, LocateOutcome, LocateTask, LocationService,
    PermissionStatus, PositionError,
};
pub use session::{MapEvent, Session, SessionDeps, SessionError, SessionHandle};
