//! Resolve the user's position without blocking rendering.
//!
//! [`GeolocationProvider::locate`] runs the permission and position round
//! trip on a Tokio task and hands back a [`LocateTask`]. The task's outcome
//! is delivered exactly once: a fix, a denial, an unavailability, or nothing
//! at all when the request was cancelled. Cancelled requests never touch the
//! stored [`UserPosition`].

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use async_trait::async_trait;
use geo::Coord;
use log::{debug, info, warn};
use salon_core::{Fix, PositionStatus, UserPosition, Viewport, center_target};
use thiserror::Error;
use tokio::sync::{oneshot, watch};
use tokio_util::sync::CancellationToken;

use crate::SessionConfig;

/// Answer to a permission prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    /// Location access allowed.
    Granted,
    /// Location access refused.
    Denied,
}

/// The device could not produce a position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct PositionError {
    /// Explanation from the device.
    pub reason: String,
}

impl PositionError {
    /// Wrap a device-supplied explanation.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Expected, non-fatal ways a locate request ends without a fix.
///
/// Callers fall back to the configured anchor on either variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeolocationError {
    /// The user refused location access.
    #[error("location permission denied")]
    PermissionDenied,
    /// Access was granted but no position could be obtained in time.
    #[error("position unavailable: {reason}")]
    PositionUnavailable {
        /// What went wrong.
        reason: String,
    },
}

/// Device location capability.
#[async_trait]
pub trait LocationService: Send + Sync {
    /// Ask for location access. May suspend while the user decides.
    async fn request_permission(&self) -> PermissionStatus;

    /// Read the current position.
    async fn current_position(&self) -> Result<Fix, PositionError>;
}

/// Outcome of a locate request.
pub type LocateOutcome = Result<Fix, GeolocationError>;

/// Handle to an in-flight locate request.
#[derive(Debug)]
pub struct LocateTask {
    outcome: oneshot::Receiver<LocateOutcome>,
    cancel: CancellationToken,
}

impl LocateTask {
    /// Wait for the outcome; `None` when the request was cancelled.
    pub async fn outcome(self) -> Option<LocateOutcome> {
        self.outcome.await.ok()
    }

    /// Abandon the request. Its result, if any, is discarded.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether [`cancel`](Self::cancel) was called or the provider shut down.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

/// Owns the user's last known position and resolves new ones on demand.
///
/// Dropping the provider cancels every pending request.
pub struct GeolocationProvider {
    service: Arc<dyn LocationService>,
    fallback: Viewport,
    timeout: Duration,
    position: Arc<watch::Sender<UserPosition>>,
    shutdown: CancellationToken,
}

impl fmt::Debug for GeolocationProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeolocationProvider")
            .field("fallback", &self.fallback)
            .field("timeout", &self.timeout)
            .field("position", &*self.position.borrow())
            .finish_non_exhaustive()
    }
}

impl GeolocationProvider {
    /// Create a provider with no known position.
    #[must_use]
    pub fn new(service: Arc<dyn LocationService>, config: &SessionConfig) -> Self {
        let (position, _) = watch::channel(UserPosition::default());
        Self {
            service,
            fallback: config.fallback_anchor,
            timeout: config.locate_timeout(),
            position: Arc::new(position),
            shutdown: CancellationToken::new(),
        }
    }

    /// Start a permission and position round trip.
    ///
    /// One task asks the [`LocationService`] for permission and, once
    /// granted, reads the current position, so this is the entry point for
    /// both device calls. A refusal resolves to
    /// [`GeolocationError::PermissionDenied`] without reading a position.
    ///
    /// Must be called from within a Tokio runtime.
    #[must_use = "dropping the task discards the outcome but does not cancel the request"]
    pub fn locate(&self) -> LocateTask {
        let cancel = self.shutdown.child_token();
        let (sender, receiver) = oneshot::channel();
        let service = Arc::clone(&self.service);
        let position = Arc::clone(&self.position);
        let timeout = self.timeout;
        let task_cancel = cancel.clone();

        tokio::spawn(async move {
            let outcome = tokio::select! {
                () = task_cancel.cancelled() => {
                    debug!("locate request cancelled before resolution");
                    return;
                }
                outcome = resolve(service.as_ref(), timeout) => outcome,
            };
            if !settle(&position, &task_cancel, &outcome) {
                debug!("discarding locate outcome for a cancelled request");
                return;
            }
            if sender.send(outcome).is_err() {
                debug!("locate outcome recorded; requester no longer waiting");
            }
        });

        LocateTask {
            outcome: receiver,
            cancel,
        }
    }

    /// Snapshot of the last known position.
    #[must_use]
    pub fn position(&self) -> UserPosition {
        *self.position.borrow()
    }

    /// Receiver notified whenever a resolution updates the position.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<UserPosition> {
        self.position.subscribe()
    }

    /// The last granted fix, or the centre of the fallback anchor.
    #[must_use]
    pub fn center_target(&self) -> Coord<f64> {
        center_target(&self.position(), &self.fallback)
    }

    /// Region used when no fix is available.
    #[must_use]
    pub const fn fallback(&self) -> &Viewport {
        &self.fallback
    }

    /// Cancel every pending request.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }
}

impl Drop for GeolocationProvider {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn resolve(service: &dyn LocationService, timeout: Duration) -> LocateOutcome {
    let round_trip = async {
        match service.request_permission().await {
            PermissionStatus::Denied => Err(GeolocationError::PermissionDenied),
            PermissionStatus::Granted => service.current_position().await.map_err(|err| {
                GeolocationError::PositionUnavailable { reason: err.reason }
            }),
        }
    };
    tokio::time::timeout(timeout, round_trip)
        .await
        .unwrap_or_else(|_| {
            Err(GeolocationError::PositionUnavailable {
                reason: format!("no position within {timeout:?}"),
            })
        })
}

/// Record `outcome` unless `cancel` fired. The check and the write happen
/// under the same watch lock.
fn settle(
    position: &watch::Sender<UserPosition>,
    cancel: &CancellationToken,
    outcome: &LocateOutcome,
) -> bool {
    position.send_if_modified(|current| {
        if cancel.is_cancelled() {
            return false;
        }
        record(current, outcome);
        true
    })
}

fn record(current: &mut UserPosition, outcome: &LocateOutcome) {
    let status = match outcome {
        Ok(fix) => {
            info!("user located at {:?}", fix.coordinate);
            PositionStatus::Granted(*fix)
        }
        Err(GeolocationError::PermissionDenied) => {
            info!("location permission denied; using fallback anchor");
            PositionStatus::Denied
        }
        Err(GeolocationError::PositionUnavailable { reason }) => {
            warn!("position unavailable: {reason}");
            match current.status {
                PositionStatus::Granted(fix) => PositionStatus::Granted(fix),
                PositionStatus::Denied => PositionStatus::Denied,
                PositionStatus::Unknown => PositionStatus::Unknown,
            }
        }
    };
    *current = UserPosition {
        status,
        updated_at: Some(SystemTime::now()),
    };
}
