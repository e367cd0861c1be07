//! Which salon, if any, the user is focused on.
//!
//! The controller is a small state machine:
//!
//! ```text
//! Idle ──select(id)──▶ Previewing(id) ──expand──▶ DetailOpen(id)
//!   ▲                      │   ▲                      │
//!   └───────close──────────┘   └─────select(id2)──────┘
//! ```
//!
//! `expand` and `close` from a state without a matching transition are
//! no-ops rather than errors, so a double dismissal from the map host is
//! harmless. Only `select` can fail, and a failed `select` leaves the state
//! untouched.

use std::sync::Arc;

use log::{debug, warn};
use thiserror::Error;

use crate::{LocationStore, PoiId};

/// Current focus of the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// Nothing selected; the detail sheet is hidden.
    #[default]
    Idle,
    /// A salon is highlighted and its summary is peeking.
    Previewing(PoiId),
    /// A salon's full detail is open.
    DetailOpen(PoiId),
}

impl Selection {
    /// Identifier of the selected salon, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<&PoiId> {
        match self {
            Self::Idle => None,
            Self::Previewing(id) | Self::DetailOpen(id) => Some(id),
        }
    }

    /// Snap point of the detail sheet for this state.
    #[must_use]
    pub const fn sheet(&self) -> SheetPosition {
        match self {
            Self::Idle => SheetPosition::Hidden,
            Self::Previewing(_) => SheetPosition::Peek,
            Self::DetailOpen(_) => SheetPosition::Expanded,
        }
    }
}

/// Where the detail sheet rests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SheetPosition {
    /// Off screen.
    Hidden,
    /// Partially raised, showing the summary.
    Peek,
    /// Fully raised, showing the detail payload.
    Expanded,
}

/// Input to [`SelectionController::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// Focus a salon, replacing any current focus.
    Select(PoiId),
    /// Open the detail of the previewed salon.
    Expand,
    /// Drop the focus.
    Close,
}

/// Result of applying an event: the state before and after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State before the event.
    pub from: Selection,
    /// State after the event.
    pub to: Selection,
}

impl Transition {
    /// Whether the event changed the state.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Errors raised by [`SelectionController::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The requested salon is not in the store.
    #[error("unknown point of interest {id}")]
    UnknownId {
        /// Identifier that was rejected.
        id: PoiId,
    },
}

/// Owns the [`Selection`] and guards its transitions.
///
/// The selection never refers to a salon missing from the store.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use salon_core::{PoiId, Selection, SelectionController, seed};
///
/// let mut controller = SelectionController::new(Arc::new(seed::store()?));
/// controller.select(PoiId::from("1"))?;
/// controller.expand();
/// assert_eq!(controller.state(), &Selection::DetailOpen(PoiId::from("1")));
/// controller.close();
/// assert_eq!(controller.state(), &Selection::Idle);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct SelectionController {
    store: Arc<LocationStore>,
    state: Selection,
}

impl SelectionController {
    /// Start idle over `store`.
    #[must_use]
    pub fn new(store: Arc<LocationStore>) -> Self {
        Self {
            store,
            state: Selection::Idle,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &Selection {
        &self.state
    }

    /// Store the controller validates against.
    #[must_use]
    pub fn store(&self) -> &LocationStore {
        &self.store
    }

    /// Apply `event`, returning the resulting transition.
    pub fn apply(&mut self, event: SelectionEvent) -> Result<Transition, SelectionError> {
        let from = self.state.clone();
        let to = match (event, &self.state) {
            (SelectionEvent::Select(id), _) => {
                if !self.store.contains(&id) {
                    warn!("rejected selection of unknown point of interest {id}");
                    return Err(SelectionError::UnknownId { id });
                }
                Selection::Previewing(id)
            }
            (SelectionEvent::Expand, Selection::Previewing(id)) => {
                Selection::DetailOpen(id.clone())
            }
            (SelectionEvent::Close, Selection::Previewing(_) | Selection::DetailOpen(_)) => {
                Selection::Idle
            }
            (event @ (SelectionEvent::Expand | SelectionEvent::Close), state) => {
                debug!("ignoring {event:?} while {state:?}");
                state.clone()
            }
        };
        self.state = to.clone();
        let transition = Transition { from, to };
        if transition.changed() {
            debug!("selection {:?} -> {:?}", transition.from, transition.to);
        }
        Ok(transition)
    }

    /// Focus the salon `id`.
    pub fn select(&mut self, id: impl Into<PoiId>) -> Result<Transition, SelectionError> {
        self.apply(SelectionEvent::Select(id.into()))
    }

    /// Open the detail of the previewed salon; a no-op otherwise.
    pub fn expand(&mut self) -> Transition {
        self.infallible(SelectionEvent::Expand)
    }

    /// Drop the focus; a no-op when already idle.
    pub fn close(&mut self) -> Transition {
        self.infallible(SelectionEvent::Close)
    }

    fn infallible(&mut self, event: SelectionEvent) -> Transition {
        let from = self.state.clone();
        self.apply(event).unwrap_or_else(|_| Transition {
            to: from.clone(),
            from,
        })
    }
}
