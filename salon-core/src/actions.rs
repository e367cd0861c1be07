//! Pass-through commands for directions, calling and sharing.
//!
//! The core only builds the command from a salon's fields. Carrying it out
//! is left to an [`ActionSink`] supplied by the platform.

use thiserror::Error;
use url::Url;

use crate::PointOfInterest;

const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/?api=1&destination=";

/// Things the user can do from the detail sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Open turn-by-turn directions to the salon.
    Directions,
    /// Dial the salon.
    Call,
    /// Share a short description of the salon.
    Share,
}

/// A platform command ready to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionCommand {
    /// Open a URI with the platform handler.
    OpenUri(Url),
    /// Hand text to the platform share sheet.
    ShareText(String),
}

/// Errors from building or dispatching an [`ActionCommand`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The salon's fields did not form a valid URI.
    #[error("cannot build URI: {0}")]
    InvalidUri(#[from] url::ParseError),
    /// The platform cannot perform the command.
    #[error("action unavailable: {reason}")]
    Unavailable {
        /// Explanation from the platform.
        reason: String,
    },
}

/// Performs commands on behalf of the core.
pub trait ActionSink: Send + Sync {
    /// Carry out `command`.
    fn dispatch(&self, command: &ActionCommand) -> Result<(), ActionError>;
}

/// Build the command for `kind` on `poi`.
///
/// # Examples
///
/// ```
/// use salon_core::{ActionCommand, ActionKind, PoiId, command_for, seed};
///
/// let store = seed::store()?;
/// let poi = store.get(&PoiId::from("1"))?;
/// let ActionCommand::OpenUri(uri) = command_for(ActionKind::Call, poi)? else {
///     panic!("calls open a tel: URI");
/// };
/// assert_eq!(uri.scheme(), "tel");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn command_for(kind: ActionKind, poi: &PointOfInterest) -> Result<ActionCommand, ActionError> {
    match kind {
        ActionKind::Directions => {
            let uri = format!(
                "{DIRECTIONS_BASE}{},{}",
                poi.latitude(),
                poi.longitude()
            );
            Ok(ActionCommand::OpenUri(Url::parse(&uri)?))
        }
        ActionKind::Call => {
            let digits: String = poi
                .phone()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            Ok(ActionCommand::OpenUri(Url::parse(&format!("tel:{digits}"))?))
        }
        ActionKind::Share => Ok(ActionCommand::ShareText(format!(
            "Découvrez {} à {}",
            poi.name(),
            poi.address()
        ))),
    }
}
