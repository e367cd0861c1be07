//! Error types emitted by the salon map CLI.
//!
//! Keep this error type reasonably small: most helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use salon_core::{ActionError, SelectionError, StoreError, ViewportError};
use thiserror::Error;

/// Errors emitted by the salon map CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The dataset path does not name an existing regular file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        /// Flag naming the path.
        field: &'static str,
        /// Path as given.
        path: Utf8PathBuf,
    },
    /// The dataset path could not be inspected.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag naming the path.
        field: &'static str,
        /// Path as given.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// Loading or looking up salons failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The salon to open is not in the dataset.
    #[error(transparent)]
    Selection(#[from] SelectionError),
    /// An action command could not be built.
    #[error("failed to build action: {0}")]
    Action(#[from] ActionError),
    /// The requested viewport is invalid.
    #[error("invalid viewport: {0}")]
    Viewport(#[from] ViewportError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
