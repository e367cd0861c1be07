//! `query` command: the render model for one viewport.

use std::io::Write;
use std::sync::Arc;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use salon_core::{
    PoiId, PresentationInput, RTreeIndex, RenderModel, SelectionController, UserPosition,
    Viewport, present, seed,
};
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::{ARG_DATASET, CliError, write_json};

/// CLI arguments for the `query` subcommand.
///
/// Omitted viewport fields fall back to the default Abidjan anchor.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Render the map model for a viewport: the visible markers, \
                 the detail sheet and the recentre target. Any viewport field \
                 left unset takes its value from the default anchor.",
    about = "Render the map model for a viewport"
)]
#[ortho_config(prefix = "SALON_MAP")]
pub(crate) struct QueryArgs {
    /// JSON dataset to read instead of the built-in salons.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Latitude of the viewport centre.
    #[arg(long, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Longitude of the viewport centre.
    #[arg(long, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
    /// Full north-south span of the viewport.
    #[arg(long, value_name = "degrees")]
    #[serde(default)]
    pub(crate) latitude_delta: Option<f64>,
    /// Full east-west span of the viewport.
    #[arg(long, value_name = "degrees")]
    #[serde(default)]
    pub(crate) longitude_delta: Option<f64>,
    /// Salon whose detail sheet should be open.
    #[arg(long, value_name = "id")]
    #[serde(default)]
    pub(crate) open: Option<String>,
}

impl QueryArgs {
    fn into_config(self) -> Result<QueryConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        QueryConfig::try_from(merged)
    }
}

/// Resolved `query` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct QueryConfig {
    pub(crate) dataset: Dataset,
    pub(crate) viewport: Viewport,
    pub(crate) open: Option<PoiId>,
}

impl TryFrom<QueryArgs> for QueryConfig {
    type Error = CliError;

    fn try_from(args: QueryArgs) -> Result<Self, Self::Error> {
        let anchor = seed::default_anchor();
        let viewport = Viewport::around(
            args.latitude.unwrap_or(anchor.center().y),
            args.longitude.unwrap_or(anchor.center().x),
            args.latitude_delta.unwrap_or(anchor.latitude_delta()),
            args.longitude_delta.unwrap_or(anchor.longitude_delta()),
        )?;
        Ok(Self {
            dataset: Dataset::from_arg(args.dataset),
            viewport,
            open: args.open.map(PoiId::from),
        })
    }
}

pub(crate) fn run_query(args: QueryArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let model = execute_query(&config)?;
    write_json(writer, &model)
}

pub(crate) fn execute_query(config: &QueryConfig) -> Result<RenderModel, CliError> {
    let store = Arc::new(config.dataset.load()?);
    let index = RTreeIndex::from_store(&store);
    let mut controller = SelectionController::new(Arc::clone(&store));
    if let Some(id) = &config.open {
        controller.select(id.clone())?;
        controller.expand();
    }
    let anchor = seed::default_anchor();
    Ok(present(&PresentationInput {
        store: &store,
        index: &index,
        viewport: &config.viewport,
        selection: controller.state(),
        position: &UserPosition::default(),
        fallback: &anchor,
    }))
}
