//! `show` command: one salon and its action commands.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use salon_core::{ActionCommand, ActionKind, PoiId, PoiRecord, PointOfInterest, command_for};
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::{ARG_DATASET, ARG_SHOW_ID, CliError, ENV_SHOW_ID, write_json};

/// CLI arguments for the `show` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Show one salon and the commands its actions produce")]
#[ortho_config(prefix = "SALON_MAP")]
pub(crate) struct ShowArgs {
    /// Identifier of the salon.
    #[arg(value_name = "id")]
    #[serde(default)]
    pub(crate) id: Option<String>,
    /// JSON dataset to read instead of the built-in salons.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
}

impl ShowArgs {
    fn into_config(self) -> Result<ShowConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ShowConfig::try_from(merged)
    }
}

/// Resolved `show` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ShowConfig {
    pub(crate) dataset: Dataset,
    pub(crate) id: PoiId,
}

impl TryFrom<ShowArgs> for ShowConfig {
    type Error = CliError;

    fn try_from(args: ShowArgs) -> Result<Self, Self::Error> {
        let id = args
            .id
            .filter(|id| !id.trim().is_empty())
            .ok_or(CliError::MissingArgument {
                field: ARG_SHOW_ID,
                env: ENV_SHOW_ID,
            })?;
        Ok(Self {
            dataset: Dataset::from_arg(args.dataset),
            id: PoiId::from(id),
        })
    }
}

/// What `show` prints.
#[derive(Debug, Serialize)]
pub(crate) struct SalonSheet {
    pub(crate) salon: PoiRecord,
    pub(crate) actions: SalonActions,
}

/// Rendered action commands for one salon.
#[derive(Debug, Serialize)]
pub(crate) struct SalonActions {
    pub(crate) directions: String,
    pub(crate) call: String,
    pub(crate) share: String,
}

pub(crate) fn run_show(args: ShowArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let sheet = execute_show(&config)?;
    write_json(writer, &sheet)
}

pub(crate) fn execute_show(config: &ShowConfig) -> Result<SalonSheet, CliError> {
    let store = config.dataset.load()?;
    let poi = store.get(&config.id)?;
    Ok(SalonSheet {
        salon: PoiRecord::from(poi),
        actions: SalonActions {
            directions: render(ActionKind::Directions, poi)?,
            call: render(ActionKind::Call, poi)?,
            share: render(ActionKind::Share, poi)?,
        },
    })
}

fn render(kind: ActionKind, poi: &PointOfInterest) -> Result<String, CliError> {
    Ok(match command_for(kind, poi)? {
        ActionCommand::OpenUri(uri) => uri.into(),
        ActionCommand::ShareText(text) => text,
    })
}
