//! `list` command: every salon in the dataset, one per line.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use salon_core::LocationStore;
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::{ARG_DATASET, CliError};

/// CLI arguments for the `list` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "List every salon in the dataset")]
#[ortho_config(prefix = "SALON_MAP")]
pub(crate) struct ListArgs {
    /// JSON dataset to read instead of the built-in salons.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
}

impl ListArgs {
    fn into_config(self) -> Result<ListConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(ListConfig::from(merged))
    }
}

/// Resolved `list` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ListConfig {
    pub(crate) dataset: Dataset,
}

impl From<ListArgs> for ListConfig {
    fn from(args: ListArgs) -> Self {
        Self {
            dataset: Dataset::from_arg(args.dataset),
        }
    }
}

pub(crate) fn run_list(args: ListArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_list(&config, writer)
}

pub(crate) fn execute_list(config: &ListConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let store = config.dataset.load()?;
    write_listing(writer, &store)
}

fn write_listing(writer: &mut dyn Write, store: &LocationStore) -> Result<(), CliError> {
    for poi in store.list() {
        writeln!(
            writer,
            "{}\t{}\t{:.4},{:.4}\t{:.1} ({} reviews)\t{}",
            poi.id(),
            poi.name(),
            poi.latitude(),
            poi.longitude(),
            poi.rating(),
            poi.reviews(),
            poi.address(),
        )
        .map_err(CliError::WriteOutput)?;
    }
    Ok(())
}
