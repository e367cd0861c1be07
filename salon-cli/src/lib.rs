//! Command-line interface for browsing salon datasets.
//!
//! `list` prints every salon, `query` renders the map model for a viewport,
//! and `show` prints one salon with its directions, call and share commands.
//! Options layer through `ortho_config`: CLI flags, then `SALON_MAP_*`
//! environment variables, then configuration files.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;

mod dataset;
mod error;
mod list;
mod query;
mod show;

pub use error::CliError;

use list::ListArgs;
use query::QueryArgs;
use show::ShowArgs;

pub(crate) const ARG_DATASET: &str = "dataset";
pub(crate) const ARG_SHOW_ID: &str = "id";
pub(crate) const ENV_SHOW_ID: &str = "SALON_MAP_CMDS_SHOW_ID";

/// Run the CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::List(args) => list::run_list(args, &mut stdout),
        Command::Query(args) => query::run_query(args, &mut stdout),
        Command::Show(args) => show::run_show(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "salon-map",
    about = "Browse salon locations the way the map presents them",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every salon in the dataset.
    List(ListArgs),
    /// Render the map model for a viewport.
    Query(QueryArgs),
    /// Show one salon and the commands its actions produce.
    Show(ShowArgs),
}

fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
