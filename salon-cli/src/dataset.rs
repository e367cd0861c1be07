//! Resolve the salon dataset a command runs against.

use camino::{Utf8Path, Utf8PathBuf};
use salon_core::{JsonFileSource, LocationStore, seed};

use crate::{ARG_DATASET, CliError};

/// Where salons are loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Dataset {
    /// The built-in Abidjan salons.
    Seed,
    /// A JSON array of salon records on disk.
    File(Utf8PathBuf),
}

impl Dataset {
    pub(crate) fn from_arg(path: Option<Utf8PathBuf>) -> Self {
        path.map_or(Self::Seed, Self::File)
    }

    pub(crate) fn load(&self) -> Result<LocationStore, CliError> {
        match self {
            Self::Seed => Ok(seed::store()?),
            Self::File(path) => {
                require_existing(path, ARG_DATASET)?;
                Ok(LocationStore::from_source(&JsonFileSource::new(path.clone()))?)
            }
        }
    }
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match salon_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}
