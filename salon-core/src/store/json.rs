//! JSON dataset files.

use std::io::BufReader;

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use salon_fs::open_utf8_file;

use super::{PoiSource, SourceError};
use crate::PoiRecord;

/// [`PoiSource`] reading a JSON array of [`PoiRecord`] values from disk.
///
/// The file is read on every [`PoiSource::load`] call.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: Utf8PathBuf,
}

impl JsonFileSource {
    /// Read records from `path`.
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the dataset.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl PoiSource for JsonFileSource {
    fn load(&self) -> Result<Vec<PoiRecord>, SourceError> {
        debug!("reading dataset from {}", self.path);
        let file = open_utf8_file(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone().into_std_path_buf(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| SourceError::Parse {
            path: self.path.clone().into_std_path_buf(),
            source,
        })
    }
}
