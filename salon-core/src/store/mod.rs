//! The authoritative, read-only set of salons.
//!
//! A [`LocationStore`] is filled once from a [`PoiSource`] and never changes
//! afterwards, so it can be shared between readers behind an `Arc`. Every
//! record is validated on the way in; a single bad record fails the whole
//! load.

use std::collections::HashMap;
#[cfg(feature = "serde")]
use std::path::PathBuf;

use log::{debug, info};
use thiserror::Error;

use crate::{PoiId, PoiRecord, PointOfInterest, RecordError};

#[cfg(feature = "serde")]
mod json;

#[cfg(feature = "serde")]
pub use json::JsonFileSource;

/// Failure to read raw records from a [`PoiSource`].
#[derive(Debug, Error)]
pub enum SourceError {
    /// The backing file could not be read.
    #[cfg(feature = "serde")]
    #[error("failed to read dataset from {path}: {source}")]
    Io {
        /// Location of the dataset file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The dataset was not a JSON array of records.
    #[cfg(feature = "serde")]
    #[error("failed to parse dataset at {path}: {source}")]
    Parse {
        /// Location of the dataset file.
        path: PathBuf,
        /// JSON decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// The source is unavailable for another reason.
    #[error("dataset unavailable: {reason}")]
    Unavailable {
        /// Human-readable explanation.
        reason: String,
    },
}

/// Errors raised while loading or reading a [`LocationStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record failed validation or repeated an identifier.
    #[error("invalid record {id:?}: {reason}")]
    InvalidRecord {
        /// Identifier of the offending record as supplied.
        id: String,
        /// What was wrong with it.
        #[source]
        reason: RecordError,
    },
    /// The data source could not produce records.
    #[error(transparent)]
    Source(#[from] SourceError),
    /// No record carries the requested identifier.
    #[error("no point of interest with id {id}")]
    NotFound {
        /// Identifier that was looked up.
        id: PoiId,
    },
}

/// Supplies the raw records a [`LocationStore`] is built from.
///
/// # Examples
///
/// ```
/// use salon_core::{LocationStore, PoiRecord, PoiSource, SourceError};
///
/// struct Empty;
///
/// impl PoiSource for Empty {
///     fn load(&self) -> Result<Vec<PoiRecord>, SourceError> {
///         Ok(Vec::new())
///     }
/// }
///
/// let store = LocationStore::from_source(&Empty)?;
/// assert!(store.is_empty());
/// # Ok::<(), salon_core::StoreError>(())
/// ```
pub trait PoiSource {
    /// Return every record in the order it should be listed.
    fn load(&self) -> Result<Vec<PoiRecord>, SourceError>;
}

/// In-memory [`PoiSource`] over a fixed list of records.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<PoiRecord>,
}

impl StaticSource {
    /// Wrap a list of records.
    pub fn new<I>(records: I) -> Self
    where
        I: IntoIterator<Item = PoiRecord>,
    {
        Self {
            records: records.into_iter().collect(),
        }
    }
}

impl PoiSource for StaticSource {
    fn load(&self) -> Result<Vec<PoiRecord>, SourceError> {
        Ok(self.records.clone())
    }
}

/// Validated, ordered, read-only collection of salons.
#[derive(Debug, Clone, Default)]
pub struct LocationStore {
    pois: Vec<PointOfInterest>,
    positions: HashMap<PoiId, usize>,
}

impl LocationStore {
    /// Load and validate every record from `source`.
    pub fn from_source<S>(source: &S) -> Result<Self, StoreError>
    where
        S: PoiSource + ?Sized,
    {
        let records = source.load()?;
        let store = Self::from_records(records)?;
        info!("location store loaded with {} records", store.len());
        Ok(store)
    }

    /// Validate `records` and build a store preserving their order.
    pub fn from_records<I>(records: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = PoiRecord>,
    {
        let mut pois = Vec::new();
        let mut positions = HashMap::new();
        for record in records {
            let supplied_id = record.id.clone();
            let poi = PointOfInterest::try_from(record).map_err(|reason| {
                StoreError::InvalidRecord {
                    id: supplied_id.clone(),
                    reason,
                }
            })?;
            if positions.contains_key(poi.id()) {
                return Err(StoreError::InvalidRecord {
                    id: supplied_id,
                    reason: RecordError::DuplicateId,
                });
            }
            positions.insert(poi.id().clone(), pois.len());
            pois.push(poi);
        }
        debug!("validated {} records", pois.len());
        Ok(Self { pois, positions })
    }

    /// Every salon in source order.
    #[must_use]
    pub fn list(&self) -> &[PointOfInterest] {
        &self.pois
    }

    /// Look up a salon by identifier.
    pub fn get(&self, id: &PoiId) -> Result<&PointOfInterest, StoreError> {
        self.positions
            .get(id)
            .and_then(|&position| self.pois.get(position))
            .ok_or_else(|| StoreError::NotFound { id: id.clone() })
    }

    /// Whether a salon with `id` exists.
    #[must_use]
    pub fn contains(&self, id: &PoiId) -> bool {
        self.positions.contains_key(id)
    }

    /// Number of salons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pois.len()
    }

    /// Whether the store holds no salons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pois.is_empty()
    }
}
