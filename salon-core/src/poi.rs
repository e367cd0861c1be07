//! Salon records and their validation.

use std::{borrow::Borrow, fmt};

use geo::Coord;
use thiserror::Error;
use url::Url;

use crate::coordinate::{CoordinateError, checked_coord};

/// Highest rating a salon can carry.
pub const MAX_RATING: f32 = 5.0;

/// Stable identifier of a [`PointOfInterest`].
///
/// # Examples
///
/// ```
/// use salon_core::PoiId;
///
/// let id = PoiId::from("1");
/// assert_eq!(id.as_str(), "1");
/// assert_eq!(id.to_string(), "1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct PoiId(String);

impl PoiId {
    /// Wrap an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PoiId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PoiId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for PoiId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PoiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unvalidated shape of a salon as it arrives from a data source.
///
/// A dataset file is a JSON array of these records.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoiRecord {
    /// Identifier, unique within the dataset.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Average rating on a zero to five scale.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub reviews: u32,
    /// Street address.
    pub address: String,
    /// Contact phone number.
    pub phone: String,
    /// URI of the cover image.
    pub image: String,
}

/// Reasons a [`PoiRecord`] is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    /// The identifier was blank.
    #[error("identifier must not be empty")]
    EmptyId,
    /// The name was blank.
    #[error("name must not be empty")]
    EmptyName,
    /// Latitude or longitude was invalid.
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),
    /// Rating was outside `[0, 5]` or not a number.
    #[error("rating {0} is outside [0, 5]")]
    RatingOutOfRange(f32),
    /// The image reference could not be parsed as a URI.
    #[error("invalid image URI: {0}")]
    InvalidImage(#[from] url::ParseError),
    /// Another record already uses the identifier.
    #[error("duplicate identifier")]
    DuplicateId,
}

/// A salon shown on the map. Immutable once validated.
///
/// # Examples
///
/// ```
/// use salon_core::{PoiRecord, PointOfInterest};
///
/// let record = PoiRecord {
///     id: "1".into(),
///     name: "Salon Belle Tresse".into(),
///     latitude: 5.3650,
///     longitude: -4.0083,
///     rating: 4.8,
///     reviews: 124,
///     address: "Boulevard Latrille, Cocody".into(),
///     phone: "+225 07 08 12 34 56".into(),
///     image: "https://example.com/salon.jpg".into(),
/// };
/// let poi = PointOfInterest::try_from(record)?;
/// assert_eq!(poi.id().as_str(), "1");
/// assert_eq!(poi.latitude(), 5.3650);
/// # Ok::<(), salon_core::RecordError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PointOfInterest {
    id: PoiId,
    name: String,
    location: Coord<f64>,
    rating: f32,
    reviews: u32,
    address: String,
    phone: String,
    image: Url,
}

impl PointOfInterest {
    /// Stable identifier.
    #[must_use]
    pub const fn id(&self) -> &PoiId {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position with `x = longitude` and `y = latitude`.
    #[must_use]
    pub const fn location(&self) -> Coord<f64> {
        self.location
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }

    /// Average rating in `[0, 5]`.
    #[must_use]
    pub const fn rating(&self) -> f32 {
        self.rating
    }

    /// Number of reviews.
    #[must_use]
    pub const fn reviews(&self) -> u32 {
        self.reviews
    }

    /// Street address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Contact phone number as written in the source.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Cover image URI.
    #[must_use]
    pub const fn image(&self) -> &Url {
        &self.image
    }
}

impl TryFrom<PoiRecord> for PointOfInterest {
    type Error = RecordError;

    fn try_from(record: PoiRecord) -> Result<Self, Self::Error> {
        if record.id.trim().is_empty() {
            return Err(RecordError::EmptyId);
        }
        if record.name.trim().is_empty() {
            return Err(RecordError::EmptyName);
        }
        let location = checked_coord(record.latitude, record.longitude)?;
        if !(0.0..=MAX_RATING).contains(&record.rating) {
            return Err(RecordError::RatingOutOfRange(record.rating));
        }
        let image = Url::parse(&record.image)?;
        Ok(Self {
            id: PoiId(record.id),
            name: record.name,
            location,
            rating: record.rating,
            reviews: record.reviews,
            address: record.address,
            phone: record.phone,
            image,
        })
    }
}

impl From<&PointOfInterest> for PoiRecord {
    fn from(poi: &PointOfInterest) -> Self {
        Self {
            id: poi.id.0.clone(),
            name: poi.name.clone(),
            latitude: poi.latitude(),
            longitude: poi.longitude(),
            rating: poi.rating,
            reviews: poi.reviews,
            address: poi.address.clone(),
            phone: poi.phone.clone(),
            image: poi.image.to_string(),
        }
    }
}
