//! Built-in dataset of five salons in Abidjan and the default map anchor.

use crate::{LocationStore, PoiRecord, PoiSource, SourceError, StoreError, Viewport};

/// Region shown before the user's position is known: central Abidjan.
#[must_use]
pub const fn default_anchor() -> Viewport {
    Viewport::from_trusted(5.3600, -4.0083, 0.0922, 0.0421)
}

/// [`PoiSource`] yielding the built-in salons.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedSource;

impl PoiSource for SeedSource {
    fn load(&self) -> Result<Vec<PoiRecord>, SourceError> {
        Ok(records())
    }
}

/// Validated store over the built-in salons.
pub fn store() -> Result<LocationStore, StoreError> {
    LocationStore::from_source(&SeedSource)
}

/// The built-in salons, unvalidated.
#[must_use]
pub fn records() -> Vec<PoiRecord> {
    vec![
        salon(
            "1",
            "Salon Belle Tresse",
            (5.3650, -4.0083),
            (4.8, 124),
            "Boulevard Latrille, Cocody, Abidjan",
            "+225 07 08 12 34 56",
            "https://images.unsplash.com/photo-1560066984-138dadb4c035",
        ),
        salon(
            "2",
            "Élégance Coiffure",
            (5.3364, -4.0267),
            (4.5, 89),
            "Rue du Commerce, Plateau, Abidjan",
            "+225 05 44 21 09 87",
            "https://images.unsplash.com/photo-1521590832167-7bcbfaa6381f",
        ),
        salon(
            "3",
            "Afro Style Studio",
            (5.3096, -4.0127),
            (4.7, 156),
            "Avenue 21, Treichville, Abidjan",
            "+225 01 02 33 45 67",
            "https://images.unsplash.com/photo-1522337360788-8b13dee7a37e",
        ),
        salon(
            "4",
            "Maison des Mèches",
            (5.3484, -3.9857),
            (4.3, 67),
            "Riviera 2, Cocody, Abidjan",
            "+225 07 59 80 11 22",
            "https://images.unsplash.com/photo-1562322140-8baeececf3df",
        ),
        salon(
            "5",
            "Coupe & Co",
            (5.2945, -3.9991),
            (4.6, 203),
            "Zone 4, Marcory, Abidjan",
            "+225 05 06 70 80 90",
            "https://images.unsplash.com/photo-1595476108010-b4d1f102b1b1",
        ),
    ]
}

fn salon(
    id: &str,
    name: &str,
    (latitude, longitude): (f64, f64),
    (rating, reviews): (f32, u32),
    address: &str,
    phone: &str,
    image: &str,
) -> PoiRecord {
    PoiRecord {
        id: id.to_owned(),
        name: name.to_owned(),
        latitude,
        longitude,
        rating,
        reviews,
        address: address.to_owned(),
        phone: phone.to_owned(),
        image: image.to_owned(),
    }
}
