//! Record builders shared by unit and behaviour tests.

use crate::PoiRecord;

/// A valid record named after its identifier at the given position.
#[must_use]
pub fn record(id: &str, latitude: f64, longitude: f64) -> PoiRecord {
    PoiRecord {
        id: id.to_owned(),
        name: format!("Salon {id}"),
        latitude,
        longitude,
        rating: 4.0,
        reviews: 10,
        address: format!("{id} Test Street"),
        phone: "+225 00 00 00 00".to_owned(),
        image: format!("https://example.com/{id}.jpg"),
    }
}
