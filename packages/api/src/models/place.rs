//! Place rows backing the map keyword search.

#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// A row from the seeded `places` table.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct PlaceRow {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[cfg(feature = "server")]
impl PlaceRow {
    /// Convert to the shared place type for client consumption.
    pub fn to_place(&self) -> model::Place {
        model::Place {
            id: self.id.to_string(),
            name: self.name.clone(),
            address: self.address.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}
