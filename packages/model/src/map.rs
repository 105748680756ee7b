//! Map geometry and place types.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// The visible map window: a center point plus the spans that stay fixed
/// when only the center moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapRegion {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Default for MapRegion {
    fn default() -> Self {
        Self {
            latitude: 37.78825,
            longitude: -122.4324,
            latitude_delta: 0.0922,
            longitude_delta: 0.0421,
        }
    }
}

impl MapRegion {
    /// Re-centers the window on `point` without touching the zoom spans.
    pub fn centered_on(self, point: GeoPoint) -> Self {
        Self {
            latitude: point.latitude,
            longitude: point.longitude,
            ..self
        }
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// One hit from the place keyword search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Place {
    pub fn location(&self) -> GeoPoint {
        GeoPoint {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_region() {
        let region = MapRegion::default();
        assert_eq!(region.latitude, 37.78825);
        assert_eq!(region.longitude, -122.4324);
        assert_eq!(region.latitude_delta, 0.0922);
        assert_eq!(region.longitude_delta, 0.0421);
    }

    #[test]
    fn test_centered_on_keeps_deltas() {
        let region = MapRegion::default().centered_on(GeoPoint {
            latitude: 37.5665,
            longitude: 126.978,
        });
        assert_eq!(region.latitude, 37.5665);
        assert_eq!(region.longitude, 126.978);
        assert_eq!(region.latitude_delta, 0.0922);
        assert_eq!(region.longitude_delta, 0.0421);
    }
}
