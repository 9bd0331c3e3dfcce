use serde::{Deserialize, Serialize};

/// Metres per degree of latitude, used for the rough roof-area estimate.
const METERS_PER_DEGREE: f64 = 111_000.0;

/// WGS84 point.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Result of resolving a free-text address.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodedAddress {
    pub formatted_address: String,
    pub location: Coordinates,
}

/// South-west / north-east corners of a building footprint.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub sw: Coordinates,
    pub ne: Coordinates,
}

impl BoundingBox {
    /// Flat-earth approximation of the box area in square metres.
    ///
    /// Good enough for a dashboard figure; it ignores the longitude shrink
    /// away from the equator.
    pub fn approximate_area_m2(&self) -> f64 {
        let lat_diff = (self.ne.latitude - self.sw.latitude).abs();
        let lng_diff = (self.ne.longitude - self.sw.longitude).abs();
        lat_diff * lng_diff * METERS_PER_DEGREE * METERS_PER_DEGREE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_area() {
        let bbox = BoundingBox {
            sw: Coordinates::new(-23.5001, -46.6001),
            ne: Coordinates::new(-23.5000, -46.6000),
        };
        let area = bbox.approximate_area_m2();
        assert!((area - 123.21).abs() < 0.01, "area was {area}");
    }

    #[test]
    fn test_bounding_box_area_is_orientation_independent() {
        let a = BoundingBox {
            sw: Coordinates::new(1.0, 1.0),
            ne: Coordinates::new(1.001, 1.002),
        };
        let b = BoundingBox { sw: a.ne, ne: a.sw };
        assert_eq!(a.approximate_area_m2(), b.approximate_area_m2());
    }

    #[test]
    fn test_geocoded_address_serializes_camel_case() {
        let addr = GeocodedAddress {
            formatted_address: "Rua Exemplo, 123".to_string(),
            location: Coordinates::new(-23.5, -46.6),
        };
        let json = serde_json::to_value(&addr).unwrap();
        assert_eq!(json["formattedAddress"], "Rua Exemplo, 123");
        assert_eq!(json["location"]["latitude"], -23.5);
    }
}
