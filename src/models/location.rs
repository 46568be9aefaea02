//! Location model for geographic coordinates and resolved places

use serde::{Deserialize, Serialize};

use crate::{Result, WeatherLookupError};

/// Latitude/longitude pair in decimal degrees.
///
/// Fields are public, so a literal can hold anything; [`Coordinates::validate`]
/// runs before the pair is used for a request. Deserialization goes through
/// [`Coordinates::new`].
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(try_from = "RawCoordinates")]
pub struct Coordinates {
    /// Latitude in decimal degrees, -90..=90
    pub latitude: f64,
    /// Longitude in decimal degrees, -180..=180
    pub longitude: f64,
}

impl Coordinates {
    /// Create validated coordinates
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherLookupError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Re-check the range, for values built without [`Coordinates::new`]
    pub fn validate(self) -> Result<Self> {
        Self::new(self.latitude, self.longitude)
    }

    /// Format as a coordinates string
    #[must_use]
    pub fn format(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[derive(Deserialize)]
struct RawCoordinates {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinates> for Coordinates {
    type Error = WeatherLookupError;

    fn try_from(raw: RawCoordinates) -> Result<Self> {
        Self::new(raw.latitude, raw.longitude)
    }
}

/// A resolved place, produced once per lookup
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlaceInfo {
    pub coordinates: Coordinates,
    /// Location name (city, or the device label)
    pub display_name: String,
    /// Country name as reported by the geocoder
    pub country: Option<String>,
}

impl PlaceInfo {
    /// Create a new place without a country
    #[must_use]
    pub fn new(coordinates: Coordinates, display_name: String) -> Self {
        Self {
            coordinates,
            display_name,
            country: None,
        }
    }

    /// Create a place with country
    #[must_use]
    pub fn with_country(coordinates: Coordinates, display_name: String, country: String) -> Self {
        Self {
            coordinates,
            display_name,
            country: Some(country),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(90.0, 180.0)]
    #[case(-90.0, -180.0)]
    #[case(48.8566, 2.3522)]
    fn test_coordinates_in_range(#[case] lat: f64, #[case] lon: f64) {
        let coords = Coordinates::new(lat, lon).unwrap();
        assert_eq!(coords.latitude, lat);
        assert_eq!(coords.longitude, lon);
    }

    #[rstest]
    #[case(90.1, 0.0)]
    #[case(-91.0, 0.0)]
    #[case(0.0, 180.5)]
    #[case(0.0, -200.0)]
    #[case(f64::NAN, 0.0)]
    fn test_coordinates_out_of_range(#[case] lat: f64, #[case] lon: f64) {
        let err = Coordinates::new(lat, lon).unwrap_err();
        assert!(matches!(err, WeatherLookupError::InvalidCoordinates { .. }));
    }

    #[test]
    fn test_validate_literal_out_of_range() {
        let literal = Coordinates {
            latitude: 200.0,
            longitude: 0.0,
        };
        assert!(matches!(
            literal.validate(),
            Err(WeatherLookupError::InvalidCoordinates { .. })
        ));

        let ok = Coordinates::new(10.0, 20.0).unwrap();
        assert_eq!(ok.validate().unwrap(), ok);
    }

    #[test]
    fn test_deserialize_checks_range() {
        let coords: Coordinates =
            serde_json::from_value(serde_json::json!({"latitude": 48.8566, "longitude": 2.3522}))
                .unwrap();
        assert_eq!(coords.latitude, 48.8566);

        let result = serde_json::from_value::<Coordinates>(
            serde_json::json!({"latitude": 200.0, "longitude": 0.0}),
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid coordinates"));
    }

    #[test]
    fn test_coordinates_format() {
        let coords = Coordinates::new(45.764_043, 4.835_659).unwrap();
        assert_eq!(coords.format(), "45.7640, 4.8357");
    }

    #[test]
    fn test_place_with_country() {
        let coords = Coordinates::new(48.8566, 2.3522).unwrap();
        let place = PlaceInfo::with_country(coords, "Paris".to_string(), "France".to_string());
        assert_eq!(place.country.as_deref(), Some("France"));
        assert_eq!(PlaceInfo::new(coords, "Paris".to_string()).country, None);
    }
}
