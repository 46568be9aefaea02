//! Weather report handed to the presentation layer

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Coordinates, CurrentConditions, PlaceInfo, Theme, WeatherCategory};

/// Result of one successful lookup: a resolved place and its current weather
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherReport {
    pub category: WeatherCategory,
    /// Temperature in Celsius
    pub temperature_celsius: f64,
    pub display_name: String,
    pub country: Option<String>,
    pub is_daytime: bool,
    pub coordinates: Coordinates,
    /// Provider local time of the observation
    pub observed_at: Option<NaiveDateTime>,
}

impl WeatherReport {
    /// Combine a resolved place with the conditions fetched for it
    #[must_use]
    pub fn new(place: PlaceInfo, conditions: &CurrentConditions) -> Self {
        Self {
            category: conditions.category(),
            temperature_celsius: conditions.temperature_celsius,
            display_name: place.display_name,
            country: place.country,
            is_daytime: conditions.is_daytime,
            coordinates: place.coordinates,
            observed_at: conditions.observed_at,
        }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::for_daytime(self.is_daytime)
    }

    #[must_use]
    pub fn icon_path(&self) -> &'static str {
        self.category.icon_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_from_place_and_conditions() {
        let coords = Coordinates::new(45.7640, 4.8357).unwrap();
        let place = PlaceInfo::with_country(coords, "Lyon".to_string(), "France".to_string());
        let conditions = CurrentConditions {
            temperature_celsius: 12.3,
            provider_weather_code: 3,
            is_daytime: false,
            observed_at: None,
        };

        let report = WeatherReport::new(place, &conditions);
        assert_eq!(report.category, WeatherCategory::Overcast);
        assert_eq!(report.display_name, "Lyon");
        assert_eq!(report.country.as_deref(), Some("France"));
        assert_eq!(report.temperature_celsius, 12.3);
        assert!(!report.is_daytime);
        assert_eq!(report.theme(), Theme::Dark);
        assert_eq!(report.icon_path(), "img/couvert.png");
        assert_eq!(report.coordinates, coords);
    }
}
