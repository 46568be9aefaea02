//! Presentation contract
//!
//! The core never touches a display surface. It produces a [`DisplayState`]
//! and hands it to whatever implements [`Presenter`].

use std::fmt::Display;

use serde::Serialize;

use crate::models::{Theme, WeatherReport, format_temperature};
use crate::{Result, WeatherLookupError};

/// Placeholder shown in the temperature field when there is no reading
pub const EMPTY_TEMPERATURE: &str = " °C";

/// Every field a weather page binds, already formatted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayState {
    pub city_name: String,
    pub temperature: String,
    pub icon_path: Option<&'static str>,
    /// `None` is the neutral theme
    pub theme: Option<Theme>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Message to show the user, set only on failure
    pub error: Option<String>,
}

impl DisplayState {
    /// The neutral state: nothing from a previous lookup survives
    #[must_use]
    pub fn empty() -> Self {
        Self {
            city_name: String::new(),
            temperature: EMPTY_TEMPERATURE.to_string(),
            icon_path: None,
            theme: None,
            latitude: None,
            longitude: None,
            error: None,
        }
    }

    #[must_use]
    pub fn from_report(report: &WeatherReport) -> Self {
        Self {
            city_name: report.display_name.clone(),
            temperature: format_temperature(report.temperature_celsius),
            icon_path: Some(report.icon_path()),
            theme: Some(report.theme()),
            latitude: Some(report.coordinates.latitude),
            longitude: Some(report.coordinates.longitude),
            error: None,
        }
    }

    /// Reset every weather field and carry the error's user-facing message
    #[must_use]
    pub fn from_error(error: &WeatherLookupError) -> Self {
        Self {
            error: Some(error.user_message()),
            ..Self::empty()
        }
    }

    #[must_use]
    pub fn from_result(result: &Result<WeatherReport>) -> Self {
        match result {
            Ok(report) => Self::from_report(report),
            Err(e) => Self::from_error(e),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.city_name.is_empty() && self.icon_path.is_none() && self.theme.is_none()
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::empty()
    }
}

impl Display for DisplayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(error) = &self.error {
            return writeln!(f, "⚠️ {error}");
        }

        writeln!(f, "{}", self.city_name)?;
        writeln!(f, "   🌡️ {}", self.temperature.trim())?;
        if let Some(icon) = self.icon_path {
            writeln!(f, "   🖼️ {icon}")?;
        }
        if let Some(theme) = self.theme {
            let theme = match theme {
                Theme::Light => "light (day)",
                Theme::Dark => "dark (night)",
            };
            writeln!(f, "   🎨 {theme}")?;
        }
        if let (Some(lat), Some(lon)) = (self.latitude, self.longitude) {
            writeln!(f, "   🗺️ {lat:.4}, {lon:.4}")?;
        }
        Ok(())
    }
}

/// A display surface the UI layer provides
pub trait Presenter {
    fn render(&mut self, state: &DisplayState);

    /// Render the outcome of a lookup
    fn present(&mut self, result: &Result<WeatherReport>) {
        self.render(&DisplayState::from_result(result));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, WeatherCategory};

    fn lyon_report() -> WeatherReport {
        WeatherReport {
            category: WeatherCategory::Overcast,
            temperature_celsius: 12.5,
            display_name: "Lyon".to_string(),
            country: Some("France".to_string()),
            is_daytime: false,
            coordinates: Coordinates::new(45.764, 4.8357).unwrap(),
            observed_at: None,
        }
    }

    #[derive(Default)]
    struct Recorder(Vec<DisplayState>);

    impl Presenter for Recorder {
        fn render(&mut self, state: &DisplayState) {
            self.0.push(state.clone());
        }
    }

    #[test]
    fn test_state_from_report() {
        let state = DisplayState::from_report(&lyon_report());
        assert_eq!(state.city_name, "Lyon");
        assert_eq!(state.temperature, "12.5 °C");
        assert_eq!(state.icon_path, Some("img/couvert.png"));
        assert_eq!(state.theme, Some(Theme::Dark));
        assert_eq!(state.latitude, Some(45.764));
        assert!(state.error.is_none());
        assert!(!state.is_empty());
    }

    #[test]
    fn test_state_from_error_resets_everything() {
        let state = DisplayState::from_error(&WeatherLookupError::not_found("Atlantis"));
        assert_eq!(state.city_name, "");
        assert_eq!(state.temperature, EMPTY_TEMPERATURE);
        assert!(state.icon_path.is_none());
        assert!(state.theme.is_none());
        assert!(state.latitude.is_none() && state.longitude.is_none());
        assert_eq!(state.error.as_deref(), Some("City not found: Atlantis"));
        assert!(state.is_empty());
    }

    #[test]
    fn test_network_error_shows_generic_message() {
        let error = WeatherLookupError::network(
            "error sending request for url (https://api.open-meteo.com/v1/forecast?latitude=1)",
        );
        let state = DisplayState::from_error(&error);
        let message = state.error.unwrap();
        assert_eq!(message, error.user_message());
        assert!(message.contains("Unable to reach the weather service"));
        assert!(!message.contains("open-meteo.com"));
    }

    #[test]
    fn test_presenter_sees_no_stale_data_after_error() {
        let mut presenter = Recorder::default();
        presenter.present(&Ok(lyon_report()));
        presenter.present(&Err(WeatherLookupError::DataUnavailable));

        assert_eq!(presenter.0.len(), 2);
        assert_eq!(presenter.0[0].city_name, "Lyon");
        assert!(presenter.0[1].is_empty());
        assert_eq!(presenter.0[1].error.as_deref(), Some("Weather data unavailable"));
    }

    #[test]
    fn test_display_output() {
        let text = DisplayState::from_report(&lyon_report()).to_string();
        assert!(text.contains("Lyon"));
        assert!(text.contains("12.5 °C"));
        assert!(text.contains("dark (night)"));

        let text = DisplayState::from_error(&WeatherLookupError::EmptyInput).to_string();
        assert!(text.contains("Please enter a city name"));
    }
}
