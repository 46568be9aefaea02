//! `weather-lookup` - current weather for a city or the device position
//!
//! This library resolves a place name (or device coordinates), fetches the
//! current conditions from Open-Meteo, and classifies them into an icon
//! category and a light/dark theme for a presentation layer.

pub mod api;
pub mod config;
pub mod error;
pub mod geolocation;
pub mod location_resolver;
pub mod logging;
pub mod lookup;
pub mod models;
pub mod presentation;
pub mod weather;

// Re-export core types for public API
pub use api::WeatherApiClient;
pub use crate::config::WeatherLookupConfig;
pub use error::{ErrorCode, WeatherLookupError};
pub use geolocation::{FixedPosition, GeolocationSource, NoGeolocation};
pub use location_resolver::{CURRENT_LOCATION_LABEL, LocationInput, LocationResolver};
pub use lookup::{LookupSession, WeatherLookupService};
pub use models::{Coordinates, CurrentConditions, PlaceInfo, Theme, WeatherCategory, WeatherReport};
pub use presentation::{DisplayState, Presenter};
pub use weather::fetch_current_conditions;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeatherLookupError>;

/// Classify a provider weather code; see [`WeatherCategory::classify`]
#[must_use]
pub fn classify(provider_weather_code: i32) -> WeatherCategory {
    WeatherCategory::classify(provider_weather_code)
}
