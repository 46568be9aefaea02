//! Data models for the weather lookup
//!
//! This module contains the core domain models organized by concern:
//! - Location: Coordinates and resolved places
//! - Weather: Current conditions, icon categories and themes
//! - Report: The value object handed to the presentation layer

pub mod location;
pub mod report;
pub mod weather;

// Re-export all public types for convenient access
pub use location::{Coordinates, PlaceInfo};
pub use report::WeatherReport;
pub use weather::{
    CurrentConditions, Theme, WeatherCategory, describe_weather_code, format_temperature,
};
