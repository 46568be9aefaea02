//! Error types and handling for the weather lookup pipeline

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every way a lookup can fail. All of them end the current run.
#[derive(Error, Debug)]
pub enum WeatherLookupError {
    /// The place name was blank after trimming
    #[error("Please enter a city name")]
    EmptyInput,

    /// Geocoding returned no results
    #[error("City not found: {query}")]
    NotFound { query: String },

    /// The weather provider answered without usable current conditions
    #[error("Weather data unavailable")]
    DataUnavailable,

    /// Transport failure, timeout, error status or malformed body
    #[error("Network error: {message}")]
    Network { message: String },

    /// The geolocation capability was refused
    #[error("Location permission denied")]
    PermissionDenied,

    /// No geolocation capability on this device
    #[error("Geolocation is not available")]
    Unavailable,

    #[error("Invalid coordinates: lat={latitude}, lon={longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Stable tag for each error kind, for UI layers that branch on the failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    EmptyInput,
    NotFound,
    DataUnavailable,
    Network,
    PermissionDenied,
    Unavailable,
    InvalidCoordinates,
    Config,
}

impl WeatherLookupError {
    /// Create a new not-found error for a geocoding query
    pub fn not_found<S: Into<String>>(query: S) -> Self {
        Self::NotFound {
            query: query.into(),
        }
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyInput => ErrorCode::EmptyInput,
            Self::NotFound { .. } => ErrorCode::NotFound,
            Self::DataUnavailable => ErrorCode::DataUnavailable,
            Self::Network { .. } => ErrorCode::Network,
            Self::PermissionDenied => ErrorCode::PermissionDenied,
            Self::Unavailable => ErrorCode::Unavailable,
            Self::InvalidCoordinates { .. } => ErrorCode::InvalidCoordinates,
            Self::Config { .. } => ErrorCode::Config,
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyInput | Self::NotFound { .. } | Self::DataUnavailable => self.to_string(),
            Self::Network { .. } => {
                "Unable to reach the weather service. Please check your internet connection."
                    .to_string()
            }
            Self::PermissionDenied | Self::Unavailable => {
                format!("Unable to get your position: {self}")
            }
            Self::InvalidCoordinates { .. } => self.to_string(),
            Self::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for WeatherLookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::network(format!("request timed out: {err}"))
        } else if err.is_decode() {
            Self::network(format!("malformed response: {err}"))
        } else {
            Self::network(err.to_string())
        }
    }
}
