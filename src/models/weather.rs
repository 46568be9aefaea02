//! Current conditions model and weather code classification

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Current weather snapshot for one place
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CurrentConditions {
    /// Temperature in Celsius
    pub temperature_celsius: f64,
    /// WMO weather code from the provider
    pub provider_weather_code: i32,
    pub is_daytime: bool,
    /// Provider local time of the observation
    pub observed_at: Option<NaiveDateTime>,
}

impl CurrentConditions {
    #[must_use]
    pub fn category(&self) -> WeatherCategory {
        WeatherCategory::classify(self.provider_weather_code)
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::for_daytime(self.is_daytime)
    }

    #[must_use]
    pub fn format_temperature(&self) -> String {
        format_temperature(self.temperature_celsius)
    }
}

/// Temperature text as shown to the user: shortest decimal form, then `" °C"`
#[must_use]
pub fn format_temperature(celsius: f64) -> String {
    format!("{celsius} °C")
}

/// Icon category shown for a provider weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCategory {
    Clear,
    Overcast,
    Storm,
    Cloudy,
    LightPrecipitation,
}

impl WeatherCategory {
    pub const ALL: [WeatherCategory; 5] = [
        Self::Clear,
        Self::Overcast,
        Self::Storm,
        Self::Cloudy,
        Self::LightPrecipitation,
    ];

    /// Map a WMO weather code to its icon category. Total: unknown codes are `Overcast`.
    #[must_use]
    pub fn classify(code: i32) -> Self {
        match code {
            0 | 1 => Self::Clear,
            2 | 3 => Self::Overcast,
            45 | 48 => Self::Overcast,
            51 | 53 | 55 | 61 | 63 | 65 => Self::Cloudy,
            // snow codes, shown with the rain-cloud asset
            71 | 73 | 75 => Self::LightPrecipitation,
            95 | 96 | 99 => Self::Storm,
            _ => Self::Overcast,
        }
    }

    /// Icon asset path relative to the page root
    #[must_use]
    pub fn icon_path(&self) -> &'static str {
        match self {
            Self::Clear => "img/soleil.png",
            Self::Overcast => "img/couvert.png",
            Self::Storm => "img/orage.png",
            Self::Cloudy => "img/nuageux.png",
            Self::LightPrecipitation => "img/nuage-pluie.png",
        }
    }
}

/// Light or dark page theme, picked from the day/night flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn for_daytime(is_daytime: bool) -> Self {
        if is_daytime { Self::Light } else { Self::Dark }
    }
}

/// Convert a WMO weather code to a human-readable description
#[must_use]
pub fn describe_weather_code(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snow fall",
        73 => "Moderate snow fall",
        75 => "Heavy snow fall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown",
    }
}
