//! Open-Meteo HTTP client
//!
//! Two endpoints, no API key: geocoding search and the forecast endpoint
//! queried for `current_weather` only.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::models::Coordinates;
use crate::{Result, WeatherLookupError};

pub use openmeteo::{CurrentWeatherPayload, ForecastResponse, GeocodingResponse, GeocodingResult};

/// Client for the Open-Meteo geocoding and forecast endpoints
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    client: Client,
    geocoding_url: String,
    forecast_url: String,
}

impl WeatherApiClient {
    /// Create a new client from the API configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| WeatherLookupError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            geocoding_url: config.geocoding_url.clone(),
            forecast_url: config.forecast_url.clone(),
        })
    }

    /// Search a place name, asking for the single most relevant match
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn geocode(&self, name: &str) -> Result<Vec<GeocodingResult>> {
        let url = format!(
            "{}?name={}&count=1",
            self.geocoding_url,
            urlencoding::encode(name)
        );

        let response: GeocodingResponse = self.get_json(&url).await?;
        let results = response.results.unwrap_or_default();
        debug!("Geocoding returned {} result(s)", results.len());
        Ok(results)
    }

    /// Current conditions at the given coordinates, timezone resolved by the provider
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn current_weather(&self, coordinates: Coordinates) -> Result<ForecastResponse> {
        let url = format!(
            "{}?latitude={}&longitude={}&current_weather=true&timezone=auto",
            self.forecast_url, coordinates.latitude, coordinates.longitude
        );

        self.get_json(&url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let reason = serde_json::from_str::<openmeteo::ErrorResponse>(&body)
                .ok()
                .and_then(|e| e.reason)
                .unwrap_or(body);
            warn!("Open-Meteo returned {}: {}", status, reason);
            return Err(WeatherLookupError::network(format!(
                "Open-Meteo error {status}: {reason}"
            )));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            WeatherLookupError::network(format!("Failed to parse Open-Meteo response: {e}"))
        })
    }
}

/// `OpenMeteo` API response structures
pub mod openmeteo {
    use serde::Deserialize;

    /// Geocoding response from `OpenMeteo`; `results` is omitted when nothing matched
    #[derive(Debug, Deserialize)]
    pub struct GeocodingResponse {
        pub results: Option<Vec<GeocodingResult>>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct GeocodingResult {
        pub name: String,
        pub latitude: f64,
        pub longitude: f64,
        pub country: Option<String>,
        pub admin1: Option<String>,
        pub timezone: Option<String>,
    }

    /// Forecast response, reduced to the `current_weather` block
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub latitude: Option<f64>,
        pub longitude: Option<f64>,
        pub timezone: Option<String>,
        pub current_weather: Option<CurrentWeatherPayload>,
    }

    #[derive(Debug, Deserialize)]
    pub struct CurrentWeatherPayload {
        pub temperature: Option<f64>,
        pub weathercode: Option<i32>,
        /// 1 during the day, 0 at night
        pub is_day: Option<u8>,
        pub windspeed: Option<f64>,
        /// Local time, `%Y-%m-%dT%H:%M`
        pub time: Option<String>,
    }

    /// Body sent alongside 4xx statuses
    #[derive(Debug, Deserialize)]
    pub(super) struct ErrorResponse {
        pub reason: Option<String>,
    }
}
