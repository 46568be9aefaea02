use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::api::{CurrentWeatherPayload, WeatherApiClient};
use crate::models::{Coordinates, CurrentConditions, describe_weather_code};
use crate::{Result, WeatherLookupError};

/// Fetch current conditions at `coordinates`.
///
/// A response without a complete `current_weather` block is
/// [`WeatherLookupError::DataUnavailable`]; transport problems stay `Network`.
/// Out-of-range coordinates fail before any request is sent.
pub async fn fetch_current_conditions(
    api_client: &WeatherApiClient,
    coordinates: Coordinates,
) -> Result<CurrentConditions> {
    let coordinates = coordinates.validate()?;
    let response = api_client.current_weather(coordinates).await?;

    let Some(payload) = response.current_weather else {
        warn!(
            "No current_weather block for ({})",
            coordinates.format()
        );
        return Err(WeatherLookupError::DataUnavailable);
    };

    let conditions = conditions_from_payload(payload)?;
    debug!(
        "Current weather at ({}): {} ({}), {}",
        coordinates.format(),
        describe_weather_code(conditions.provider_weather_code),
        conditions.provider_weather_code,
        conditions.format_temperature()
    );
    Ok(conditions)
}

fn conditions_from_payload(payload: CurrentWeatherPayload) -> Result<CurrentConditions> {
    let (Some(temperature), Some(weathercode), Some(is_day)) =
        (payload.temperature, payload.weathercode, payload.is_day)
    else {
        warn!("Incomplete current_weather block: {:?}", payload);
        return Err(WeatherLookupError::DataUnavailable);
    };

    let observed_at = payload
        .time
        .as_deref()
        .and_then(|t| NaiveDateTime::parse_from_str(t, "%Y-%m-%dT%H:%M").ok());

    Ok(CurrentConditions {
        temperature_celsius: temperature,
        provider_weather_code: weathercode,
        is_daytime: is_day == 1,
        observed_at,
    })
}
