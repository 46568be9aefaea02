//! Location Resolution Module
//!
//! This module turns a typed place name or a device position into a
//! `PlaceInfo` the weather fetcher can work with.

use crate::geolocation::GeolocationSource;
use crate::models::{Coordinates, PlaceInfo};
use crate::{Result, WeatherApiClient, WeatherLookupError};
use tracing::debug;

/// Display name used for positions reported by the device
pub const CURRENT_LOCATION_LABEL: &str = "current location";

/// What the user asked to look up
#[derive(Debug, Clone, PartialEq)]
pub enum LocationInput {
    /// Free-text place name, geocoded
    Name(String),
    /// Coordinates already obtained from the device
    Device(Coordinates),
}

/// Service for resolving location inputs
pub struct LocationResolver;

impl LocationResolver {
    /// Resolve a location input into a structured place
    pub async fn resolve_location(
        api_client: &WeatherApiClient,
        location_input: LocationInput,
    ) -> Result<PlaceInfo> {
        debug!("Resolving location input: {:?}", location_input);

        let place = match location_input {
            LocationInput::Name(name) => Self::resolve_by_name(api_client, &name).await?,
            LocationInput::Device(coordinates) => Self::resolve_by_device(coordinates),
        };

        debug!(
            "Resolved location: {} at ({})",
            place.display_name,
            place.coordinates.format()
        );

        Ok(place)
    }

    /// Resolve a location name to coordinates via geocoding.
    ///
    /// Blank input is rejected before any request is made.
    pub async fn resolve_by_name(api_client: &WeatherApiClient, query: &str) -> Result<PlaceInfo> {
        let query = query.trim();
        if query.is_empty() {
            return Err(WeatherLookupError::EmptyInput);
        }

        debug!("Geocoding location name: {}", query);

        // count=1, so the first result is the most relevant one
        let geocoding = api_client
            .geocode(query)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| WeatherLookupError::not_found(query))?;

        debug!(
            "Found location: {} ({:.4}, {:.4})",
            geocoding.name, geocoding.latitude, geocoding.longitude
        );

        let coordinates = Coordinates::new(geocoding.latitude, geocoding.longitude)?;
        Ok(PlaceInfo {
            coordinates,
            display_name: geocoding.name,
            country: geocoding.country,
        })
    }

    /// Wrap device coordinates under the fixed "current location" label
    #[must_use]
    pub fn resolve_by_device(coordinates: Coordinates) -> PlaceInfo {
        PlaceInfo::new(coordinates, CURRENT_LOCATION_LABEL.to_string())
    }

    /// Ask the geolocation source for a position, then resolve it as a device location
    pub async fn resolve_from_source(source: &dyn GeolocationSource) -> Result<PlaceInfo> {
        let coordinates = source.current_position().await?.validate()?;
        Ok(Self::resolve_by_device(coordinates))
    }
}
