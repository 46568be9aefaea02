//! Device geolocation capability
//!
//! The device position is awaited like the two network calls, so every
//! suspension point in a lookup shares the same `Result` contract.

use async_trait::async_trait;
use tracing::debug;

use crate::models::Coordinates;
use crate::{Result, WeatherLookupError};

/// Source of the device's current position.
///
/// Implementations report a refused prompt as
/// [`WeatherLookupError::PermissionDenied`] and a missing capability as
/// [`WeatherLookupError::Unavailable`].
#[async_trait]
pub trait GeolocationSource: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates>;
}

/// Position already known to the caller, e.g. passed on the command line
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(pub Coordinates);

#[async_trait]
impl GeolocationSource for FixedPosition {
    async fn current_position(&self) -> Result<Coordinates> {
        debug!("Using fixed position {}", self.0.format());
        Ok(self.0)
    }
}

/// A device without any geolocation support
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGeolocation;

#[async_trait]
impl GeolocationSource for NoGeolocation {
    async fn current_position(&self) -> Result<Coordinates> {
        Err(WeatherLookupError::Unavailable)
    }
}
