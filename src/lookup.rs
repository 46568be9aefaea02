//! Weather Lookup Module
//!
//! Chains location resolution, the current-weather fetch and classification
//! into a single `WeatherReport`. Any stage failing ends the run.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info};

use crate::geolocation::GeolocationSource;
use crate::location_resolver::{LocationInput, LocationResolver};
use crate::models::{PlaceInfo, WeatherReport};
use crate::{Result, WeatherApiClient, weather};

/// Stateless lookup pipeline: place, then current conditions, then report
#[derive(Debug, Clone)]
pub struct WeatherLookupService {
    api_client: WeatherApiClient,
}

impl WeatherLookupService {
    #[must_use]
    pub fn new(api_client: WeatherApiClient) -> Self {
        Self { api_client }
    }

    /// Run the full pipeline for a name or device input
    pub async fn lookup(&self, location_input: LocationInput) -> Result<WeatherReport> {
        let place = LocationResolver::resolve_location(&self.api_client, location_input).await?;
        self.report_for(place).await
    }

    pub async fn lookup_by_name(&self, query: &str) -> Result<WeatherReport> {
        let place = LocationResolver::resolve_by_name(&self.api_client, query).await?;
        self.report_for(place).await
    }

    /// Ask the device for its position, then look up the weather there
    pub async fn lookup_from_device(
        &self,
        source: &dyn GeolocationSource,
    ) -> Result<WeatherReport> {
        let place = LocationResolver::resolve_from_source(source).await?;
        self.report_for(place).await
    }

    async fn report_for(&self, place: PlaceInfo) -> Result<WeatherReport> {
        let conditions =
            weather::fetch_current_conditions(&self.api_client, place.coordinates).await?;
        let report = WeatherReport::new(place, &conditions);

        info!(
            "Weather for {}: {:?}, {}, {}",
            report.display_name,
            report.category,
            conditions.format_temperature(),
            if report.is_daytime { "day" } else { "night" }
        );
        Ok(report)
    }
}

/// One user-facing search box: only the most recently started search may
/// deliver a result.
#[derive(Debug)]
pub struct LookupSession {
    service: WeatherLookupService,
    latest: AtomicU64,
}

impl LookupSession {
    #[must_use]
    pub fn new(service: WeatherLookupService) -> Self {
        Self {
            service,
            latest: AtomicU64::new(0),
        }
    }

    /// Start a search. Returns `None` when a newer search was started before
    /// this one finished; its outcome, success or error, is dropped.
    ///
    /// The search counts as started when this is called, not when the
    /// returned future is first polled.
    pub fn search(
        &self,
        location_input: LocationInput,
    ) -> impl Future<Output = Option<Result<WeatherReport>>> + '_ {
        let ticket = self.next_ticket();
        async move {
            let outcome = self.service.lookup(location_input).await;
            self.deliver(ticket, outcome)
        }
    }

    /// Same as [`search`](Self::search), for a position from the device
    pub fn search_from_device<'a>(
        &'a self,
        source: &'a dyn GeolocationSource,
    ) -> impl Future<Output = Option<Result<WeatherReport>>> + 'a {
        let ticket = self.next_ticket();
        async move {
            let outcome = self.service.lookup_from_device(source).await;
            self.deliver(ticket, outcome)
        }
    }

    fn next_ticket(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn deliver(
        &self,
        ticket: u64,
        outcome: Result<WeatherReport>,
    ) -> Option<Result<WeatherReport>> {
        let latest = self.latest.load(Ordering::SeqCst);
        if ticket == latest {
            Some(outcome)
        } else {
            debug!("Discarding search #{} superseded by #{}", ticket, latest);
            None
        }
    }
}
