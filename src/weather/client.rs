//! HTTP client for the `OpenMeteo` forecast endpoint
//!
//! One request per call. Retries and caching are left to the caller.

use crate::SuitabilityError;
use crate::config::WeatherConfig;
use crate::models::Coordinates;
use crate::weather::open_meteo::{self, ForecastResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument, warn};

/// Source of raw forecast payloads for a coordinate
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    async fn fetch_forecast(&self, coordinates: Coordinates) -> crate::Result<ForecastResponse>;
}

/// Forecast client for the `OpenMeteo` API
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Create a new client with the configured timeout
    pub fn new(config: WeatherConfig) -> crate::Result<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("outdoor-suitability/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SuitabilityError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = coordinates.latitude(), lon = coordinates.longitude()))]
    async fn fetch_forecast(&self, coordinates: Coordinates) -> crate::Result<ForecastResponse> {
        info!(
            "Fetching forecast for coordinates: {}",
            coordinates.format_coordinates()
        );
        let start_time = Instant::now();

        let url = self.forecast_url();
        let query = open_meteo::forecast_query(
            coordinates.latitude(),
            coordinates.longitude(),
            self.config.forecast_days,
        );
        debug!("OpenMeteo API request URL: {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                warn!("Network error calling OpenMeteo: {}", e);
                SuitabilityError::network(format!("Request to {url} failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("OpenMeteo responded with HTTP {}", status);
            return Err(SuitabilityError::http_status(
                format!(
                    "API request failed with status: {} - {}",
                    status,
                    status.canonical_reason().unwrap_or("Unknown error")
                ),
                status.as_u16(),
            ));
        }

        let body = response.text().await.map_err(|e| {
            SuitabilityError::network(format!("Failed to read forecast response body: {e}"))
        })?;

        let parse_start = Instant::now();
        let forecast: ForecastResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse forecast response: {}", e);
            SuitabilityError::parse(format!("Invalid forecast data received from OpenMeteo: {e}"))
        })?;

        let total_duration = start_time.elapsed();
        info!(
            "Retrieved forecast in {:.3}s (parse: {:.3}s)",
            total_duration.as_secs_f64(),
            parse_start.elapsed().as_secs_f64()
        );

        if total_duration.as_secs() > 5 {
            warn!(
                "Slow forecast API response: {:.3}s",
                total_duration.as_secs_f64()
            );
        }

        Ok(forecast)
    }
}
