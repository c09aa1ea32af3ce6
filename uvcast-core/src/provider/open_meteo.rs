use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;

use crate::{Coordinates, error::CoreError, raw::RawForecast};

use super::{WeatherSource, truncate_body};

pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1";

const CURRENT_VARIABLES: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,\
precipitation,weather_code,wind_speed_10m,wind_direction_10m,pressure_msl,visibility,uv_index";

const HOURLY_VARIABLES: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,\
precipitation_probability,weather_code,wind_speed_10m";

const DAILY_VARIABLES: &str = "temperature_2m_max,temperature_2m_min,\
precipitation_probability_max,weather_code,uv_index_max,sunrise,sunset";

const FORECAST_DAYS: &str = "8";

/// Open-Meteo forecast API. No credential needed.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    base_url: String,
    http: Client,
}

impl Default for OpenMeteoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenMeteoProvider {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_body(&self, coords: Coordinates) -> Result<String> {
        let url = format!("{}/forecast", self.base_url);
        let latitude = coords.latitude.to_string();
        let longitude = coords.longitude.to_string();

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("current", CURRENT_VARIABLES),
                ("hourly", HOURLY_VARIABLES),
                ("daily", DAILY_VARIABLES),
                ("wind_speed_unit", "ms"),
                ("timezone", "auto"),
                ("forecast_days", FORECAST_DAYS),
            ])
            .send()
            .await
            .context("Failed to send request to Open-Meteo (forecast)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read Open-Meteo forecast response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "Open-Meteo forecast request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        Ok(body)
    }
}

#[async_trait]
impl WeatherSource for OpenMeteoProvider {
    async fn fetch_forecast(&self, coords: Coordinates) -> Result<RawForecast, CoreError> {
        tracing::debug!(%coords, "fetching Open-Meteo forecast");

        let body = self
            .fetch_body(coords)
            .await
            .map_err(|e| CoreError::UpstreamUnreachable(format!("{e:#}")))?;

        serde_json::from_str(&body)
            .context("Failed to parse Open-Meteo forecast JSON")
            .map_err(|e| CoreError::MalformedUpstreamData(format!("{e:#}")))
    }
}
