use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    Coordinates,
    error::CoreError,
    raw::{RawUvCurrent, RawUvEnvelope, RawUvForecastDay},
};

use super::{UvSource, truncate_body};

pub const DEFAULT_BASE_URL: &str = "https://api.openuv.io/api/v1";

const FORECAST_DAYS: &str = "7";

/// OpenUV API. Requests carry the key in the `x-access-token` header.
#[derive(Debug, Clone)]
pub struct OpenUvProvider {
    api_key: Option<String>,
    base_url: String,
    http: Client,
}

impl OpenUvProvider {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
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

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    async fn get<T: DeserializeOwned + Send>(
        &self,
        endpoint: &str,
        coords: Coordinates,
        extra: &[(&str, &str)],
    ) -> Result<T> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow!("OpenUV API key not configured"))?;

        let url = format!("{}/{endpoint}", self.base_url);
        let lat = coords.latitude.to_string();
        let lng = coords.longitude.to_string();

        let res = self
            .http
            .get(&url)
            .query(&[("lat", lat.as_str()), ("lng", lng.as_str())])
            .query(extra)
            .header("x-access-token", api_key)
            .send()
            .await
            .with_context(|| format!("Failed to send request to OpenUV ({endpoint})"))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .with_context(|| format!("Failed to read OpenUV {endpoint} response body"))?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenUV {} request failed with status {}: {}",
                endpoint,
                status,
                truncate_body(&body),
            ));
        }

        let parsed: RawUvEnvelope<T> = serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse OpenUV {endpoint} JSON"))?;

        Ok(parsed.result)
    }
}

fn unavailable(err: anyhow::Error) -> CoreError {
    CoreError::UvUnavailable(format!("{err:#}"))
}

#[async_trait]
impl UvSource for OpenUvProvider {
    async fn fetch_current(&self, coords: Coordinates) -> Result<RawUvCurrent, CoreError> {
        tracing::debug!(%coords, "fetching OpenUV current index");
        self.get("uv", coords, &[]).await.map_err(unavailable)
    }

    async fn fetch_forecast(
        &self,
        coords: Coordinates,
    ) -> Result<Vec<RawUvForecastDay>, CoreError> {
        tracing::debug!(%coords, "fetching OpenUV forecast");
        self.get("forecast", coords, &[("days", FORECAST_DAYS)])
            .await
            .map_err(unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_key_counts_as_missing() {
        assert!(!OpenUvProvider::new(Some("   ".into())).has_api_key());
        assert!(!OpenUvProvider::new(None).has_api_key());
        assert!(OpenUvProvider::new(Some("KEY".into())).has_api_key());
    }

    #[tokio::test]
    async fn missing_key_is_uv_unavailable() {
        let provider = OpenUvProvider::new(None);
        let coords = Coordinates::new(52.52, 13.41).expect("valid");

        let err = provider.fetch_current(coords).await.unwrap_err();
        assert!(err.is_uv_unavailable());
        assert!(err.to_string().contains("OpenUV API key not configured"));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let provider = OpenUvProvider::new(None).with_base_url("http://localhost:1234/api/v1/");
        assert_eq!(provider.base_url(), "http://localhost:1234/api/v1");
    }
}
