use crate::{
    Config, Coordinates,
    error::CoreError,
    provider::{open_meteo::OpenMeteoProvider, openuv::OpenUvProvider},
    raw::{RawForecast, RawUvCurrent, RawUvForecastDay},
};
use async_trait::async_trait;
use std::{convert::TryFrom, fmt::Debug};

pub mod open_meteo;
pub mod openuv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    OpenMeteo,
    OpenUv,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::OpenMeteo => "open-meteo",
            ProviderId::OpenUv => "openuv",
        }
    }

    pub const fn all() -> &'static [ProviderId] {
        &[ProviderId::OpenMeteo, ProviderId::OpenUv]
    }

    /// Whether the provider refuses requests without an API key.
    pub fn requires_api_key(&self) -> bool {
        matches!(self, ProviderId::OpenUv)
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProviderId {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "open-meteo" | "openmeteo" => Ok(ProviderId::OpenMeteo),
            "openuv" => Ok(ProviderId::OpenUv),
            _ => Err(anyhow::anyhow!(
                "Unknown provider '{value}'. Supported providers: open-meteo, openuv."
            )),
        }
    }
}

/// Source of raw forecast payloads.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch_forecast(&self, coords: Coordinates) -> Result<RawForecast, CoreError>;
}

/// Source of raw UV payloads. Every failure is reported as `CoreError::UvUnavailable`.
#[async_trait]
pub trait UvSource: Send + Sync + Debug {
    async fn fetch_current(&self, coords: Coordinates) -> Result<RawUvCurrent, CoreError>;

    async fn fetch_forecast(&self, coords: Coordinates)
    -> Result<Vec<RawUvForecastDay>, CoreError>;
}

/// Construct the weather source from config.
pub fn weather_source_from_config(config: &Config) -> OpenMeteoProvider {
    let provider = OpenMeteoProvider::new();
    match config.provider_base_url(ProviderId::OpenMeteo) {
        Some(url) => provider.with_base_url(url),
        None => provider,
    }
}

/// Construct the UV source from config.
///
/// A missing API key is not an error here: the provider reports `UvUnavailable` on use so
/// that weather can still be served.
pub fn uv_source_from_config(config: &Config) -> OpenUvProvider {
    let provider = OpenUvProvider::new(config.openuv_api_key());
    match config.provider_base_url(ProviderId::OpenUv) {
        Some(url) => provider.with_base_url(url),
        None => provider,
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
