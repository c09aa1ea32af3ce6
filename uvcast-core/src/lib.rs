//! Core library for the `uvcast` CLI.
//!
//! This crate defines:
//! - Normalization of Open-Meteo forecasts into display-ready weather
//! - UV readings, safe exposure estimates and protection advice
//! - Fetchers for Open-Meteo and OpenUV, and the combined lookup
//! - Configuration & credentials handling
//!
//! The transformation modules (`normalize`, `uv`, `recommend`, `weather_code`) are pure and
//! can be used without any of the networking parts.

pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod provider;
pub mod raw;
pub mod recommend;
pub mod service;
pub mod units;
pub mod uv;
pub mod weather_code;

pub use config::{Config, ProviderConfig};
pub use error::CoreError;
pub use model::{
    Coordinates, CurrentWeather, DailyPoint, HourlyPoint, RainOutlook, UvForecastDay, UvReading,
    UvReport, WeatherAndUv, WeatherReport,
};
pub use normalize::{normalize_forecast, rain_tomorrow};
pub use provider::{ProviderId, UvSource, WeatherSource};
pub use recommend::{RecommendationBundle, UvBand, recommendations};
pub use service::{compute_weather_and_uv, uv_only, weather_only};
pub use uv::{Exposure, SafeExposure, SkinType, advise, safe_exposure};
