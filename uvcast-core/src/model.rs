use std::{fmt, str::FromStr};

use anyhow::{Context, anyhow, ensure};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

use crate::{recommend::RecommendationBundle, uv::SafeExposure};

/// A point on the globe, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> anyhow::Result<Self> {
        ensure!(
            (-90.0..=90.0).contains(&latitude),
            "Latitude {latitude} is out of range (-90..=90)"
        );
        ensure!(
            (-180.0..=180.0).contains(&longitude),
            "Longitude {longitude} is out of range (-180..=180)"
        );
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// Parses `"lat, lon"`, e.g. `"52.52, 13.41"`.
impl FromStr for Coordinates {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("Expected coordinates as \"lat, lon\", got '{s}'"))?;

        let latitude: f64 = lat
            .trim()
            .parse()
            .with_context(|| format!("Invalid latitude '{}'", lat.trim()))?;
        let longitude: f64 = lon
            .trim()
            .parse()
            .with_context(|| format!("Invalid longitude '{}'", lon.trim()))?;

        Coordinates::new(latitude, longitude)
    }
}

/// Current conditions, rounded for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeather {
    pub temperature: i64,
    pub feels_like: i64,
    pub humidity: i64,
    /// hPa
    pub pressure: i64,
    /// km/h
    pub wind_speed: i64,
    /// degrees
    pub wind_direction: f64,
    /// mm
    pub precipitation: f64,
    /// km
    pub visibility: f64,
    pub uv_index: f64,
    pub description: &'static str,
    pub icon: &'static str,
}

/// One forecast hour. Values the provider left empty stay `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyPoint {
    /// Local time at the forecast location.
    pub time: NaiveDateTime,
    pub temperature: Option<i64>,
    pub feels_like: Option<i64>,
    pub humidity: Option<i64>,
    /// Percent.
    #[serde(rename = "precipitation")]
    pub precipitation_probability: Option<i64>,
    /// km/h
    pub wind_speed: Option<i64>,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemperatureRange {
    pub max: Option<i64>,
    pub min: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub temp: TemperatureRange,
    /// Percent.
    #[serde(rename = "precipitation")]
    pub precipitation_probability: Option<i64>,
    pub uv_index: Option<f64>,
    /// `None` during polar day and night.
    pub sunrise: Option<NaiveDateTime>,
    pub sunset: Option<NaiveDateTime>,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Where the forecast was computed for, as echoed by the provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastLocation {
    pub lat: f64,
    pub lon: f64,
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub current: CurrentWeather,
    pub hourly: Vec<HourlyPoint>,
    pub daily: Vec<DailyPoint>,
    pub location: ForecastLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RainOutlook {
    pub will_rain: bool,
    /// Percent.
    pub probability: i64,
    pub description: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UvReading {
    pub uv: f64,
    pub uv_time: Option<DateTime<Utc>>,
    pub uv_max: f64,
    pub uv_max_time: Option<DateTime<Utc>>,
    pub ozone: Option<f64>,
    pub safe_exposure: SafeExposure,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UvForecastDay {
    pub date: Option<NaiveDate>,
    pub uv: f64,
    pub uv_max: f64,
    pub uv_max_time: Option<DateTime<Utc>>,
    pub ozone: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UvReport {
    pub current: UvReading,
    pub forecast: Vec<UvForecastDay>,
    pub recommendations: RecommendationBundle,
}

/// Combined result handed to the presentation layer.
///
/// `uv` and `uv_error` are mutually exclusive: exactly one is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherAndUv {
    pub weather: WeatherReport,
    pub uv: Option<UvReport>,
    pub uv_error: Option<String>,
}
