//! Upstream payload shapes, as returned by Open-Meteo and OpenUV.
//!
//! These are deserialized as-is and handed to the normalizer / advisor; nothing here
//! applies rounding or unit conversion.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Open-Meteo `/v1/forecast` response.
///
/// The three data sections are optional at the type level so a payload that lacks one
/// can be reported as malformed instead of failing inside serde with a less useful message.
#[derive(Debug, Clone, Deserialize)]
pub struct RawForecast {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: Option<String>,
    pub current: Option<RawCurrent>,
    pub hourly: Option<RawHourly>,
    pub daily: Option<RawDaily>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCurrent {
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub apparent_temperature: f64,
    pub precipitation: f64,
    pub weather_code: i32,
    /// m/s
    pub wind_speed_10m: f64,
    pub wind_direction_10m: f64,
    pub pressure_msl: f64,
    /// meters
    pub visibility: f64,
    pub uv_index: f64,
}

/// Parallel arrays indexed by hour. Open-Meteo writes `null` for slots it has no value for.
#[derive(Debug, Clone, Deserialize)]
pub struct RawHourly {
    pub time: Vec<Option<String>>,
    pub temperature_2m: Vec<Option<f64>>,
    pub relative_humidity_2m: Vec<Option<f64>>,
    pub apparent_temperature: Vec<Option<f64>>,
    pub precipitation_probability: Vec<Option<f64>>,
    pub weather_code: Vec<Option<i32>>,
    pub wind_speed_10m: Vec<Option<f64>>,
}

/// Parallel arrays indexed by day. Same null convention as [`RawHourly`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawDaily {
    pub time: Vec<Option<String>>,
    pub temperature_2m_max: Vec<Option<f64>>,
    pub temperature_2m_min: Vec<Option<f64>>,
    pub precipitation_probability_max: Vec<Option<f64>>,
    pub weather_code: Vec<Option<i32>>,
    pub uv_index_max: Vec<Option<f64>>,
    pub sunrise: Vec<Option<String>>,
    pub sunset: Vec<Option<String>>,
}

/// OpenUV wraps every payload in `{"result": ...}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawUvEnvelope<T> {
    pub result: T,
}

/// OpenUV `/v1/uv` result.
#[derive(Debug, Clone, Deserialize)]
pub struct RawUvCurrent {
    pub uv: f64,
    pub uv_time: Option<DateTime<Utc>>,
    pub uv_max: Option<f64>,
    pub uv_max_time: Option<DateTime<Utc>>,
    pub ozone: Option<f64>,
}

/// One entry of the OpenUV `/v1/forecast` result.
#[derive(Debug, Clone, Deserialize)]
pub struct RawUvForecastDay {
    pub date: Option<String>,
    pub uv: f64,
    pub uv_time: Option<DateTime<Utc>>,
    pub uv_max: Option<f64>,
    pub uv_max_time: Option<DateTime<Utc>>,
    pub ozone: Option<f64>,
}
