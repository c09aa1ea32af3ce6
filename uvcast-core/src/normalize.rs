//! Turns a raw Open-Meteo forecast into display-ready weather.
//!
//! Pure: no I/O, no shared state. Parallel arrays that disagree in length are truncated
//! to the shortest one rather than rejected; only a missing top-level section is an error.
//! A `null` slot becomes a `None` field, except a `null` timestamp, which drops the row.

use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    error::CoreError,
    model::{
        CurrentWeather, DailyPoint, ForecastLocation, HourlyPoint, RainOutlook, TemperatureRange,
        WeatherReport,
    },
    raw::{RawCurrent, RawDaily, RawForecast, RawHourly},
    units::{meters_to_km, mps_to_kmh, round_whole},
    weather_code,
};

/// At most this many hourly points are kept.
pub const MAX_HOURLY_POINTS: usize = 24;

/// Tomorrow counts as rainy above this precipitation probability (percent).
pub const RAIN_PROBABILITY_THRESHOLD: i64 = 30;

pub fn normalize_forecast(raw: &RawForecast) -> Result<WeatherReport, CoreError> {
    let current = raw.current.as_ref().ok_or_else(|| missing_section("current"))?;
    let hourly = raw.hourly.as_ref().ok_or_else(|| missing_section("hourly"))?;
    let daily = raw.daily.as_ref().ok_or_else(|| missing_section("daily"))?;

    Ok(WeatherReport {
        current: format_current(current),
        hourly: format_hourly(hourly)?,
        daily: format_daily(daily)?,
        location: ForecastLocation {
            lat: raw.latitude,
            lon: raw.longitude,
            timezone: raw.timezone.clone(),
        },
    })
}

pub fn format_current(current: &RawCurrent) -> CurrentWeather {
    let code = weather_code::lookup(current.weather_code);

    CurrentWeather {
        temperature: round_whole(current.temperature_2m),
        feels_like: round_whole(current.apparent_temperature),
        humidity: round_whole(current.relative_humidity_2m),
        pressure: round_whole(current.pressure_msl),
        wind_speed: mps_to_kmh(current.wind_speed_10m),
        wind_direction: current.wind_direction_10m,
        precipitation: current.precipitation,
        visibility: meters_to_km(current.visibility),
        uv_index: current.uv_index,
        description: code.description,
        icon: code.icon,
    }
}

pub fn format_hourly(hourly: &RawHourly) -> Result<Vec<HourlyPoint>, CoreError> {
    let len = [
        hourly.time.len(),
        hourly.temperature_2m.len(),
        hourly.relative_humidity_2m.len(),
        hourly.apparent_temperature.len(),
        hourly.precipitation_probability.len(),
        hourly.weather_code.len(),
        hourly.wind_speed_10m.len(),
    ]
    .into_iter()
    .min()
    .unwrap_or(0);

    (0..len)
        .filter_map(|i| hourly.time[i].as_deref().map(|time| (i, time)))
        .take(MAX_HOURLY_POINTS)
        .map(|(i, time)| {
            let code = weather_code::lookup_opt(hourly.weather_code[i]);
            Ok(HourlyPoint {
                time: parse_local_datetime(time)?,
                temperature: hourly.temperature_2m[i].map(round_whole),
                feels_like: hourly.apparent_temperature[i].map(round_whole),
                humidity: hourly.relative_humidity_2m[i].map(round_whole),
                precipitation_probability: hourly.precipitation_probability[i].map(round_whole),
                wind_speed: hourly.wind_speed_10m[i].map(mps_to_kmh),
                description: code.description,
                icon: code.icon,
            })
        })
        .collect()
}

pub fn format_daily(daily: &RawDaily) -> Result<Vec<DailyPoint>, CoreError> {
    let len = [
        daily.time.len(),
        daily.temperature_2m_max.len(),
        daily.temperature_2m_min.len(),
        daily.precipitation_probability_max.len(),
        daily.weather_code.len(),
        daily.uv_index_max.len(),
        daily.sunrise.len(),
        daily.sunset.len(),
    ]
    .into_iter()
    .min()
    .unwrap_or(0);

    (0..len)
        .filter_map(|i| daily.time[i].as_deref().map(|date| (i, date)))
        .map(|(i, date)| {
            let code = weather_code::lookup_opt(daily.weather_code[i]);
            Ok(DailyPoint {
                date: parse_local_date(date)?,
                temp: TemperatureRange {
                    max: daily.temperature_2m_max[i].map(round_whole),
                    min: daily.temperature_2m_min[i].map(round_whole),
                },
                precipitation_probability: daily.precipitation_probability_max[i]
                    .map(round_whole),
                uv_index: daily.uv_index_max[i],
                sunrise: daily.sunrise[i].as_deref().map(parse_local_datetime).transpose()?,
                sunset: daily.sunset[i].as_deref().map(parse_local_datetime).transpose()?,
                description: code.description,
                icon: code.icon,
            })
        })
        .collect()
}

/// Will it rain tomorrow? Looks at the second daily entry only.
pub fn rain_tomorrow(daily: &[DailyPoint]) -> RainOutlook {
    let Some(tomorrow) = daily.get(1) else {
        return RainOutlook {
            will_rain: false,
            probability: 0,
            description: None,
        };
    };

    let probability = tomorrow.precipitation_probability.unwrap_or(0);

    RainOutlook {
        will_rain: probability > RAIN_PROBABILITY_THRESHOLD,
        probability,
        description: Some(tomorrow.description),
    }
}

fn missing_section(name: &str) -> CoreError {
    CoreError::MalformedUpstreamData(format!("forecast payload has no '{name}' section"))
}

/// Open-Meteo sends local times without an offset, usually without seconds.
fn parse_local_datetime(s: &str) -> Result<NaiveDateTime, CoreError> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|e| CoreError::MalformedUpstreamData(format!("invalid time '{s}': {e}")))
}

fn parse_local_date(s: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| CoreError::MalformedUpstreamData(format!("invalid date '{s}': {e}")))
}
