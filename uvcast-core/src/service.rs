//! Combines the weather and UV lookups for one location.
//!
//! Both fetches run concurrently. A UV failure never costs the caller the weather: it is
//! logged and replaced by an advisory message. A weather failure fails the whole lookup.

use crate::{
    Coordinates,
    error::{CoreError, UV_UNAVAILABLE_MESSAGE},
    model::{UvReport, WeatherAndUv, WeatherReport},
    normalize::normalize_forecast,
    provider::{UvSource, WeatherSource},
    uv::advise,
};

pub async fn compute_weather_and_uv(
    weather_source: &dyn WeatherSource,
    uv_source: &dyn UvSource,
    coords: Coordinates,
) -> Result<WeatherAndUv, CoreError> {
    let (weather, uv) = tokio::join!(
        weather_only(weather_source, coords),
        uv_only(uv_source, coords)
    );

    let weather = weather
        .inspect_err(|e| tracing::error!(%coords, error = %e, "weather lookup failed"))?;

    let (uv, uv_error) = match uv {
        Ok(report) => (Some(report), None),
        Err(e) => {
            tracing::warn!(%coords, error = %e, "continuing without UV data");
            (None, Some(UV_UNAVAILABLE_MESSAGE.to_string()))
        }
    };

    Ok(WeatherAndUv {
        weather,
        uv,
        uv_error,
    })
}

/// Fetch and normalize the forecast.
pub async fn weather_only(
    source: &dyn WeatherSource,
    coords: Coordinates,
) -> Result<WeatherReport, CoreError> {
    let raw = source.fetch_forecast(coords).await?;
    normalize_forecast(&raw)
}

/// Fetch current UV and the UV forecast, then derive advice.
///
/// Any failure, whatever its cause, comes back as `CoreError::UvUnavailable`.
pub async fn uv_only(source: &dyn UvSource, coords: Coordinates) -> Result<UvReport, CoreError> {
    let (current, forecast) =
        tokio::try_join!(source.fetch_current(coords), source.fetch_forecast(coords))
            .map_err(CoreError::into_uv_unavailable)?;

    Ok(advise(&current, &forecast))
}
