//! Plain-text rendering of lookup results.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use uvcast_core::{
    Coordinates, RecommendationBundle, SafeExposure, SkinType, UvBand, UvReport, WeatherAndUv,
    WeatherReport, rain_tomorrow,
};

/// Hourly rows shown in text mode.
const HOURLY_PREVIEW: usize = 12;

pub fn weather_and_uv(coords: &Coordinates, result: &WeatherAndUv) -> String {
    let mut out = String::new();

    weather(&mut out, coords, &result.weather);

    match (&result.uv, &result.uv_error) {
        (Some(uv), _) => uv_report(&mut out, uv),
        (None, Some(msg)) => {
            let _ = writeln!(out, "\n{msg}");
        }
        (None, None) => {}
    }

    out
}

fn weather(out: &mut String, coords: &Coordinates, report: &WeatherReport) {
    let c = &report.current;
    let tz = report.location.timezone.as_deref().unwrap_or("local time");

    let _ = writeln!(out, "Weather for {coords} ({tz})");
    let _ = writeln!(out, "  {} [{}]", c.description, c.icon);
    let _ = writeln!(out, "  Temperature: {}°C (feels like {}°C)", c.temperature, c.feels_like);
    let _ = writeln!(out, "  Humidity: {}%  Pressure: {} hPa", c.humidity, c.pressure);
    let _ = writeln!(out, "  Wind: {} km/h from {}°", c.wind_speed, c.wind_direction);
    let _ = writeln!(
        out,
        "  Visibility: {} km  Precipitation: {} mm  UV index: {}",
        c.visibility, c.precipitation, c.uv_index
    );

    if !report.hourly.is_empty() {
        let _ = writeln!(out, "\nNext hours:");
        for h in report.hourly.iter().take(HOURLY_PREVIEW) {
            let _ = writeln!(
                out,
                "  {}  {:>3}°C  {:>3} km/h  {:>4}  {}",
                h.time.format("%H:%M"),
                number(h.temperature),
                number(h.wind_speed),
                percent(h.precipitation_probability),
                h.description
            );
        }
    }

    if !report.daily.is_empty() {
        let _ = writeln!(out, "\nDaily:");
        for d in &report.daily {
            let uv = match d.uv_index {
                Some(uv) => format!("UV {uv} ({})", UvBand::classify(uv).label()),
                None => "UV n/a".to_string(),
            };
            let _ = writeln!(
                out,
                "  {}  {:>3}/{:<3}°C  {:>4}  {}  {}",
                d.date.format("%a %d %b"),
                number(d.temp.max),
                number(d.temp.min),
                percent(d.precipitation_probability),
                uv,
                d.description
            );
        }
    }

    let rain = rain_tomorrow(&report.daily);
    let _ = writeln!(
        out,
        "\nRain tomorrow: {} ({}% chance)",
        if rain.will_rain { "likely" } else { "unlikely" },
        rain.probability
    );
}

fn uv_report(out: &mut String, report: &UvReport) {
    let c = &report.current;
    let _ = writeln!(
        out,
        "\nUV index: {} (max {} at {})",
        c.uv,
        c.uv_max,
        time(c.uv_max_time)
    );
    if let Some(ozone) = c.ozone {
        let _ = writeln!(out, "  Ozone: {ozone} DU");
    }

    out.push_str(&advice(c.uv, &c.safe_exposure, &report.recommendations));

    if !report.forecast.is_empty() {
        let _ = writeln!(out, "\nUV forecast:");
        for day in &report.forecast {
            let date = day
                .date
                .map(|d| d.format("%a %d %b").to_string())
                .unwrap_or_else(|| "?".to_string());
            let _ = writeln!(out, "  {date}  UV {} (max {})", day.uv, day.uv_max);
        }
    }
}

/// Safe exposure table followed by the recommendation bundle.
pub fn advice(uv_index: f64, exposure: &SafeExposure, bundle: &RecommendationBundle) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nUV {uv_index}: {}", bundle.band.label());

    let _ = writeln!(out, "Safe exposure:");
    for skin in SkinType::ALL {
        let _ = writeln!(out, "  Skin type {:<3} {}", skin.numeral(), exposure.get(skin));
    }

    let s = &bundle.sunscreen;
    let _ = writeln!(out, "Sunscreen: {}", s.spf);
    let _ = writeln!(out, "  {}", s.application);
    let _ = writeln!(out, "  Reapply: {}", s.reapplication);

    let cl = &bundle.clothing;
    let _ = writeln!(out, "Clothing: {}", cl.protection);
    let _ = writeln!(out, "  Hat: {}", cl.hat);
    let _ = writeln!(out, "  Sunglasses: {}", cl.sunglasses);
    let _ = writeln!(out, "  {}", cl.clothing);

    let t = &bundle.timing;
    let _ = writeln!(out, "Timing: best {}, avoid {}", t.best_time, t.avoid_time);
    let _ = writeln!(out, "  {}", t.advice);

    let _ = writeln!(out, "{}", bundle.general_advice);
    out
}

fn percent(value: Option<i64>) -> String {
    value.map(|p| format!("{p}%")).unwrap_or_else(|| "-".to_string())
}

fn number(value: Option<i64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string())
}

fn time(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|t| t.format("%H:%M UTC").to_string())
        .unwrap_or_else(|| "unknown time".to_string())
}
