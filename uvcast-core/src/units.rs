//! Rounding and unit conversion shared by the weather and UV formatters.
//!
//! All rounding is half away from zero (`f64::round`), applied once at the point of
//! conversion. Every function here is stable under re-application.

/// m/s to km/h.
pub const MPS_TO_KMH: f64 = 3.6;

pub const METERS_PER_KM: f64 = 1000.0;

/// Nearest whole number.
pub fn round_whole(value: f64) -> i64 {
    value.round() as i64
}

/// Nearest tenth.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn mps_to_kmh(speed_mps: f64) -> i64 {
    round_whole(speed_mps * MPS_TO_KMH)
}

/// Meters to kilometers, to the nearest tenth.
pub fn meters_to_km(meters: f64) -> f64 {
    round_tenth(meters / METERS_PER_KM)
}
