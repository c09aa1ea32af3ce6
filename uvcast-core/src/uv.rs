//! UV readings and safe exposure estimates.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};
use serde::{Serialize, Serializer};

use crate::{
    model::{UvForecastDay, UvReading, UvReport},
    raw::{RawUvCurrent, RawUvForecastDay},
    recommend::recommendations,
    units::round_tenth,
};

/// Fitzpatrick skin type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SkinType {
    /// Very fair
    #[serde(rename = "skinType1")]
    I,
    /// Fair
    #[serde(rename = "skinType2")]
    II,
    /// Medium
    #[serde(rename = "skinType3")]
    III,
    /// Olive
    #[serde(rename = "skinType4")]
    IV,
    /// Dark
    #[serde(rename = "skinType5")]
    V,
    /// Very dark
    #[serde(rename = "skinType6")]
    VI,
}

impl SkinType {
    pub const ALL: [SkinType; 6] = [
        SkinType::I,
        SkinType::II,
        SkinType::III,
        SkinType::IV,
        SkinType::V,
        SkinType::VI,
    ];

    /// Minutes of unprotected exposure at UV index 1.
    pub const fn base_exposure_minutes(self) -> u32 {
        match self {
            SkinType::I => 67,
            SkinType::II => 100,
            SkinType::III => 200,
            SkinType::IV => 300,
            SkinType::V => 400,
            SkinType::VI => 500,
        }
    }

    pub fn numeral(self) -> &'static str {
        match self {
            SkinType::I => "I",
            SkinType::II => "II",
            SkinType::III => "III",
            SkinType::IV => "IV",
            SkinType::V => "V",
            SkinType::VI => "VI",
        }
    }
}

/// Estimated safe exposure for one skin type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exposure {
    /// Wide enough for any index down to about 1e-17; smaller positive indexes saturate.
    Minutes(u64),
    /// UV index is zero or below.
    NoRisk,
    /// Estimate rounds down to zero minutes.
    VeryShort,
}

impl std::fmt::Display for Exposure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Exposure::Minutes(m) => write!(f, "{m} min"),
            Exposure::NoRisk => f.write_str("No risk"),
            Exposure::VeryShort => f.write_str("Very short"),
        }
    }
}

/// Minutes serialize as a number, sentinels as their text.
impl Serialize for Exposure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Exposure::Minutes(m) => serializer.serialize_u64(*m),
            Exposure::NoRisk => serializer.serialize_str("No risk"),
            Exposure::VeryShort => serializer.serialize_str("Very short"),
        }
    }
}

/// Safe exposure for every skin type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SafeExposure(BTreeMap<SkinType, Exposure>);

impl SafeExposure {
    pub fn get(&self, skin: SkinType) -> Exposure {
        // always populated for all six types
        self.0.get(&skin).copied().unwrap_or(Exposure::NoRisk)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SkinType, Exposure)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }
}

/// Safe exposure for each skin type at the given UV index.
pub fn safe_exposure(uv_index: f64) -> SafeExposure {
    SafeExposure(
        SkinType::ALL
            .into_iter()
            .map(|skin| (skin, exposure_for(skin, uv_index)))
            .collect(),
    )
}

fn exposure_for(skin: SkinType, uv_index: f64) -> Exposure {
    if uv_index.is_nan() || uv_index <= 0.0 {
        return Exposure::NoRisk;
    }

    let minutes = (f64::from(skin.base_exposure_minutes()) / uv_index).round();
    if minutes <= 0.0 {
        Exposure::VeryShort
    } else {
        Exposure::Minutes(minutes as u64)
    }
}

/// Current UV reading. Exposure is estimated from the unrounded index.
pub fn current_reading(raw: &RawUvCurrent) -> UvReading {
    UvReading {
        uv: round_tenth(raw.uv),
        uv_time: raw.uv_time,
        uv_max: round_tenth(raw.uv_max.unwrap_or(raw.uv)),
        uv_max_time: raw.uv_max_time,
        ozone: raw.ozone,
        safe_exposure: safe_exposure(raw.uv),
    }
}

pub fn forecast_days(raw: &[RawUvForecastDay]) -> Vec<UvForecastDay> {
    raw.iter()
        .map(|day| UvForecastDay {
            date: forecast_date(day),
            uv: round_tenth(day.uv),
            uv_max: round_tenth(day.uv_max.unwrap_or(day.uv)),
            uv_max_time: day.uv_max_time,
            ozone: day.ozone,
        })
        .collect()
}

/// Build the full UV report; recommendations follow the rounded current index.
pub fn advise(current: &RawUvCurrent, forecast: &[RawUvForecastDay]) -> UvReport {
    let current = current_reading(current);
    let recommendations = recommendations(current.uv);

    UvReport {
        current,
        forecast: forecast_days(forecast),
        recommendations,
    }
}

/// `date` may be a plain date or a full timestamp; falls back to the reading time.
fn forecast_date(day: &RawUvForecastDay) -> Option<NaiveDate> {
    day.date
        .as_deref()
        .and_then(|s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
        })
        .or_else(|| day.uv_time.map(|t| t.date_naive()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_current(uv: f64) -> RawUvCurrent {
        RawUvCurrent {
            uv,
            uv_time: None,
            uv_max: None,
            uv_max_time: None,
            ozone: Some(310.2),
        }
    }

    #[test]
    fn zero_uv_is_no_risk_for_everyone() {
        let exposure = safe_exposure(0.0);
        for skin in SkinType::ALL {
            assert_eq!(exposure.get(skin), Exposure::NoRisk);
        }
        assert_eq!(safe_exposure(-1.0).get(SkinType::VI), Exposure::NoRisk);
        assert_eq!(safe_exposure(f64::NAN).get(SkinType::I), Exposure::NoRisk);
    }

    #[test]
    fn uv_one_gives_base_minutes() {
        let exposure = safe_exposure(1.0);
        assert_eq!(exposure.get(SkinType::I), Exposure::Minutes(67));
        for skin in SkinType::ALL {
            let base = u64::from(skin.base_exposure_minutes());
            assert_eq!(exposure.get(skin), Exposure::Minutes(base));
        }
    }

    #[test]
    fn exposure_is_rounded_base_over_index() {
        let exposure = safe_exposure(6.0);
        // 67 / 6 = 11.17, 100 / 6 = 16.67, 500 / 6 = 83.33
        assert_eq!(exposure.get(SkinType::I), Exposure::Minutes(11));
        assert_eq!(exposure.get(SkinType::II), Exposure::Minutes(17));
        assert_eq!(exposure.get(SkinType::VI), Exposure::Minutes(83));

        for uv in [0.3, 1.7, 4.2, 8.8, 11.5] {
            for (skin, value) in safe_exposure(uv).iter() {
                let expected = (f64::from(skin.base_exposure_minutes()) / uv).round() as u64;
                assert_eq!(value, Exposure::Minutes(expected));
            }
        }
    }

    #[test]
    fn tiny_index_gives_long_exposure() {
        let exposure = safe_exposure(1e-9);
        assert_eq!(exposure.get(SkinType::I), Exposure::Minutes(67_000_000_000));
        assert_eq!(exposure.get(SkinType::VI), Exposure::Minutes(500_000_000_000));

        let value = serde_json::to_value(&exposure).expect("serializable");
        assert_eq!(value["skinType1"], 67_000_000_000_u64);
    }

    #[test]
    fn huge_index_is_very_short() {
        // 67 / 200 = 0.335 rounds to 0, 500 / 200 = 2.5 rounds to 3
        let exposure = safe_exposure(200.0);
        assert_eq!(exposure.get(SkinType::I), Exposure::VeryShort);
        assert_eq!(exposure.get(SkinType::VI), Exposure::Minutes(3));
        assert_eq!(safe_exposure(f64::INFINITY).get(SkinType::VI), Exposure::VeryShort);
    }

    #[test]
    fn exposure_serializes_as_number_or_sentinel() {
        let value = serde_json::to_value(safe_exposure(1.0)).expect("serializable");
        assert_eq!(value["skinType1"], 67);
        assert_eq!(value["skinType6"], 500);

        let value = serde_json::to_value(safe_exposure(0.0)).expect("serializable");
        assert_eq!(value["skinType3"], "No risk");
        assert_eq!(value.as_object().map(|m| m.len()), Some(6));

        let value = serde_json::to_value(Exposure::VeryShort).expect("serializable");
        assert_eq!(value, json!("Very short"));
    }

    #[test]
    fn current_reading_rounds_to_one_decimal() {
        let mut raw = raw_current(5.349);
        raw.uv_max = Some(8.25);

        let reading = current_reading(&raw);
        assert_eq!(reading.uv, 5.3);
        assert_eq!(reading.uv_max, 8.3);
        assert_eq!(reading.ozone, Some(310.2));
    }

    #[test]
    fn uv_max_defaults_to_current_index() {
        let reading = current_reading(&raw_current(2.04));
        assert_eq!(reading.uv_max, 2.0);
    }

    #[test]
    fn recommendations_use_rounded_index() {
        // 10.04 rounds to 10.0, which is still very high rather than extreme
        let report = advise(&raw_current(10.04), &[]);
        assert_eq!(report.current.uv, 10.0);
        assert_eq!(report.recommendations.band, crate::recommend::UvBand::VeryHigh);
        assert!(report.forecast.is_empty());
    }

    #[test]
    fn forecast_days_keep_order_and_round() {
        let raw: Vec<RawUvForecastDay> = serde_json::from_value(json!([
            {
                "date": "2024-06-01",
                "uv": 6.66,
                "uv_max": 7.77,
                "uv_max_time": "2024-06-01T11:30:00.000Z",
                "ozone": 300.0
            },
            { "date": "2024-06-02T00:00:00.000Z", "uv": 1.04 },
            { "uv": 0.0, "uv_time": "2024-06-03T12:00:00.000Z" }
        ]))
        .expect("valid forecast");

        let days = forecast_days(&raw);
        assert_eq!(days.len(), 3);

        assert_eq!(days[0].uv, 6.7);
        assert_eq!(days[0].uv_max, 7.8);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 6, 1));
        assert!(days[0].uv_max_time.is_some());

        assert_eq!(days[1].uv, 1.0);
        assert_eq!(days[1].uv_max, 1.0);
        assert_eq!(days[1].date, NaiveDate::from_ymd_opt(2024, 6, 2));

        assert_eq!(days[2].date, NaiveDate::from_ymd_opt(2024, 6, 3));
    }
}
