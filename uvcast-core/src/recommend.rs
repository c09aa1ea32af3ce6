//! UV index bands and the protective advice attached to each band.
//!
//! Every piece of advice is a fixed table indexed by band; the band is the only input.

use serde::Serialize;

/// UV index bands, closed on the upper bound: `<= 2`, `<= 5`, `<= 7`, `<= 10`, `> 10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UvBand {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

/// Upper bounds evaluated top-down; anything above the last is `Extreme`.
const BAND_LIMITS: [(f64, UvBand); 4] = [
    (2.0, UvBand::Low),
    (5.0, UvBand::Moderate),
    (7.0, UvBand::High),
    (10.0, UvBand::VeryHigh),
];

impl UvBand {
    pub const ALL: [UvBand; 5] = [
        UvBand::Low,
        UvBand::Moderate,
        UvBand::High,
        UvBand::VeryHigh,
        UvBand::Extreme,
    ];

    /// First band whose upper bound is `>= uv`.
    pub fn classify(uv: f64) -> Self {
        BAND_LIMITS
            .iter()
            .find(|(limit, _)| uv <= *limit)
            .map(|(_, band)| *band)
            .unwrap_or(UvBand::Extreme)
    }

    pub fn label(self) -> &'static str {
        self.summary().level
    }

    pub fn sunscreen(self) -> SunscreenAdvice {
        SUNSCREEN[self as usize]
    }

    pub fn clothing(self) -> ClothingAdvice {
        CLOTHING[self as usize]
    }

    pub fn timing(self) -> TimingAdvice {
        TIMING[self as usize]
    }

    pub fn general_advice(self) -> &'static str {
        GENERAL[self as usize]
    }

    /// Short level / protection / advice triple, used next to daily UV maxima.
    pub fn summary(self) -> UvSummary {
        SUMMARY[self as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SunscreenAdvice {
    pub spf: &'static str,
    pub application: &'static str,
    pub reapplication: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClothingAdvice {
    pub hat: &'static str,
    pub sunglasses: &'static str,
    pub clothing: &'static str,
    pub protection: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingAdvice {
    pub best_time: &'static str,
    pub avoid_time: &'static str,
    pub advice: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UvSummary {
    pub level: &'static str,
    pub protection: &'static str,
    pub advice: &'static str,
}

/// Everything we advise for one UV index value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationBundle {
    pub band: UvBand,
    pub sunscreen: SunscreenAdvice,
    pub clothing: ClothingAdvice,
    pub timing: TimingAdvice,
    pub general_advice: &'static str,
}

pub fn recommendations(uv: f64) -> RecommendationBundle {
    let band = UvBand::classify(uv);
    RecommendationBundle {
        band,
        sunscreen: band.sunscreen(),
        clothing: band.clothing(),
        timing: band.timing(),
        general_advice: band.general_advice(),
    }
}

static SUNSCREEN: [SunscreenAdvice; 5] = [
    SunscreenAdvice {
        spf: "SPF 15+",
        application: "Apply if spending extended time outdoors",
        reapplication: "Every 2 hours if sweating or swimming",
    },
    SunscreenAdvice {
        spf: "SPF 30+",
        application: "Apply 30 minutes before going outdoors",
        reapplication: "Every 2 hours, more often if sweating or swimming",
    },
    SunscreenAdvice {
        spf: "SPF 50+",
        application: "Apply generously 30 minutes before going outdoors",
        reapplication: "Every 2 hours, immediately after swimming or sweating",
    },
    SunscreenAdvice {
        spf: "SPF 50+",
        application: "Apply very generously 30 minutes before going outdoors",
        reapplication: "Every 1-2 hours, immediately after swimming or sweating",
    },
    SunscreenAdvice {
        spf: "SPF 50+",
        application: "Apply very generously and avoid sun exposure",
        reapplication: "Every hour if you must be outdoors",
    },
];

const CLOTHING_MAXIMUM: ClothingAdvice = ClothingAdvice {
    hat: "Wide-brimmed hat essential",
    sunglasses: "UV-protective sunglasses essential",
    clothing: "Long-sleeved shirts, long pants, and UV-protective clothing",
    protection: "Maximum protection essential",
};

static CLOTHING: [ClothingAdvice; 5] = [
    ClothingAdvice {
        hat: "Optional",
        sunglasses: "Recommended",
        clothing: "Light, loose-fitting clothing",
        protection: "Minimal protection needed",
    },
    ClothingAdvice {
        hat: "Wide-brimmed hat recommended",
        sunglasses: "UV-protective sunglasses",
        clothing: "Light, loose-fitting clothing covering arms and legs",
        protection: "Moderate protection recommended",
    },
    ClothingAdvice {
        hat: "Wide-brimmed hat essential",
        sunglasses: "UV-protective sunglasses essential",
        clothing: "Long-sleeved shirts and long pants",
        protection: "High protection required",
    },
    CLOTHING_MAXIMUM,
    CLOTHING_MAXIMUM,
];

const TIMING_EARLY_ONLY: TimingAdvice = TimingAdvice {
    best_time: "Early morning only",
    avoid_time: "10 AM - 4 PM",
    advice: "Avoid outdoor activities during peak hours",
};

static TIMING: [TimingAdvice; 5] = [
    TimingAdvice {
        best_time: "Any time of day",
        avoid_time: "None",
        advice: "Safe to be outdoors at any time",
    },
    TimingAdvice {
        best_time: "Early morning or late afternoon",
        avoid_time: "10 AM - 4 PM",
        advice: "Seek shade during peak hours",
    },
    TimingAdvice {
        best_time: "Early morning or late afternoon",
        avoid_time: "10 AM - 4 PM",
        advice: "Minimize outdoor activities during peak hours",
    },
    TIMING_EARLY_ONLY,
    TIMING_EARLY_ONLY,
];

static GENERAL: [&str; 5] = [
    "Low UV index. You can safely stay outside without protection.",
    "Moderate UV index. Take precautions - seek shade, wear protective clothing and sunscreen.",
    "High UV index. Reduce time in the sun between 10 AM and 4 PM. Protection is essential.",
    "Very high UV index. Minimize sun exposure during midday hours. Maximum protection required.",
    "Extreme UV index. Avoid sun exposure during midday hours. Protection is absolutely essential.",
];

static SUMMARY: [UvSummary; 5] = [
    UvSummary {
        level: "Low",
        protection: "No protection required",
        advice: "You can safely stay outside without protection.",
    },
    UvSummary {
        level: "Moderate",
        protection: "Some protection required",
        advice: "Seek shade during midday hours, wear protective clothing and sunscreen.",
    },
    UvSummary {
        level: "High",
        protection: "Protection required",
        advice: "Reduce time in the sun between 10 a.m. and 4 p.m. Wear protective clothing and sunscreen.",
    },
    UvSummary {
        level: "Very High",
        protection: "Extra protection required",
        advice: "Minimize sun exposure during midday hours. Protection is essential.",
    },
    UvSummary {
        level: "Extreme",
        protection: "Maximum protection required",
        advice: "Avoid sun exposure during midday hours. Protection is absolutely essential.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges_are_closed_above() {
        assert_eq!(UvBand::classify(0.0), UvBand::Low);
        assert_eq!(UvBand::classify(2.0), UvBand::Low);
        assert_eq!(UvBand::classify(2.01), UvBand::Moderate);
        assert_eq!(UvBand::classify(5.0), UvBand::Moderate);
        assert_eq!(UvBand::classify(5.1), UvBand::High);
        assert_eq!(UvBand::classify(7.0), UvBand::High);
        assert_eq!(UvBand::classify(7.1), UvBand::VeryHigh);
        assert_eq!(UvBand::classify(10.0), UvBand::VeryHigh);
        assert_eq!(UvBand::classify(10.1), UvBand::Extreme);
        assert_eq!(UvBand::classify(15.0), UvBand::Extreme);
    }

    #[test]
    fn classify_agrees_with_band_edges() {
        fn expected(uv: f64) -> UvBand {
            if uv <= 2.0 {
                UvBand::Low
            } else if uv <= 5.0 {
                UvBand::Moderate
            } else if uv <= 7.0 {
                UvBand::High
            } else if uv <= 10.0 {
                UvBand::VeryHigh
            } else {
                UvBand::Extreme
            }
        }

        let mut previous = UvBand::Low;
        for step in -10..=1600 {
            let uv = f64::from(step) / 100.0;
            let band = UvBand::classify(uv);

            assert_eq!(band, expected(uv), "uv {uv}");
            // bands never go backwards as the index rises
            assert!(band >= previous, "uv {uv}");
            previous = band;
        }
        assert_eq!(previous, UvBand::Extreme);
    }

    #[test]
    fn uv_nine_gets_very_high_sunscreen() {
        let bundle = recommendations(9.0);

        assert_eq!(bundle.band, UvBand::VeryHigh);
        assert_eq!(bundle.sunscreen.spf, "SPF 50+");
        assert!(bundle.sunscreen.application.starts_with("Apply very generously"));
        assert!(bundle.sunscreen.application.contains("30 minutes before"));
        assert!(bundle.sunscreen.reapplication.starts_with("Every 1-2 hours"));
    }

    #[test]
    fn low_band_content() {
        let bundle = recommendations(1.5);

        assert_eq!(bundle.sunscreen.spf, "SPF 15+");
        assert_eq!(bundle.clothing.hat, "Optional");
        assert_eq!(bundle.timing.avoid_time, "None");
        assert!(bundle.general_advice.starts_with("Low UV index."));
    }

    #[test]
    fn extreme_band_content() {
        let bundle = recommendations(11.0);

        assert_eq!(bundle.band, UvBand::Extreme);
        assert_eq!(bundle.sunscreen.reapplication, "Every hour if you must be outdoors");
        assert_eq!(bundle.clothing.protection, "Maximum protection essential");
        assert_eq!(bundle.timing.best_time, "Early morning only");
        assert!(bundle.general_advice.starts_with("Extreme UV index."));
    }

    #[test]
    fn general_advice_differs_per_band() {
        let texts: Vec<&str> = UvBand::ALL.iter().map(|b| b.general_advice()).collect();
        for (i, a) in texts.iter().enumerate() {
            for b in &texts[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn bundle_is_deterministic() {
        for uv in [0.0, 2.0, 4.4, 6.9, 9.0, 12.3] {
            assert_eq!(recommendations(uv), recommendations(uv));
        }
    }

    #[test]
    fn summary_labels() {
        let labels: Vec<&str> = UvBand::ALL.iter().map(|b| b.label()).collect();
        assert_eq!(labels, ["Low", "Moderate", "High", "Very High", "Extreme"]);
        assert_eq!(UvBand::classify(6.0).summary().protection, "Protection required");
    }

    #[test]
    fn bundle_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(recommendations(3.0)).expect("serializable");

        assert_eq!(value["band"], "moderate");
        assert_eq!(value["timing"]["bestTime"], "Early morning or late afternoon");
        assert!(value["generalAdvice"].as_str().is_some());
    }
}
