//! WMO weather code lookup.
//!
//! See: https://open-meteo.com/en/docs#weathervariables
//! Icon tokens follow the OpenWeatherMap icon set so existing icon assets can be reused.

/// Description used for codes outside the table.
pub const UNKNOWN_DESCRIPTION: &str = "Unknown";

/// Icon token used for codes outside the table.
pub const DEFAULT_ICON: &str = "01d";

/// Resolved description and icon for a weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherCodeInfo {
    pub description: &'static str,
    pub icon: &'static str,
}

/// Sorted by code so lookups can binary search.
static WEATHER_CODES: &[(i32, WeatherCodeInfo)] = &[
    (0, info("Clear sky", "01d")),
    (1, info("Mainly clear", "02d")),
    (2, info("Partly cloudy", "03d")),
    (3, info("Overcast", "04d")),
    (45, info("Foggy", "50d")),
    (48, info("Depositing rime fog", "50d")),
    (51, info("Light drizzle", "09d")),
    (53, info("Moderate drizzle", "09d")),
    (55, info("Dense drizzle", "09d")),
    (56, info("Light freezing drizzle", "13d")),
    (57, info("Dense freezing drizzle", "13d")),
    (61, info("Slight rain", "10d")),
    (63, info("Moderate rain", "10d")),
    (65, info("Heavy rain", "10d")),
    (66, info("Light freezing rain", "13d")),
    (67, info("Heavy freezing rain", "13d")),
    (71, info("Slight snow fall", "13d")),
    (73, info("Moderate snow fall", "13d")),
    (75, info("Heavy snow fall", "13d")),
    (77, info("Snow grains", "13d")),
    (80, info("Slight rain showers", "09d")),
    (81, info("Moderate rain showers", "09d")),
    (82, info("Violent rain showers", "09d")),
    (85, info("Slight snow showers", "13d")),
    (86, info("Heavy snow showers", "13d")),
    (95, info("Thunderstorm", "11d")),
    (96, info("Thunderstorm with slight hail", "11d")),
    (99, info("Thunderstorm with heavy hail", "11d")),
];

const FALLBACK: WeatherCodeInfo = info(UNKNOWN_DESCRIPTION, DEFAULT_ICON);

const fn info(description: &'static str, icon: &'static str) -> WeatherCodeInfo {
    WeatherCodeInfo { description, icon }
}

/// Resolve a WMO code. Never fails: unknown codes get the fallback pair.
pub fn lookup(code: i32) -> WeatherCodeInfo {
    WEATHER_CODES
        .binary_search_by_key(&code, |(c, _)| *c)
        .map(|idx| WEATHER_CODES[idx].1)
        .unwrap_or(FALLBACK)
}

/// Like [`lookup`], for a slot the provider left empty.
pub fn lookup_opt(code: Option<i32>) -> WeatherCodeInfo {
    code.map_or(FALLBACK, lookup)
}

pub fn description(code: i32) -> &'static str {
    lookup(code).description
}

pub fn icon(code: i32) -> &'static str {
    lookup(code).icon
}

/// All codes with a dedicated entry, ascending.
pub fn known_codes() -> impl Iterator<Item = i32> {
    WEATHER_CODES.iter().map(|(c, _)| *c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_unique() {
        let codes: Vec<i32> = known_codes().collect();
        assert!(codes.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(codes.len(), 28);
    }

    #[test]
    fn overcast_maps_to_04d() {
        assert_eq!(description(3), "Overcast");
        assert_eq!(icon(3), "04d");
    }

    #[test]
    fn unknown_code_falls_back() {
        assert_eq!(lookup(150), FALLBACK);
        assert_eq!(description(150), "Unknown");
        assert_eq!(icon(150), "01d");
        assert_eq!(description(-1), "Unknown");
        // gap inside the domain
        assert_eq!(description(4), "Unknown");
    }

    #[test]
    fn empty_slot_falls_back() {
        assert_eq!(lookup_opt(None), FALLBACK);
        assert_eq!(lookup_opt(Some(3)).description, "Overcast");
    }

    #[test]
    fn every_known_code_has_a_real_entry() {
        for code in known_codes() {
            let resolved = lookup(code);
            assert_ne!(resolved.description, UNKNOWN_DESCRIPTION, "code {code}");
            assert_eq!(resolved, lookup(code));
        }
    }

    #[test]
    fn families_share_icons() {
        assert_eq!(icon(45), "50d");
        assert_eq!(icon(61), "10d");
        assert_eq!(icon(80), "09d");
        assert_eq!(icon(71), "13d");
        assert_eq!(icon(99), "11d");
        assert_eq!(description(96), "Thunderstorm with slight hail");
    }
}
