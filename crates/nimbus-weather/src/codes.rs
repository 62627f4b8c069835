//! Tomorrow.io weather-code lookup and icon selection.
//!
//! Code values and descriptions follow the provider's published table:
//! https://docs.tomorrow.io/reference/data-layers-weather-codes

use crate::types::IconCategory;

/// Result of resolving a provider weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub description: &'static str,
    pub category: Option<IconCategory>,
}

/// All codes the provider documents for the `weatherCode` field.
pub const KNOWN_CODES: [i64; 23] = [
    1000, 1100, 1101, 1102, 1001, 2000, 2100, 4000, 4001, 4200, 4201, 5000, 5001, 5100, 5101,
    6000, 6001, 6200, 6201, 7000, 7101, 7102, 8000,
];

/// Map a `weatherCode` value to its description and icon category.
///
/// Codes outside the table resolve to "Unknown" with no category; the
/// icon then falls back to a plain day/night glyph.
pub fn resolve(code: i64) -> Resolved {
    use IconCategory::*;

    let (description, category) = match code {
        1000 => ("Clear", Clear),
        1100 => ("Mostly Clear", Clear),
        1101 => ("Partly Cloudy", PartlyCloudy),
        1102 => ("Mostly Cloudy", PartlyCloudy),
        1001 => ("Cloudy", Cloudy),
        2000 => ("Fog", Cloudy),
        2100 => ("Light Fog", Cloudy),
        4000 => ("Drizzle", Rain),
        4001 => ("Rain", Rain),
        4200 => ("Light Rain", Rain),
        4201 => ("Heavy Rain", Rain),
        5000 => ("Snow", Snow),
        5001 => ("Flurries", Snow),
        5100 => ("Light Snow", Snow),
        5101 => ("Heavy Snow", Snow),
        6000 => ("Freezing Drizzle", Sleet),
        6001 => ("Freezing Rain", Sleet),
        6200 => ("Light Freezing Rain", Sleet),
        6201 => ("Heavy Freezing Rain", Sleet),
        7000 => ("Ice Pellets", Sleet),
        7101 => ("Heavy Ice Pellets", Sleet),
        7102 => ("Light Ice Pellets", Sleet),
        8000 => ("Thunderstorm", Thunderstorm),
        _ => {
            return Resolved {
                description: "Unknown",
                category: None,
            }
        }
    };

    Resolved {
        description,
        category: Some(category),
    }
}

/// Select the display glyph for an icon category.
///
/// Total over every category and `None`; clear and partly-cloudy skies
/// branch on daytime, everything else is time-invariant.
pub fn glyph(category: Option<IconCategory>, is_daytime: bool) -> &'static str {
    match category {
        Some(IconCategory::Clear) | None => {
            if is_daytime {
                "\u{2600}\u{fe0f}" // ☀️
            } else {
                "\u{1f319}" // 🌙
            }
        }
        Some(IconCategory::PartlyCloudy) => {
            if is_daytime {
                "\u{1f324}\u{fe0f}" // 🌤️
            } else {
                "\u{2601}\u{fe0f}" // ☁️
            }
        }
        Some(IconCategory::Cloudy) => "\u{2601}\u{fe0f}",       // ☁️
        Some(IconCategory::Rain) => "\u{1f327}\u{fe0f}",        // 🌧️
        Some(IconCategory::Snow) => "\u{2744}\u{fe0f}",         // ❄️
        Some(IconCategory::Sleet) => "\u{1f328}\u{fe0f}",       // 🌨️
        Some(IconCategory::Thunderstorm) => "\u{26c8}\u{fe0f}", // ⛈️
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_clear_codes() {
        assert_eq!(resolve(1000).description, "Clear");
        assert_eq!(resolve(1000).category, Some(IconCategory::Clear));
        assert_eq!(resolve(1100).description, "Mostly Clear");
        assert_eq!(resolve(1100).category, Some(IconCategory::Clear));
    }

    #[test]
    fn test_resolve_cloud_codes() {
        assert_eq!(resolve(1101).category, Some(IconCategory::PartlyCloudy));
        assert_eq!(resolve(1102).category, Some(IconCategory::PartlyCloudy));
        assert_eq!(resolve(1001).category, Some(IconCategory::Cloudy));
        assert_eq!(resolve(2000).description, "Fog");
        assert_eq!(resolve(2100).description, "Light Fog");
    }

    #[test]
    fn test_resolve_rain_codes() {
        for code in [4000, 4001, 4200, 4201] {
            assert_eq!(resolve(code).category, Some(IconCategory::Rain));
        }
        assert_eq!(resolve(4201).description, "Heavy Rain");
    }

    #[test]
    fn test_resolve_snow_codes() {
        for code in [5000, 5001, 5100, 5101] {
            assert_eq!(resolve(code).category, Some(IconCategory::Snow));
        }
        assert_eq!(resolve(5001).description, "Flurries");
    }

    #[test]
    fn test_resolve_sleet_codes() {
        for code in [6000, 6001, 6200, 6201, 7000, 7101, 7102] {
            assert_eq!(resolve(code).category, Some(IconCategory::Sleet));
        }
        assert_eq!(resolve(7000).description, "Ice Pellets");
    }

    #[test]
    fn test_resolve_thunderstorm() {
        assert_eq!(resolve(8000).description, "Thunderstorm");
        assert_eq!(resolve(8000).category, Some(IconCategory::Thunderstorm));
    }

    #[test]
    fn test_resolve_unknown_code() {
        let resolved = resolve(9999);
        assert_eq!(resolved.description, "Unknown");
        assert_eq!(resolved.category, None);
        assert_eq!(resolve(-1).description, "Unknown");
    }

    #[test]
    fn test_every_known_code_has_category() {
        for code in KNOWN_CODES {
            let resolved = resolve(code);
            assert_ne!(resolved.description, "Unknown", "code {}", code);
            assert!(resolved.category.is_some(), "code {}", code);
        }
    }

    #[test]
    fn test_glyph_is_total() {
        let categories = [
            None,
            Some(IconCategory::Clear),
            Some(IconCategory::PartlyCloudy),
            Some(IconCategory::Cloudy),
            Some(IconCategory::Rain),
            Some(IconCategory::Snow),
            Some(IconCategory::Sleet),
            Some(IconCategory::Thunderstorm),
        ];
        for category in categories {
            for is_daytime in [true, false] {
                assert!(!glyph(category, is_daytime).is_empty());
            }
        }
    }

    #[test]
    fn test_glyph_day_night_branches() {
        assert_eq!(glyph(Some(IconCategory::Clear), true), "\u{2600}\u{fe0f}");
        assert_eq!(glyph(Some(IconCategory::Clear), false), "\u{1f319}");
        assert_eq!(
            glyph(Some(IconCategory::PartlyCloudy), true),
            "\u{1f324}\u{fe0f}"
        );
        assert_eq!(
            glyph(Some(IconCategory::PartlyCloudy), false),
            "\u{2601}\u{fe0f}"
        );
        // Unmapped codes fall back to plain day/night
        assert_eq!(glyph(None, true), "\u{2600}\u{fe0f}");
        assert_eq!(glyph(None, false), "\u{1f319}");
    }

    #[test]
    fn test_glyph_time_invariant_categories() {
        for category in [
            IconCategory::Cloudy,
            IconCategory::Rain,
            IconCategory::Snow,
            IconCategory::Sleet,
            IconCategory::Thunderstorm,
        ] {
            assert_eq!(glyph(Some(category), true), glyph(Some(category), false));
        }
    }
}
