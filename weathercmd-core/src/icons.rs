//! Glyphs appended to condition descriptions in the current-weather table.

/// Fixed description -> glyph table for the condition strings OpenWeather
/// reports. Process-wide immutable data.
const ICONS: &[(&str, &str)] = &[
    ("broken clouds", "🌥️"),
    ("clear sky", "☀️"),
    ("drizzle", "🌧️"),
    ("few clouds", "🌤️"),
    ("fog", "🌫️"),
    ("haze", "🌫️"),
    ("heavy intensity rain", "🌧️"),
    ("light rain", "🌦️"),
    ("light snow", "🌨️"),
    ("mist", "🌫️"),
    ("moderate rain", "🌧️"),
    ("overcast clouds", "☁️"),
    ("rain", "🌧️"),
    ("scattered clouds", "🌥️"),
    ("shower rain", "🌧️"),
    ("snow", "❄️"),
    ("thunderstorm", "🌩️"),
];

/// Look up the glyph for a condition description, case-insensitively.
/// Unknown descriptions get no icon.
pub fn icon_for(description: &str) -> Option<&'static str> {
    let wanted = description.to_lowercase();
    ICONS
        .iter()
        .find(|(description, _)| *description == wanted)
        .map(|(_, glyph)| *glyph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_description_gets_icon() {
        assert_eq!(icon_for("clear sky"), Some("☀️"));
        assert_eq!(icon_for("thunderstorm"), Some("🌩️"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(icon_for("Clear Sky"), Some("☀️"));
    }

    #[test]
    fn unknown_description_gets_none() {
        assert_eq!(icon_for("raining frogs"), None);
    }
}
