//! Condition key to icon lookup.
//!
//! Keys are the provider's `icon` values ("rain", "clear-day", ...). Anything
//! outside the known set maps to [`WeatherIcon::FALLBACK`].

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherIcon {
    Sun,
    Moon,
    CloudRain,
    Snowflake,
    CloudMeatball,
    Wind,
    Smog,
    Cloud,
    CloudSun,
    CloudMoon,
    Bolt,
}

impl WeatherIcon {
    pub const FALLBACK: WeatherIcon = WeatherIcon::Cloud;

    pub fn from_condition_key(key: &str) -> Self {
        match key {
            "clear-day" => WeatherIcon::Sun,
            "clear-night" => WeatherIcon::Moon,
            "rain" => WeatherIcon::CloudRain,
            "snow" => WeatherIcon::Snowflake,
            "sleet" => WeatherIcon::CloudMeatball,
            "wind" => WeatherIcon::Wind,
            "fog" => WeatherIcon::Smog,
            "cloudy" => WeatherIcon::Cloud,
            "partly-cloudy-day" => WeatherIcon::CloudSun,
            "partly-cloudy-night" => WeatherIcon::CloudMoon,
            "thunderstorm" => WeatherIcon::Bolt,
            _ => Self::FALLBACK,
        }
    }

    /// Terminal glyph.
    pub const fn glyph(self) -> &'static str {
        match self {
            WeatherIcon::Sun => "\u{2600}\u{FE0F}",            // ☀️
            WeatherIcon::Moon => "\u{1F319}",                  // 🌙
            WeatherIcon::CloudRain => "\u{1F327}\u{FE0F}",     // 🌧️
            WeatherIcon::Snowflake => "\u{2744}\u{FE0F}",      // ❄️
            WeatherIcon::CloudMeatball => "\u{1F328}\u{FE0F}", // 🌨️
            WeatherIcon::Wind => "\u{1F4A8}",                  // 💨
            WeatherIcon::Smog => "\u{1F32B}\u{FE0F}",          // 🌫️
            WeatherIcon::Cloud => "\u{2601}\u{FE0F}",          // ☁️
            WeatherIcon::CloudSun => "\u{26C5}",               // ⛅
            WeatherIcon::CloudMoon => "\u{1F325}\u{FE0F}",     // 🌥️
            WeatherIcon::Bolt => "\u{26A1}",                   // ⚡
        }
    }

    /// Icon-font class name, for HTML front ends.
    pub const fn class_name(self) -> &'static str {
        match self {
            WeatherIcon::Sun => "fas fa-sun",
            WeatherIcon::Moon => "fas fa-moon",
            WeatherIcon::CloudRain => "fas fa-cloud-rain",
            WeatherIcon::Snowflake => "fas fa-snowflake",
            WeatherIcon::CloudMeatball => "fas fa-cloud-meatball",
            WeatherIcon::Wind => "fas fa-wind",
            WeatherIcon::Smog => "fas fa-smog",
            WeatherIcon::Cloud => "fas fa-cloud",
            WeatherIcon::CloudSun => "fas fa-cloud-sun",
            WeatherIcon::CloudMoon => "fas fa-cloud-moon",
            WeatherIcon::Bolt => "fas fa-bolt",
        }
    }
}
