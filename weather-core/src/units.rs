//! Unit conversion for display.
//!
//! Snapshots stay in metric; conversion and rounding happen only at render
//! time. Ties round half away from zero (`2.5 -> 3`, `-2.5 -> -3`).

use crate::model::TemperatureUnit;

const MPH_PER_KPH: f64 = 0.621371;

pub fn round_half_away(value: f64) -> i64 {
    value.round() as i64
}

/// Celsius to whole Fahrenheit degrees.
pub fn c_to_f(celsius: f64) -> i64 {
    round_half_away(celsius * 9.0 / 5.0 + 32.0)
}

/// km/h to whole mph.
pub fn kph_to_mph(kph: f64) -> i64 {
    round_half_away(kph * MPH_PER_KPH)
}

/// A Celsius reading rounded for display in `unit`.
pub fn display_temperature(celsius: f64, unit: TemperatureUnit) -> i64 {
    match unit {
        TemperatureUnit::Celsius => round_half_away(celsius),
        TemperatureUnit::Fahrenheit => c_to_f(celsius),
    }
}

/// Wind speed rounded for display, paired with its suffix. Metric display
/// goes with Celsius, imperial with Fahrenheit.
pub fn display_wind_speed(kph: f64, unit: TemperatureUnit) -> (i64, &'static str) {
    match unit {
        TemperatureUnit::Celsius => (round_half_away(kph), "km/h"),
        TemperatureUnit::Fahrenheit => (kph_to_mph(kph), "mph"),
    }
}
