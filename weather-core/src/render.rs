//! Turns a [`WeatherSnapshot`] into display strings.
//!
//! Pure functions of (snapshot, unit). Nothing rendered is ever written back
//! into the snapshot, so toggling units never compounds rounding.

use serde::Serialize;

use crate::{
    icons::WeatherIcon,
    model::{DayForecast, TemperatureUnit, WeatherSnapshot},
    units::{display_temperature, display_wind_speed},
};

/// Which slice of `daily_forecast` to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastWindow {
    pub size: usize,
    pub skip_today: bool,
}

impl Default for ForecastWindow {
    fn default() -> Self {
        Self { size: 5, skip_today: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentDisplay {
    pub location: String,
    pub condition: String,
    pub icon: WeatherIcon,
    pub temperature: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind_speed: String,
    pub pressure: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastDayDisplay {
    /// Short weekday name, e.g. "Sat".
    pub weekday: String,
    pub icon: WeatherIcon,
    /// "max° / min°"
    pub temperature_range: String,
    pub condition: Option<String>,
}

pub fn render_current(snapshot: &WeatherSnapshot, unit: TemperatureUnit) -> CurrentDisplay {
    let current = &snapshot.current;
    let (wind, wind_suffix) = display_wind_speed(current.wind_speed_kph, unit);

    CurrentDisplay {
        location: format!("{}, {}", snapshot.resolved_location, snapshot.timezone),
        condition: current.condition_text.clone(),
        icon: WeatherIcon::from_condition_key(&current.condition_icon_key),
        temperature: degrees(current.temperature_c, unit),
        feels_like: degrees(current.feels_like_c, unit),
        humidity: format!("{}%", current.humidity_pct),
        wind_speed: format!("{wind} {wind_suffix}"),
        pressure: format!("{} hPa", current.pressure_hpa),
    }
}

/// Days past the end of `daily_forecast` are left out, never padded.
pub fn render_forecast(
    snapshot: &WeatherSnapshot,
    unit: TemperatureUnit,
    window: ForecastWindow,
) -> Vec<ForecastDayDisplay> {
    let start = usize::from(window.skip_today);

    snapshot
        .daily_forecast
        .iter()
        .skip(start)
        .take(window.size)
        .map(|day| render_day(day, unit))
        .collect()
}

fn render_day(day: &DayForecast, unit: TemperatureUnit) -> ForecastDayDisplay {
    ForecastDayDisplay {
        weekday: day.date.format("%a").to_string(),
        icon: WeatherIcon::from_condition_key(&day.condition_icon_key),
        temperature_range: format!(
            "{} / {}",
            degrees(day.temp_max_c, unit),
            degrees(day.temp_min_c, unit)
        ),
        condition: day.condition_text.clone(),
    }
}

fn degrees(celsius: f64, unit: TemperatureUnit) -> String {
    format!("{}°", display_temperature(celsius, unit))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::c_to_f;

    #[test]
    fn current_in_celsius() {
        let display = render_current(&fixtures::new_york(), TemperatureUnit::Celsius);

        assert_eq!(display.location, "New York, NY, USA, America/New_York");
        assert_eq!(display.condition, "Partly cloudy");
        assert_eq!(display.icon, WeatherIcon::CloudSun);
        assert_eq!(display.temperature, "25°");
        assert_eq!(display.feels_like, "26°");
        assert_eq!(display.humidity, "65.3%");
        assert_eq!(display.wind_speed, "13 km/h");
        assert_eq!(display.pressure, "1015.2 hPa");
    }

    #[test]
    fn current_in_fahrenheit() {
        let display = render_current(&fixtures::new_york(), TemperatureUnit::Fahrenheit);

        assert_eq!(display.temperature, "76°");
        assert_eq!(display.feels_like, "79°");
        assert_eq!(display.wind_speed, "8 mph");
        // unit-independent fields
        assert_eq!(display.humidity, "65.3%");
        assert_eq!(display.pressure, "1015.2 hPa");
    }

    #[test]
    fn temperature_tracks_source_celsius_for_both_units() {
        let mut snapshot = fixtures::new_york();
        for temp in [-17.5, -0.4, 0.0, 2.5, 24.5, 37.77] {
            snapshot.current.temperature_c = temp;

            let c = render_current(&snapshot, TemperatureUnit::Celsius);
            assert_eq!(c.temperature, format!("{}°", temp.round() as i64));

            let f = render_current(&snapshot, TemperatureUnit::Fahrenheit);
            assert_eq!(f.temperature, format!("{}°", c_to_f(temp)));
        }
    }

    #[test]
    fn unknown_icon_key_uses_fallback() {
        let mut snapshot = fixtures::new_york();
        snapshot.current.condition_icon_key = "volcanic-ash".to_string();
        snapshot.daily_forecast[1].condition_icon_key = "volcanic-ash".to_string();

        assert_eq!(render_current(&snapshot, TemperatureUnit::Celsius).icon, WeatherIcon::FALLBACK);
        let forecast = render_forecast(&snapshot, TemperatureUnit::Celsius, ForecastWindow::default());
        assert_eq!(forecast[0].icon, WeatherIcon::FALLBACK);
    }

    #[test]
    fn forecast_skips_today_and_shows_five_days() {
        let forecast = render_forecast(
            &fixtures::new_york(),
            TemperatureUnit::Celsius,
            ForecastWindow::default(),
        );

        let weekdays: Vec<_> = forecast.iter().map(|d| d.weekday.as_str()).collect();
        assert_eq!(weekdays, ["Sat", "Sun", "Mon", "Tue", "Wed"]);
        assert_eq!(forecast[0].temperature_range, "29° / 21°");
        assert_eq!(forecast[0].icon, WeatherIcon::Sun);
        assert_eq!(forecast[1].condition.as_deref(), Some("Rain"));
    }

    #[test]
    fn forecast_in_fahrenheit() {
        let forecast = render_forecast(
            &fixtures::new_york(),
            TemperatureUnit::Fahrenheit,
            ForecastWindow::default(),
        );
        // 29.1 -> 84.38, 20.5 -> 68.9
        assert_eq!(forecast[0].temperature_range, "84° / 69°");
    }

    #[test]
    fn short_forecast_is_not_padded() {
        let mut snapshot = fixtures::new_york();
        snapshot.daily_forecast.truncate(3);

        let forecast = render_forecast(&snapshot, TemperatureUnit::Celsius, ForecastWindow::default());

        assert_eq!(forecast.len(), 2);
        assert_eq!(forecast[0].weekday, "Sat");
        assert_eq!(forecast[1].weekday, "Sun");
    }

    #[test]
    fn empty_forecast_renders_nothing() {
        let mut snapshot = fixtures::new_york();
        snapshot.daily_forecast.clear();

        assert!(render_forecast(&snapshot, TemperatureUnit::Celsius, ForecastWindow::default()).is_empty());
    }

    #[test]
    fn window_without_skip_starts_today() {
        let window = ForecastWindow { size: 2, skip_today: false };
        let forecast = render_forecast(&fixtures::new_york(), TemperatureUnit::Celsius, window);

        let weekdays: Vec<_> = forecast.iter().map(|d| d.weekday.as_str()).collect();
        assert_eq!(weekdays, ["Fri", "Sat"]);
    }

    #[test]
    fn rendering_is_idempotent() {
        let snapshot = fixtures::new_york();
        for unit in [TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit] {
            let first = render_forecast(&snapshot, unit, ForecastWindow::default());
            let second = render_forecast(&snapshot, unit, ForecastWindow::default());
            assert_eq!(first, second);
            assert_eq!(render_current(&snapshot, unit), render_current(&snapshot, unit));
        }
    }
}
