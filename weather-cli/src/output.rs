use chrono::NaiveDateTime;
use weather_core::{ForecastPanel, Screen};

use crate::cities::POPULAR_CITIES;

/// Render the widget as terminal lines. `now` is the local time for the header.
pub fn format_screen(screen: &Screen, now: NaiveDateTime) -> String {
    let mut lines = vec![now.format("%A, %B %-d, %Y %I:%M %p").to_string()];

    match &screen.current {
        Some(current) => {
            lines.push(current.location.clone());
            lines.push(format!(
                "  {}  {}  {}",
                current.icon.glyph(),
                current.temperature,
                current.condition
            ));
            lines.push(format!(
                "  Feels like {}   Humidity {}   Wind {}   Pressure {}",
                current.feels_like, current.humidity, current.wind_speed, current.pressure
            ));
        }
        None => lines.push("No weather loaded yet.".to_string()),
    }

    lines.push(String::new());

    match &screen.forecast {
        ForecastPanel::Idle => {}
        ForecastPanel::Loading => lines.push("Loading forecast...".to_string()),
        ForecastPanel::Days(days) if days.is_empty() => {
            lines.push("No forecast available.".to_string());
        }
        ForecastPanel::Days(days) => {
            lines.push(format!("Forecast ({})", screen.unit.symbol()));
            for day in days {
                lines.push(format!(
                    "  {:<4} {}  {:<12} {}",
                    day.weekday,
                    day.icon.glyph(),
                    day.temperature_range,
                    day.condition.as_deref().unwrap_or_default()
                ));
            }
        }
        ForecastPanel::Error(message) => lines.push(format!("Error: {message}")),
    }

    lines.join("\n")
}

pub fn print_screen(screen: &Screen) {
    println!();
    println!("{}", format_screen(screen, chrono::Local::now().naive_local()));
}

pub fn print_cities() {
    println!("Popular cities:");
    for city in POPULAR_CITIES {
        println!("  {city}");
    }
}
