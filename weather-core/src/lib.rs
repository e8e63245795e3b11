//! Core library for the `weather` widget.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The provider abstraction and the Visual Crossing client
//! - Shared domain models (snapshot, unit, location query)
//! - Rendering of snapshots into display strings, with unit conversion
//! - Session state that applies only the newest fetch result
//!
//! It is used by `weather-cli`, but can also be reused by other front ends.

pub mod config;
pub mod error;
pub mod icons;
pub mod model;
pub mod provider;
pub mod render;
pub mod session;
pub mod units;

pub use config::Config;
pub use error::FetchError;
pub use icons::WeatherIcon;
pub use model::{CurrentConditions, DayForecast, LocationQuery, TemperatureUnit, WeatherSnapshot};
pub use provider::{VisualCrossingProvider, WeatherProvider, provider_from_config};
pub use render::{CurrentDisplay, ForecastDayDisplay, ForecastWindow, render_current, render_forecast};
pub use session::{FetchOutcome, FetchTicket, ForecastPanel, Screen, WeatherSession};
