use async_trait::async_trait;
use std::fmt::Debug;

use crate::{Config, FetchError, LocationQuery, WeatherSnapshot};

pub mod visualcrossing;

pub use visualcrossing::VisualCrossingProvider;

/// A source of weather snapshots. One call is one outbound request; no retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch(&self, query: &LocationQuery) -> Result<WeatherSnapshot, FetchError>;
}

/// Construct the provider from config, failing early when no API key is available.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    Ok(Box::new(VisualCrossingProvider::from_config(config)?))
}
