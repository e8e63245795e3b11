use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode, Url, header::CONTENT_TYPE};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::{
    Config, FetchError, LocationQuery,
    model::{CurrentConditions, DayForecast, WeatherSnapshot},
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str =
    "https://weather.visualcrossing.com/VisualCrossingWebServices/rest/services/timeline/";

const FALLBACK_TEXT_ERROR: &str = "Invalid API response";
const FALLBACK_JSON_ERROR: &str = "Unable to fetch weather data";

/// Client for the Visual Crossing Timeline API.
#[derive(Debug, Clone)]
pub struct VisualCrossingProvider {
    api_key: String,
    base_url: Url,
    http: Client,
}

impl VisualCrossingProvider {
    pub fn new(api_key: String, base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid provider base URL: {base_url}"))?;
        if base_url.cannot_be_a_base() {
            bail!("Provider base URL cannot carry a location path: {base_url}");
        }

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { api_key, base_url, http })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.require_api_key()?;
        Self::new(
            api_key.to_owned(),
            &config.base_url,
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// `{base}/{location}?unitGroup=metric&key=..&contentType=json`, with the
    /// location percent-encoded as a single path segment.
    fn request_url(&self, query: &LocationQuery) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(query.as_str());
        }
        url.query_pairs_mut()
            .append_pair("unitGroup", "metric")
            .append_pair("key", &self.api_key)
            .append_pair("contentType", "json");
        url
    }
}

#[async_trait]
impl WeatherProvider for VisualCrossingProvider {
    #[instrument(skip_all, fields(location = %query))]
    async fn fetch(&self, query: &LocationQuery) -> Result<WeatherSnapshot, FetchError> {
        let url = self.request_url(query);
        // path only: the query string carries the API key
        debug!(path = url.path(), "Requesting Visual Crossing timeline");

        let res = self.http.get(url).send().await.map_err(network_error)?;

        let status = res.status();
        let is_json = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));
        let body = res.text().await.map_err(network_error)?;

        debug!(%status, is_json, bytes = body.len(), "Received Visual Crossing response");

        classify_response(status, is_json, &body)
    }
}

/// Non-JSON bodies are provider error text whatever the status; JSON with a
/// failing status is a provider error; JSON with a success status must match
/// the timeline schema.
fn classify_response(
    status: StatusCode,
    is_json: bool,
    body: &str,
) -> Result<WeatherSnapshot, FetchError> {
    if !is_json {
        let message = body.trim();
        let message = if message.is_empty() { FALLBACK_TEXT_ERROR } else { message };
        return Err(FetchError::ProviderError(truncate_body(message)));
    }

    if !status.is_success() {
        let message = serde_json::from_str::<VcErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_JSON_ERROR.to_string());
        return Err(FetchError::ProviderError(truncate_body(&message)));
    }

    let parsed: VcTimelineResponse = serde_json::from_str(body)
        .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

    WeatherSnapshot::try_from(parsed)
}

/// The request URL carries the API key, so it is stripped before formatting.
fn network_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::NetworkError("request timed out".to_string())
    } else {
        FetchError::NetworkError(err.without_url().to_string())
    }
}

#[derive(Debug, Deserialize)]
struct VcErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VcTimelineResponse {
    resolved_address: String,
    timezone: String,
    current_conditions: VcCurrentConditions,
    days: Vec<VcDay>,
}

#[derive(Debug, Deserialize)]
struct VcCurrentConditions {
    temp: f64,
    feelslike: f64,
    humidity: f64,
    windspeed: f64,
    pressure: f64,
    conditions: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct VcDay {
    datetime: String,
    tempmax: f64,
    tempmin: f64,
    icon: String,
    #[serde(default)]
    conditions: Option<String>,
}

impl TryFrom<VcTimelineResponse> for WeatherSnapshot {
    type Error = FetchError;

    fn try_from(wire: VcTimelineResponse) -> Result<Self, Self::Error> {
        let daily_forecast = wire
            .days
            .into_iter()
            .map(DayForecast::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let current = wire.current_conditions;

        Ok(WeatherSnapshot {
            resolved_location: wire.resolved_address,
            timezone: wire.timezone,
            current: CurrentConditions {
                temperature_c: current.temp,
                feels_like_c: current.feelslike,
                humidity_pct: current.humidity,
                wind_speed_kph: current.windspeed,
                pressure_hpa: current.pressure,
                condition_text: current.conditions,
                condition_icon_key: current.icon,
            },
            daily_forecast,
        })
    }
}

impl TryFrom<VcDay> for DayForecast {
    type Error = FetchError;

    fn try_from(day: VcDay) -> Result<Self, Self::Error> {
        let date = NaiveDate::parse_from_str(&day.datetime, "%Y-%m-%d").map_err(|e| {
            FetchError::MalformedResponse(format!("Invalid day date '{}': {e}", day.datetime))
        })?;

        Ok(DayForecast {
            date,
            temp_max_c: day.tempmax,
            temp_min_c: day.tempmin,
            condition_icon_key: day.icon,
            condition_text: day.conditions,
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
