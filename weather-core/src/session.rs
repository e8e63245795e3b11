//! Application state for one widget: the live snapshot, the selected unit,
//! and the forecast panel status.
//!
//! State changes only at two points: a fetch resolving and a unit toggle.
//! Every fetch takes a ticket; a result whose ticket is not the most
//! recently issued one is dropped, so a slow response for an old search can
//! never overwrite a newer one.

use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::{
    FetchError, LocationQuery, TemperatureUnit, WeatherProvider, WeatherSnapshot,
    render::{CurrentDisplay, ForecastDayDisplay, ForecastWindow, render_current, render_forecast},
};

/// Sequence number of one initiated fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The snapshot was replaced.
    Applied,
    /// The latest fetch failed; the previous snapshot is kept.
    Failed(FetchError),
    /// A newer fetch was started before this one resolved; result dropped.
    Superseded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "lowercase")]
pub enum ForecastPanel {
    Idle,
    Loading,
    Days(Vec<ForecastDayDisplay>),
    Error(String),
}

/// Everything the widget shows, rendered from the retained metric snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screen {
    pub unit: TemperatureUnit,
    pub current: Option<CurrentDisplay>,
    pub forecast: ForecastPanel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ForecastStatus {
    Idle,
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug)]
struct SessionState {
    snapshot: Option<Arc<WeatherSnapshot>>,
    unit: TemperatureUnit,
    forecast: ForecastStatus,
    latest: u64,
}

#[derive(Debug)]
pub struct WeatherSession {
    provider: Arc<dyn WeatherProvider>,
    window: ForecastWindow,
    state: Mutex<SessionState>,
}

impl WeatherSession {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self::with_window(provider, ForecastWindow::default())
    }

    pub fn with_window(provider: Arc<dyn WeatherProvider>, window: ForecastWindow) -> Self {
        Self {
            provider,
            window,
            state: Mutex::new(SessionState {
                snapshot: None,
                unit: TemperatureUnit::default(),
                forecast: ForecastStatus::Idle,
                latest: 0,
            }),
        }
    }

    /// Fetch `query` and apply the result unless a newer fetch started meanwhile.
    pub async fn search(&self, query: &LocationQuery) -> FetchOutcome {
        let ticket = self.begin_fetch();
        debug!(location = %query, ?ticket, "Starting fetch");
        let result = self.provider.fetch(query).await;
        self.complete_fetch(ticket, result)
    }

    /// Issue a new ticket and put the forecast panel into its loading state.
    /// Any ticket issued earlier becomes stale.
    pub fn begin_fetch(&self) -> FetchTicket {
        let mut state = self.state.lock();
        state.latest += 1;
        state.forecast = ForecastStatus::Loading;
        FetchTicket(state.latest)
    }

    pub fn complete_fetch(
        &self,
        ticket: FetchTicket,
        result: Result<WeatherSnapshot, FetchError>,
    ) -> FetchOutcome {
        let mut state = self.state.lock();

        if ticket.0 != state.latest {
            debug!(?ticket, latest = state.latest, "Discarding superseded response");
            return FetchOutcome::Superseded;
        }

        match result {
            Ok(snapshot) => {
                info!(location = %snapshot.resolved_location, "Weather updated");
                state.snapshot = Some(Arc::new(snapshot));
                state.forecast = ForecastStatus::Ready;
                FetchOutcome::Applied
            }
            Err(err) => {
                warn!(error = %err, "Weather fetch failed");
                state.forecast = ForecastStatus::Failed(err.to_string());
                FetchOutcome::Failed(err)
            }
        }
    }

    /// Returns `false` when `unit` was already selected.
    pub fn set_unit(&self, unit: TemperatureUnit) -> bool {
        let mut state = self.state.lock();
        if state.unit == unit {
            return false;
        }
        debug!(%unit, "Switching unit");
        state.unit = unit;
        true
    }

    pub fn toggle_unit(&self) -> TemperatureUnit {
        let mut state = self.state.lock();
        state.unit = state.unit.toggled();
        state.unit
    }

    pub fn unit(&self) -> TemperatureUnit {
        self.state.lock().unit
    }

    pub fn snapshot(&self) -> Option<Arc<WeatherSnapshot>> {
        self.state.lock().snapshot.clone()
    }

    pub fn screen(&self) -> Screen {
        let state = self.state.lock();
        let unit = state.unit;
        let snapshot = state.snapshot.as_deref();

        let forecast = match &state.forecast {
            ForecastStatus::Idle => ForecastPanel::Idle,
            ForecastStatus::Loading => ForecastPanel::Loading,
            ForecastStatus::Failed(message) => ForecastPanel::Error(message.clone()),
            ForecastStatus::Ready => snapshot
                .map(|s| ForecastPanel::Days(render_forecast(s, unit, self.window)))
                .unwrap_or(ForecastPanel::Idle),
        };

        Screen {
            unit,
            current: snapshot.map(|s| render_current(s, unit)),
            forecast,
        }
    }
}
