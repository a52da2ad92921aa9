//! Screen state and the events that move it forward.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    model::{CurrentReading, ForecastEntry, IconCategory, Snapshot, truncate_celsius},
    provider::ForecastSource,
    weekday::day_label,
};

pub const DEFAULT_CITY: &str = "Rivne, UA";

/// Number of forecast days the screen has room for.
pub const VISIBLE_DAYS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Day,
    Night,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Day => Theme::Night,
            Theme::Night => Theme::Day,
        }
    }

    /// Background gradient, top-leading to bottom-trailing.
    pub fn gradient(&self) -> (&'static str, &'static str) {
        match self {
            Theme::Day => ("blue", "lightblue"),
            Theme::Night => ("black", "gray"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Day => "day",
            Theme::Night => "night",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    ToggleTheme,
    SnapshotLoaded(Snapshot),
    FetchFailed { message: String },
}

/// One forecast column on the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCard {
    pub label: &'static str,
    pub icon: IconCategory,
    pub temperature_c: i32,
}

impl DayCard {
    fn from_entry(today: Weekday, entry: &ForecastEntry) -> Self {
        Self {
            label: day_label(today, entry.day_offset),
            icon: entry.icon(),
            temperature_c: truncate_celsius(entry.temperature_c),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub city: String,
    pub theme: Theme,
    pub current: CurrentReading,
    pub forecast: Vec<ForecastEntry>,
    /// Set when the latest fetch failed; prior data stays visible.
    pub last_error: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_CITY, Theme::default())
    }
}

impl ViewState {
    pub fn new(city: impl Into<String>, theme: Theme) -> Self {
        Self {
            city: city.into(),
            theme,
            current: CurrentReading::default(),
            forecast: Vec::new(),
            last_error: None,
        }
    }

    pub fn apply(self, event: ViewEvent) -> Self {
        match event {
            ViewEvent::ToggleTheme => Self { theme: self.theme.toggle(), ..self },
            ViewEvent::SnapshotLoaded(Snapshot { current, forecast }) => {
                Self { current, forecast, last_error: None, ..self }
            }
            ViewEvent::FetchFailed { message } => Self { last_error: Some(message), ..self },
        }
    }

    /// Cards for the first [`VISIBLE_DAYS`] forecast entries.
    pub fn day_cards(&self, today: Weekday) -> Vec<DayCard> {
        self.forecast
            .iter()
            .take(VISIBLE_DAYS)
            .map(|entry| DayCard::from_entry(today, entry))
            .collect()
    }
}

/// Handle one presentation of the screen: fetch once and fold the outcome into `state`.
pub async fn refresh(source: &dyn ForecastSource, state: ViewState) -> ViewState {
    let event = match source.fetch().await {
        Ok(snapshot) => ViewEvent::SnapshotLoaded(snapshot),
        Err(err) => {
            warn!(kind = err.kind(), error = %err, "forecast fetch failed");
            ViewEvent::FetchFailed { message: err.user_message() }
        }
    };

    state.apply(event)
}
