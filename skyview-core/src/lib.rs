//! Core library for the `skyview` weather screen.
//!
//! This crate defines:
//! - Shared domain models (readings, forecast entries, snapshots) and the temperature classifier
//! - Weekday labels for forecast cards
//! - The Open-Meteo forecast fetcher and its error taxonomy
//! - Screen state, update events and display preferences
//!
//! It is used by `skyview-cli`, but a graphical front end can drive the same [`ViewState`].

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod view;
pub mod weekday;

pub use config::Config;
pub use error::FetchError;
pub use model::{CurrentReading, ForecastEntry, IconCategory, Snapshot};
pub use provider::{ForecastSource, OpenMeteoClient};
pub use view::{DayCard, Theme, ViewEvent, ViewState, refresh};
pub use weekday::{day_label, day_label_from_now};
