use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    error::FetchError,
    model::{CurrentReading, ForecastEntry, Snapshot},
};

use super::ForecastSource;

pub const OPEN_METEO_BASE_URL: &str = "https://api.open-meteo.com";

const FORECAST_PATH: &str = "/v1/forecast";

/// Rivne, UA; current temperature plus daily maximum, dates in GMT.
const FORECAST_QUERY: &str = "latitude=50.6071&longitude=26.1416\
    &current=temperature_2m&daily=temperature_2m_max&timezone=GMT";

/// Client for the fixed Open-Meteo forecast request.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    base_url: String,
    http: Client,
}

impl OpenMeteoClient {
    pub fn new() -> Self {
        Self::with_base_url(OPEN_METEO_BASE_URL)
    }

    /// Same request against a different host, e.g. a mirror or a mock server.
    /// Only scheme and authority change; path and query stay fixed.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), http: Client::new() }
    }

    /// Full request URL.
    pub fn endpoint(&self) -> Result<Url, FetchError> {
        let raw = format!(
            "{}{}?{}",
            self.base_url.trim_end_matches('/'),
            FORECAST_PATH,
            FORECAST_QUERY
        );

        Url::parse(&raw)
            .map_err(|e| FetchError::InvalidEndpoint { url: raw.clone(), reason: e.to_string() })
    }
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ForecastSource for OpenMeteoClient {
    async fn fetch(&self) -> Result<Snapshot, FetchError> {
        let url = self.endpoint()?;
        debug!(%url, "requesting forecast");

        let res = self.http.get(url).send().await?;

        let status = res.status();
        debug!(%status, "forecast response received");

        if status != StatusCode::OK {
            // The status is the failure; a body that cannot be read is just left out.
            let body = res.text().await.unwrap_or_default();
            return Err(FetchError::UnexpectedStatus { status, body: truncate_body(&body) });
        }

        let body = res.text().await?;

        let snapshot = decode_snapshot(&body)?;
        info!(
            temperature_c = snapshot.current.temperature_c,
            days = snapshot.forecast.len(),
            "forecast loaded"
        );

        Ok(snapshot)
    }
}

#[derive(Debug, Deserialize)]
struct OmCurrent {
    temperature_2m: f64,
}

#[derive(Debug, Deserialize)]
struct OmDaily {
    time: Vec<String>,
    temperature_2m_max: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct OmResponse {
    current: OmCurrent,
    daily: OmDaily,
}

/// Decode an Open-Meteo response body into a snapshot.
pub fn decode_snapshot(body: &str) -> Result<Snapshot, FetchError> {
    let parsed: OmResponse =
        serde_json::from_str(body).map_err(|e| FetchError::MalformedPayload(e.to_string()))?;

    let OmDaily { time, temperature_2m_max } = parsed.daily;

    if time.is_empty() || temperature_2m_max.is_empty() {
        return Err(FetchError::MalformedPayload("daily forecast is empty".to_string()));
    }

    if time.len() != temperature_2m_max.len() {
        return Err(FetchError::MalformedPayload(format!(
            "daily arrays differ in length: {} dates, {} temperatures",
            time.len(),
            temperature_2m_max.len()
        )));
    }

    let forecast = time
        .into_iter()
        .zip(temperature_2m_max)
        .zip(0_i64..)
        .map(|((date, temperature_c), day_offset)| ForecastEntry { date, temperature_c, day_offset })
        .collect();

    Ok(Snapshot { current: CurrentReading::from_celsius(parsed.current.temperature_2m), forecast })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
