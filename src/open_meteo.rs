//! Weather provider client for the Open-Meteo archive API.
//!
//! Issues a single bounded-timeout read for a fixed set of daily variables.
//! Every provider-side failure collapses into [`HadleyError::UpstreamFetch`];
//! the distinct causes are logged here and nowhere else.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::error;

use crate::error::{HadleyError, Result};

/// Fixed archive endpoint
pub const BASE_URL: &str = "https://archive-api.open-meteo.com/v1/archive";

/// Daily variables requested for every query
const DAILY_VARIABLES: [&str; 6] = [
    "temperature_2m_max",
    "temperature_2m_min",
    "temperature_2m_mean",
    "apparent_temperature_max",
    "apparent_temperature_min",
    "apparent_temperature_mean",
];

/// Upper bound on a single provider round trip
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// A validated weather query: coordinate plus inclusive date range.
///
/// Date ordering is deliberately not checked here; the provider rejects
/// inverted ranges itself.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub start_date: String,
    pub end_date: String,
}

/// Seam between the orchestrator and the weather provider, so tests can
/// substitute a fake.
#[async_trait]
pub trait WeatherFetcher: Send + Sync {
    /// Fetch daily statistics for the query, returning the provider's raw
    /// JSON document.
    async fn fetch_daily(&self, query: &WeatherQuery) -> Result<Value>;
}

/// Client for the Open-Meteo historical archive.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    http: Client,
    base_url: String,
}

impl OpenMeteoClient {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Point the client at a different endpoint (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeatherFetcher for OpenMeteoClient {
    async fn fetch_daily(&self, query: &WeatherQuery) -> Result<Value> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("latitude", query.latitude.to_string()),
                ("longitude", query.longitude.to_string()),
                ("start_date", query.start_date.clone()),
                ("end_date", query.end_date.clone()),
                ("daily", DAILY_VARIABLES.join(",")),
                ("timezone", "GMT".to_string()),
            ])
            .timeout(FETCH_TIMEOUT)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    error!(query = ?query, "Open-Meteo request timed out");
                } else {
                    error!(query = ?query, error = %e, "Could not connect to Open-Meteo");
                }
                HadleyError::UpstreamFetch
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!(query = ?query, error = %e, "Failed to read Open-Meteo response body");
            HadleyError::UpstreamFetch
        })?;

        if !status.is_success() {
            error!(
                query = ?query,
                status = %status,
                body = %truncate_body(&body),
                "Open-Meteo rejected the request"
            );
            return Err(HadleyError::UpstreamFetch);
        }

        serde_json::from_str(&body).map_err(|e| {
            error!(
                query = ?query,
                error = %e,
                body = %truncate_body(&body),
                "Open-Meteo response was not valid JSON"
            );
            HadleyError::UpstreamFetch
        })
    }
}

/// Keep logged response bodies to a readable size.
fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
