//! Store endpoint handler.
//!
//! Validates the inbound request, fetches the date range from the weather
//! provider, and persists the result under a deterministic object name.
//! The write is never attempted unless the fetch succeeded.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info};

use crate::error::{HadleyError, Result};
use crate::logging::{generate_request_id, log_request_error};
use crate::naming::{is_valid_date, storage_key};
use crate::open_meteo::WeatherQuery;
use crate::state::AppState;

const REQUIRED_FIELDS: [&str; 4] = ["latitude", "longitude", "start_date", "end_date"];

/// Handle POST /store-weather-data requests
pub async fn store_weather_data_handler(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Response {
    let request_id = generate_request_id();

    match store_weather_data(&state, &body).await {
        Ok(response) => response,
        Err(error) => {
            log_request_error(&error, "/store-weather-data", &request_id, None);
            super::error_response(&error)
        }
    }
}

async fn store_weather_data(state: &AppState, body: &str) -> Result<Response> {
    let storage = state.storage_checked()?;
    let query = parse_store_request(body)?;
    let file_name = storage_key(
        query.latitude,
        query.longitude,
        &query.start_date,
        &query.end_date,
    );

    info!(
        latitude = query.latitude,
        longitude = query.longitude,
        start_date = %query.start_date,
        end_date = %query.end_date,
        "Fetching weather data"
    );
    let record = state.weather.fetch_daily(&query).await?;

    // Pretty-printed so stored objects stay readable in the console
    let content = serde_json::to_string_pretty(&record).map_err(|e| {
        error!(error = %e, "Could not serialize weather record");
        HadleyError::StorageWrite
    })?;

    let gcs_path = format!("gs://{}/{}", storage.bucket(), file_name);
    info!(path = %gcs_path, "Uploading weather data");
    storage.put_json(&file_name, content).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Weather data fetched and stored successfully.",
            "file_name": file_name,
            "gcs_path": gcs_path,
        })),
    )
        .into_response())
}

/// Validate the raw request body into a [`WeatherQuery`].
///
/// Checks run in contract order: body parses as a JSON object, all four
/// fields present and non-null, coordinates are numbers, dates are strict
/// `YYYY-MM-DD` strings. Date ordering is left to the provider.
fn parse_store_request(body: &str) -> Result<WeatherQuery> {
    if body.trim().is_empty() {
        return Err(HadleyError::MalformedInput {
            message: "No JSON payload received.".to_string(),
        });
    }

    let payload: Value = serde_json::from_str(body).map_err(|_| HadleyError::MalformedInput {
        message: "Malformed JSON.".to_string(),
    })?;
    let payload = payload.as_object().ok_or_else(|| HadleyError::MalformedInput {
        message: "Request body must be a JSON object.".to_string(),
    })?;

    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| payload.get(*field).map_or(true, Value::is_null))
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(HadleyError::MissingParameters { fields: missing });
    }

    let latitude = payload["latitude"].as_f64().ok_or(HadleyError::InvalidType)?;
    let longitude = payload["longitude"]
        .as_f64()
        .ok_or(HadleyError::InvalidType)?;

    let start_date = date_field(&payload["start_date"])?;
    let end_date = date_field(&payload["end_date"])?;

    Ok(WeatherQuery {
        latitude,
        longitude,
        start_date,
        end_date,
    })
}

fn date_field(value: &Value) -> Result<String> {
    value
        .as_str()
        .filter(|s| is_valid_date(s))
        .map(str::to_string)
        .ok_or(HadleyError::InvalidDateFormat)
}
