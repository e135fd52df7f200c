//! Listing endpoint handler.
//!
//! Enumerates archived weather objects by their fixed name prefix. The order
//! is whatever the backend returns; an empty bucket is a success.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::error::Result;
use crate::logging::{generate_request_id, log_request_error};
use crate::naming::WEATHER_PREFIX;
use crate::state::AppState;

/// Handle GET /list-weather-files requests
pub async fn list_weather_files_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();

    match list_weather_files(&state).await {
        Ok(response) => response,
        Err(error) => {
            log_request_error(&error, "/list-weather-files", &request_id, None);
            super::error_response(&error)
        }
    }
}

async fn list_weather_files(state: &AppState) -> Result<Response> {
    let storage = state.storage_checked()?;

    info!(
        bucket = %storage.bucket(),
        prefix = WEATHER_PREFIX,
        "Listing archived weather files"
    );
    let files = storage.list(WEATHER_PREFIX).await?;

    Ok(Json(json!({ "files": files, "bucket": storage.bucket() })).into_response())
}
