//! File-content endpoint handler.
//!
//! Returns an archived object parsed as JSON. The wildcard route lets object
//! names contain `/`. A missing object and an unparseable one produce the
//! same 404 on purpose; the storage client's logs tell them apart.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::error::{HadleyError, Result};
use crate::logging::{generate_request_id, log_request_error};
use crate::state::AppState;

/// Handle GET /weather-file-content/{file_name} requests
pub async fn weather_file_content_handler(
    State(state): State<Arc<AppState>>,
    file_name: Option<Path<String>>,
) -> Response {
    let request_id = generate_request_id();
    let file_name = file_name.map(|Path(name)| name).unwrap_or_default();

    match weather_file_content(&state, &file_name).await {
        Ok(response) => response,
        Err(error) => {
            log_request_error(
                &error,
                "/weather-file-content",
                &request_id,
                Some(&file_name),
            );
            super::error_response(&error)
        }
    }
}

async fn weather_file_content(state: &AppState, file_name: &str) -> Result<Response> {
    let storage = state.storage_checked()?;

    if file_name.is_empty() {
        return Err(HadleyError::MissingFileName);
    }

    info!(bucket = %storage.bucket(), key = %file_name, "Fetching archived file content");
    let content = storage.get_json(file_name).await?;

    Ok(Json(content).into_response())
}
