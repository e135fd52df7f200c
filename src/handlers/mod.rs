//! HTTP request handlers for the hadley API.
//!
//! This module contains all the endpoint handlers for the web server and the
//! shared error-to-response mapping.

pub mod content;
pub mod index;
pub mod list;
pub mod store;

pub use content::weather_file_content_handler;
pub use index::index_handler;
pub use list::list_weather_files_handler;
pub use store::store_weather_data_handler;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use crate::error::HadleyError;
use crate::state::AppState;

/// Build the service router. Shared between `main` and the integration tests.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/store-weather-data", post(store_weather_data_handler))
        .route("/list-weather-files", get(list_weather_files_handler))
        .route("/weather-file-content", get(weather_file_content_handler))
        .route(
            "/weather-file-content/*file_name",
            get(weather_file_content_handler),
        )
        .with_state(state)
}

/// Convert an error into its HTTP response. Only the error's display string
/// crosses the boundary; causes are logged where the error was produced.
pub(crate) fn error_response(error: &HadleyError) -> Response {
    (
        status_for(error),
        Json(serde_json::json!({ "error": error.to_string() })),
    )
        .into_response()
}

fn status_for(error: &HadleyError) -> StatusCode {
    match error {
        HadleyError::MalformedInput { .. }
        | HadleyError::MissingParameters { .. }
        | HadleyError::InvalidType
        | HadleyError::InvalidDateFormat
        | HadleyError::MissingFileName => StatusCode::BAD_REQUEST,
        HadleyError::FileNotFound { .. } => StatusCode::NOT_FOUND,
        HadleyError::UpstreamFetch => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
