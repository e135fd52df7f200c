//! Index endpoint handler.
//!
//! A fixed acknowledgment used to check that the service is up. The only
//! endpoint that works without a configured bucket.

use axum::Json;
use serde_json::{json, Value};

/// Handle GET / requests
pub async fn index_handler() -> Json<Value> {
    Json(json!({ "message": "Welcome to the Weather Data Service API!" }))
}
