//! # hadley
//!
//! A small HTTP service that archives historical weather data to cloud
//! object storage.
//!
//! Given a coordinate and a date range, hadley fetches daily statistics from
//! the Open-Meteo archive API, stores the raw result as a JSON object under
//! a deterministic name, and serves read endpoints to list and retrieve what
//! was stored.
//!
//! ## Architecture
//!
//! - **Weather provider client**: one bounded-timeout read against the
//!   archive API, all failures collapsed to a single outcome
//! - **Object store client**: write/list/read-as-JSON over an
//!   [`object_store`] backend with uniform failure normalization
//! - **Request orchestrator**: axum handlers that validate input, derive the
//!   storage key, and sequence fetch-then-store

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod naming;
pub mod open_meteo;
pub mod state;
pub mod storage;

pub use config::Config;
pub use error::{HadleyError, Result};
pub use handlers::router;
pub use logging::{create_http_trace_layer, generate_request_id, init_tracing, log_request_error};
pub use open_meteo::{OpenMeteoClient, WeatherFetcher, WeatherQuery};
pub use state::AppState;
pub use storage::ObjectStorage;
