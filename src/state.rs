//! Application state management for hadley.
//!
//! This module defines the shared state that is passed to all handlers:
//! the configuration plus the two collaborator handles, constructed once at
//! process start and read-only afterwards.

use std::sync::Arc;

use crate::config::Config;
use crate::error::{HadleyError, Result};
use crate::open_meteo::WeatherFetcher;
use crate::storage::ObjectStorage;

/// The main application state shared across all handlers
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Weather provider client
    pub weather: Arc<dyn WeatherFetcher>,
    /// Object storage client; `None` when the bucket is not configured
    pub storage: Option<Arc<ObjectStorage>>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        config: Config,
        weather: Arc<dyn WeatherFetcher>,
        storage: Option<Arc<ObjectStorage>>,
    ) -> Self {
        Self {
            config,
            weather,
            storage,
        }
    }

    /// Create a new AppState wrapped in an Arc for shared ownership
    pub fn new_shared(
        config: Config,
        weather: Arc<dyn WeatherFetcher>,
        storage: Option<Arc<ObjectStorage>>,
    ) -> Arc<Self> {
        Arc::new(Self::new(config, weather, storage))
    }

    /// Get the storage client, failing with `Misconfigured` when the bucket
    /// was never set. Every bucket-dependent handler calls this before
    /// touching any collaborator.
    pub fn storage_checked(&self) -> Result<&ObjectStorage> {
        self.storage
            .as_deref()
            .ok_or(HadleyError::Misconfigured)
    }
}
