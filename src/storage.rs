//! Object storage client for archived weather data.
//!
//! Wraps an [`ObjectStore`] backend (Google Cloud Storage in production,
//! in-memory in tests) behind the three operations this service needs.
//! Distinct backend failures (bucket missing, permission denied, object
//! missing, transport errors) are logged with their cause but normalized
//! into a single failure kind per operation.

use bytes::Bytes;
use futures::TryStreamExt;
use object_store::gcp::GoogleCloudStorageBuilder;
use object_store::path::Path;
use object_store::{Attribute, AttributeValue, Attributes, ObjectStore, PutOptions};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

use crate::error::{HadleyError, Result};

/// Object storage client for weather data.
pub struct ObjectStorage {
    store: Arc<dyn ObjectStore>,
    bucket: String,
}

impl std::fmt::Debug for ObjectStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectStorage")
            .field("bucket", &self.bucket)
            .finish_non_exhaustive()
    }
}

impl ObjectStorage {
    /// Create a client for a Google Cloud Storage bucket.
    ///
    /// Credentials come from the environment (service-account key or
    /// application-default credentials), matching how the service runs on
    /// GCP and on developer machines.
    pub fn for_gcs_bucket(bucket: &str) -> Result<Self> {
        let store = GoogleCloudStorageBuilder::from_env()
            .with_bucket_name(bucket)
            .build()
            .map_err(|e| {
                error!(bucket = %bucket, error = %e, "Could not initialize GCS client");
                HadleyError::Misconfigured
            })?;

        Ok(Self::with_store(Arc::new(store), bucket))
    }

    /// Create a client over an arbitrary backend. Tests use this with
    /// `object_store::memory::InMemory`.
    pub fn with_store(store: Arc<dyn ObjectStore>, bucket: impl Into<String>) -> Self {
        Self {
            store,
            bucket: bucket.into(),
        }
    }

    /// The bucket this client writes into.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Create or overwrite the object at `key` with a JSON document.
    #[instrument(skip(self, content), fields(bucket = %self.bucket, key = %key))]
    pub async fn put_json(&self, key: &str, content: String) -> Result<()> {
        let location = Path::from(key);
        let attributes = Attributes::from_iter([(
            Attribute::ContentType,
            AttributeValue::from("application/json"),
        )]);
        let opts = PutOptions {
            attributes,
            ..Default::default()
        };

        debug!(size = content.len(), "Writing object");

        self.store
            .put_opts(&location, Bytes::from(content).into(), opts)
            .await
            .map_err(|e| {
                error!(bucket = %self.bucket, key = %key, error = %e, "Failed to write object");
                HadleyError::StorageWrite
            })?;

        info!(bucket = %self.bucket, key = %key, "Object written");
        Ok(())
    }

    /// List object names starting with `prefix`. An empty match is an empty
    /// vec, not a failure.
    ///
    /// [`ObjectStore`] prefixes are path-segment based, so a name prefix
    /// like `weather_` has to be filtered out of the full listing.
    #[instrument(skip(self), fields(bucket = %self.bucket, prefix = %prefix))]
    pub async fn list(&self, prefix: &str) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut stream = self.store.list(None);

        while let Some(meta) = stream.try_next().await.map_err(|e| {
            error!(bucket = %self.bucket, error = %e, "Failed to list objects");
            HadleyError::StorageList
        })? {
            let name = meta.location.to_string();
            if name.starts_with(prefix) {
                names.push(name);
            }
        }

        info!(bucket = %self.bucket, prefix = %prefix, count = names.len(), "Listed objects");
        Ok(names)
    }

    /// Download the object at `key` and parse it as JSON.
    ///
    /// A missing object, an unreadable object, and an object holding
    /// invalid JSON are indistinguishable to the caller; the log lines
    /// below are where operators tell them apart.
    #[instrument(skip(self), fields(bucket = %self.bucket, key = %key))]
    pub async fn get_json(&self, key: &str) -> Result<Value> {
        let location = Path::from(key);
        let not_found = || HadleyError::FileNotFound {
            file_name: key.to_string(),
        };

        let result = match self.store.get(&location).await {
            Ok(result) => result,
            Err(object_store::Error::NotFound { .. }) => {
                warn!(bucket = %self.bucket, key = %key, "Object not found");
                return Err(not_found());
            }
            Err(e) => {
                error!(bucket = %self.bucket, key = %key, error = %e, "Failed to read object");
                return Err(not_found());
            }
        };

        let bytes = result.bytes().await.map_err(|e| {
            error!(bucket = %self.bucket, key = %key, error = %e, "Failed to download object body");
            not_found()
        })?;

        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(bucket = %self.bucket, key = %key, error = %e, "Object content is not valid JSON");
            not_found()
        })
    }
}
