//! In-process test servers with fake collaborators.
//!
//! Each test boots the real router on an ephemeral localhost port, backed by
//! a scripted weather fetcher and an in-memory object store, so every
//! assertion runs over actual HTTP.

use async_trait::async_trait;
use object_store::memory::InMemory;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use hadley::{AppState, Config, HadleyError, ObjectStorage, Result, WeatherFetcher, WeatherQuery};

/// Bucket name used by every in-memory store
pub const TEST_BUCKET: &str = "hadley-test-bucket";

/// A scripted weather provider that records how often it was called.
pub struct FakeWeather {
    response: Option<Value>,
    calls: AtomicUsize,
}

impl FakeWeather {
    /// A provider that always returns `record`
    pub fn succeeding(record: Value) -> Arc<Self> {
        Arc::new(Self {
            response: Some(record),
            calls: AtomicUsize::new(0),
        })
    }

    /// A provider that always fails
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            response: None,
            calls: AtomicUsize::new(0),
        })
    }

    /// How many times `fetch_daily` was invoked
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherFetcher for FakeWeather {
    async fn fetch_daily(&self, _query: &WeatherQuery) -> Result<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone().ok_or(HadleyError::UpstreamFetch)
    }
}

/// A plausible Open-Meteo archive response
pub fn sample_record() -> Value {
    json!({
        "latitude": 52.52,
        "longitude": 13.41,
        "timezone": "GMT",
        "daily": {
            "time": ["2023-03-01", "2023-03-02", "2023-03-03"],
            "temperature_2m_max": [8.4, 6.2, 5.9],
            "temperature_2m_min": [2.1, 0.4, -0.3],
            "temperature_2m_mean": [5.0, 3.1, 2.4],
            "apparent_temperature_max": [6.0, 3.8, 3.2],
            "apparent_temperature_min": [-0.6, -2.9, -3.5],
            "apparent_temperature_mean": [2.4, 0.6, -0.2]
        }
    })
}

/// An object-store client over a fresh in-memory backend
pub fn memory_storage() -> Arc<ObjectStorage> {
    Arc::new(ObjectStorage::with_store(
        Arc::new(InMemory::new()),
        TEST_BUCKET,
    ))
}

/// Boot the real router on an ephemeral port. `storage: None` simulates a
/// process started without a bucket.
pub async fn start_server(
    weather: Arc<FakeWeather>,
    storage: Option<Arc<ObjectStorage>>,
) -> SocketAddr {
    let state = AppState::new_shared(Config::default(), weather, storage);
    let app = hadley::router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0))
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read listener address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    addr
}
