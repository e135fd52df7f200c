//! hadley - archives historical weather data to cloud object storage
//!
//! This is the main entry point for the hadley application.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use hadley::open_meteo::OpenMeteoClient;
use hadley::storage::ObjectStorage;
use hadley::{AppState, Config, HadleyError, Result, WeatherFetcher};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Validate configuration
    config.validate()?;

    hadley::init_tracing(&config.log_level);

    info!("Starting hadley v{}", env!("CARGO_PKG_VERSION"));

    // The bucket gates every storage-backed endpoint; its absence is an
    // operator error but must not prevent startup.
    match &config.storage.bucket {
        Some(bucket) => info!(bucket = %bucket, "Object storage bucket configured"),
        None => error!(
            "GCS_BUCKET_NAME is not set; every endpoint except / will fail \
             until the bucket is configured"
        ),
    }

    // Construct the collaborators once; handlers only ever read them
    let weather: Arc<dyn WeatherFetcher> = Arc::new(OpenMeteoClient::new());
    let storage = config.storage.bucket.as_deref().and_then(|bucket| {
        match ObjectStorage::for_gcs_bucket(bucket) {
            Ok(storage) => Some(Arc::new(storage)),
            Err(e) => {
                error!(error = %e, "Could not initialize object storage client");
                None
            }
        }
    });

    let state = AppState::new_shared(config.clone(), weather, storage);

    // Build the router
    let app = hadley::router(state)
        .layer(hadley::create_http_trace_layer())
        .layer(CorsLayer::permissive());

    // Create the server address
    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .map_err(|e| HadleyError::Config {
                message: format!("Invalid host address: {}", e),
            })?,
        config.server.port,
    ));

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| HadleyError::Server {
            message: format!("Failed to bind to address: {}", e),
        })?;

    // Set up graceful shutdown
    let shutdown_future = shutdown_signal();

    info!("Server is ready to accept connections");

    // Start the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_future)
        .await
        .map_err(|e| HadleyError::Server {
            message: format!("Server error: {}", e),
        })?;

    info!("Server has been gracefully shut down");
    Ok(())
}

/// Wait for a shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
