//! HTTP client utilities for testing.
//!
//! This module provides helper functions for making HTTP requests to the
//! hadley server during tests.

use reqwest::{Client, Response, Url};
use serde_json::Value;
use std::error::Error;
use std::net::SocketAddr;
use std::time::Duration;

/// Default timeout for HTTP requests
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a default test client
pub fn create_test_client() -> Client {
    Client::builder()
        .timeout(DEFAULT_TIMEOUT)
        .build()
        .expect("Failed to build test HTTP client")
}

/// Build a URL for a hadley server endpoint
pub fn build_url(addr: &SocketAddr, path: &str) -> Url {
    format!("http://{}{}", addr, path)
        .parse()
        .expect("Failed to parse URL")
}

/// Make a GET request to the hadley server
pub async fn get(addr: &SocketAddr, path: &str) -> Result<Response, Box<dyn Error>> {
    let client = create_test_client();
    let url = build_url(addr, path);
    Ok(client.get(url).send().await?)
}

/// Make a POST request with a JSON body
pub async fn post_json(
    addr: &SocketAddr,
    path: &str,
    body: &Value,
) -> Result<Response, Box<dyn Error>> {
    let client = create_test_client();
    let url = build_url(addr, path);
    Ok(client.post(url).json(body).send().await?)
}

/// Make a POST request with a raw (possibly invalid) body
pub async fn post_raw(
    addr: &SocketAddr,
    path: &str,
    body: &str,
) -> Result<Response, Box<dyn Error>> {
    let client = create_test_client();
    let url = build_url(addr, path);
    Ok(client.post(url).body(body.to_string()).send().await?)
}

/// Read a response body as JSON
pub async fn body_json(response: Response) -> Result<Value, Box<dyn Error>> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let addr: SocketAddr = ([127, 0, 0, 1], 8080).into();
        let url = build_url(&addr, "/list-weather-files");
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/list-weather-files");
    }
}
