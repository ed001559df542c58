//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the audit, including:
//! - Building HTTP clients with the configured user agent and timeouts
//! - Decoded GET requests for page content
//! - Raw GET requests that keep the wire-level encoding headers
//! - Transport error classification

use crate::config::AuditConfig;
use reqwest::header::{HeaderMap, ACCEPT_ENCODING};
use reqwest::Client;
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;

/// Encodings advertised by raw fetches
const RAW_ACCEPT_ENCODING: &str = "gzip, br";

/// Transport-level failures: no HTTP response was received
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}: {source}")]
    Connect { url: String, source: reqwest::Error },

    #[error("Request failed for {url}: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("Failed to read response body from {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

impl FetchError {
    fn classify(url: &str, error: reqwest::Error) -> Self {
        let url = url.to_string();
        if error.is_timeout() {
            FetchError::Timeout { url }
        } else if error.is_connect() {
            FetchError::Connect { url, source: error }
        } else {
            FetchError::Request { url, source: error }
        }
    }
}

/// A received HTTP response, whatever its status
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// HTTP status code
    pub status_code: u16,

    /// Response headers keyed by lower-cased name
    pub headers: BTreeMap<String, String>,

    /// Response body as text
    pub body: String,
}

impl FetchedPage {
    /// Returns true for a 200 response
    pub fn is_ok(&self) -> bool {
        self.status_code == 200
    }

    /// Looks up a header by name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The audit configuration
/// * `decompress` - Whether gzip/brotli bodies are decoded transparently
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use seo_audit::config::AuditConfig;
/// use seo_audit::fetch::build_http_client;
///
/// let config = AuditConfig::new("https://example.com");
/// let client = build_http_client(&config, true).unwrap();
/// ```
pub fn build_http_client(config: &AuditConfig, decompress: bool) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(config.timeout())
        .connect_timeout(Duration::from_secs(10).min(config.timeout()))
        .gzip(decompress)
        .brotli(decompress)
        .build()
}

/// Issues the GET requests for every check
///
/// Both clients are reference-counted internally, so cloning a `Fetcher`
/// is cheap and every spawned check can own one.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    raw_client: Client,
}

impl Fetcher {
    /// Creates a fetcher from the audit configuration
    pub fn new(config: &AuditConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config, true)?,
            raw_client: build_http_client(config, false)?,
        })
    }

    /// Fetches a URL and returns its decoded body
    ///
    /// Any received response is a success, including 4xx and 5xx; the
    /// caller decides how to classify the status.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to fetch
    ///
    /// # Returns
    ///
    /// * `Ok(FetchedPage)` - A response was received
    /// * `Err(FetchError)` - DNS, connect, TLS or timeout failure
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::classify(url, e))?;

        let status_code = response.status().as_u16();
        let headers = lowercase_headers(response.headers());
        let body = response.text().await.map_err(|e| FetchError::Body {
            url: url.to_string(),
            source: e,
        })?;

        tracing::debug!("GET {} -> {} ({} bytes)", url, status_code, body.len());

        Ok(FetchedPage {
            status_code,
            headers,
            body,
        })
    }

    /// Fetches a URL without transparent decompression
    ///
    /// Advertises `gzip, br` itself so the server's compression choice and
    /// the transferred `content-length` stay visible in the headers. The
    /// body is a lossy UTF-8 view of the bytes on the wire.
    pub async fn fetch_raw(&self, url: &str) -> Result<FetchedPage, FetchError> {
        tracing::debug!("GET {} (raw)", url);

        let response = self
            .raw_client
            .get(url)
            .header(ACCEPT_ENCODING, RAW_ACCEPT_ENCODING)
            .send()
            .await
            .map_err(|e| FetchError::classify(url, e))?;

        let status_code = response.status().as_u16();
        let headers = lowercase_headers(response.headers());
        let bytes = response.bytes().await.map_err(|e| FetchError::Body {
            url: url.to_string(),
            source: e,
        })?;

        tracing::debug!("GET {} (raw) -> {} ({} bytes)", url, status_code, bytes.len());

        Ok(FetchedPage {
            status_code,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

/// Flattens a header map into lower-cased names, joining repeated values
fn lowercase_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut map: BTreeMap<String, String> = BTreeMap::new();

    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        map.entry(name.as_str().to_ascii_lowercase())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }

    map
}
