//! HTTP dispatch and response decoding

use crate::constants::DEFAULT_TIMEOUT_SECS;
use crate::endpoint::{Format, Request, Service};
use crate::error::Result;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Header carrying the API key on every request
pub const TOKEN_HEADER: &str = "X-eBirdApiToken";

/// Sends requests to the eBird web services.
///
/// One GET per call, no retries. A non-success status is returned as
/// [`EbirdError::Http`](crate::EbirdError::Http) with the status attached.
#[derive(Debug, Clone)]
pub struct Transport {
    http: reqwest::blocking::Client,
    base_url: String,
    legacy_url: String,
}

impl Transport {
    /// Base URL for the eBird 2.0 API
    pub const BASE_URL: &'static str = "https://api.ebird.org/v2";
    /// Base URL for the eBird 1.1 API
    pub const LEGACY_URL: &'static str = "https://ebird.org/ws1.1";

    /// Create a transport with the default 30 second timeout
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a transport with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: Self::BASE_URL.to_string(),
            legacy_url: Self::LEGACY_URL.to_string(),
        }
    }

    /// Point the transport at a different 2.0 API server
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Point the transport at a different 1.1 API server
    pub fn with_legacy_url(mut self, legacy_url: impl Into<String>) -> Self {
        self.legacy_url = legacy_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn legacy_url(&self) -> &str {
        &self.legacy_url
    }

    /// Full URL for a request, including the query string
    pub fn url(&self, request: &Request) -> Result<Url> {
        let base = match request.service {
            Service::V2 => &self.base_url,
            Service::Legacy => &self.legacy_url,
        };
        let mut url = Url::parse(&format!("{}{}", base.trim_end_matches('/'), request.path))?;
        if !request.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(request.query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    /// Send a request and decode the body
    pub fn fetch(&self, token: &str, request: &Request) -> Result<Value> {
        let url = self.url(request)?;
        debug!(path = %request.path, params = request.query.len(), "eBird request");

        let response = self.http.get(url).header(TOKEN_HEADER, token).send()?;

        let status = response.status();
        if !status.is_success() {
            warn!(path = %request.path, status = %status, "eBird request failed");
        }
        let body = response.error_for_status()?.text()?;

        match request.format {
            Format::Json => decode_json(&body),
            Format::Csv => decode_csv(&body),
        }
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

pub fn decode_json(body: &str) -> Result<Value> {
    Ok(serde_json::from_str(body)?)
}

/// Decode a CSV body into an array of objects keyed by the header row
pub fn decode_csv(body: &str) -> Result<Value> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(body.as_bytes());
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Map<String, Value> = headers
            .iter()
            .zip(record.iter())
            .map(|(name, value)| (name.to_string(), Value::String(value.to_string())))
            .collect();
        rows.push(Value::Object(row));
    }
    Ok(Value::Array(rows))
}
