//! Site content API client.
//!
//! This crate provides a small client for the website's REST backend. It
//! focuses on:
//!
//! - Constructing an HTTP client with sensible defaults
//! - Validating the configured API base URL
//! - Issuing GET requests that decode a JSON body, mapping every failure onto
//!   a [`FetchError`]
//! - Sending multipart forms and deletes for the admin endpoints
//!
//! The primary entry point is [`SiteClient`]. Create an instance via
//! [`SiteClient::new`], then call [`SiteClient::get_json`],
//! [`SiteClient::send_form`] or [`SiteClient::delete`].
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use sitenav_api::SiteClient;
//!
//! async fn run() -> anyhow::Result<()> {
//!     let client = SiteClient::new("https://jharkhand-it-sol-back1.onrender.com", Duration::from_secs(30))?;
//!     let payload = client.get_json("/services/find").await?;
//!     println!("{payload}");
//!     Ok(())
//! }
//! ```

use std::env;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder, header};
use serde_json::Value;
use tracing::debug;
use url::Url;

mod error;

pub use error::FetchError;

/// Hostnames allowed to use plain http during local development.
const LOCALHOST_DOMAINS: &[&str] = &["localhost", "127.0.0.1"];

/// Response bodies longer than this are cut before being attached to errors.
const MAX_ERROR_BODY_CHARS: usize = 512;

#[derive(Debug, Clone)]
/// Thin wrapper around a configured `reqwest::Client` for the site API.
///
/// The client pre-configures default headers and builds requests against a
/// validated base URL.
pub struct SiteClient {
    base_url: String,
    http: Client,
    user_agent: String,
}

impl SiteClient {
    /// Construct a [`SiteClient`] for `base_url`.
    ///
    /// Non-localhost hosts must use HTTPS. A trailing `/` on the base is
    /// dropped so API paths can always start with `/`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        validate_base_url(base_url)?;

        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(default_headers)
            .timeout(timeout)
            .build()
            .context("build http client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            user_agent: format!("sitenav/{}; {}", env!("CARGO_PKG_VERSION"), env::consts::OS),
        })
    }

    /// The validated base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a `reqwest::RequestBuilder` for a method and API-relative path.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, %method, "building request");

        self.http.request(method, url).header(header::USER_AGENT, &self.user_agent)
    }

    /// GET `path` and decode the body as JSON.
    ///
    /// Transport failures, non-2xx statuses and undecodable bodies are all
    /// reported as [`FetchError`].
    pub async fn get_json(&self, path: &str) -> Result<Value, FetchError> {
        let text = send_checked(self.request(Method::GET, path)).await?;
        serde_json::from_str(&text).map_err(|error| FetchError::decode(error.to_string()))
    }

    /// Send a multipart form with `method` (usually POST or PUT) to `path`.
    ///
    /// A 2xx answer whose body is empty or not JSON yields `Value::Null`;
    /// write endpoints only use the body for an optional confirmation message.
    pub async fn send_form(&self, method: Method, path: &str, form: Form) -> Result<Value, FetchError> {
        let text = send_checked(self.request(method, path).multipart(form)).await?;
        Ok(lenient_body(&text))
    }

    /// DELETE `path`. The body is decoded the same way as in [`Self::send_form`].
    pub async fn delete(&self, path: &str) -> Result<Value, FetchError> {
        let text = send_checked(self.request(Method::DELETE, path)).await?;
        Ok(lenient_body(&text))
    }
}

/// Send a request and return its body, mapping non-2xx statuses to errors.
async fn send_checked(builder: RequestBuilder) -> Result<String, FetchError> {
    let response = builder
        .send()
        .await
        .map_err(|error| FetchError::transport(error.to_string()))?;

    let status = response.status();
    let text = response.text().await.map_err(|error| FetchError::transport(error.to_string()))?;
    debug!(status = status.as_u16(), bytes = text.len(), "received response");

    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            body: truncate_body(&text),
        });
    }
    Ok(text)
}

fn lenient_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|error| {
        debug!(%error, "write endpoint answered with a non-JSON body");
        Value::Null
    })
}

/// Validate that a base URL is acceptable for use by the client.
///
/// Rules:
/// - scheme must be `http` or `https` and a host must be present
/// - `localhost` or `127.0.0.1`: either scheme is allowed
/// - otherwise: scheme must be HTTPS
pub fn validate_base_url(base: &str) -> Result<()> {
    let parsed_base_url = Url::parse(base).map_err(|e| anyhow!("Invalid API base URL '{}': {}", base, e))?;

    let scheme = parsed_base_url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(anyhow!("API base URL must use http or https; got '{}://'", scheme));
    }

    let host_name = parsed_base_url
        .host_str()
        .ok_or_else(|| anyhow!("API base URL must include a host"))?;

    if LOCALHOST_DOMAINS
        .iter()
        .any(|&allowed| host_name.eq_ignore_ascii_case(allowed))
    {
        return Ok(());
    }

    if scheme != "https" {
        return Err(anyhow!("API base URL must use https for non-localhost hosts; got '{}://'", scheme));
    }

    Ok(())
}

fn truncate_body(text: &str) -> String {
    match text.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
