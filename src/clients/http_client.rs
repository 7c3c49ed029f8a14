//! HTTP transport for PrestaShop webservice communication.
//!
//! This module provides the [`HttpTransport`] trait, the seam through which
//! the [`WebserviceClient`](crate::clients::webservice::WebserviceClient)
//! performs its GET requests, and [`ReqwestTransport`], the default
//! implementation.
//!
//! # Custom Transports
//!
//! Any type implementing [`HttpTransport`] can be injected, e.g. to route
//! requests through an existing HTTP stack or to serve canned responses in
//! tests:
//!
//! ```rust
//! use std::collections::HashMap;
//! use async_trait::async_trait;
//! use prestashop_api::clients::{HttpError, HttpResponse, HttpTransport};
//!
//! struct Canned;
//!
//! #[async_trait]
//! impl HttpTransport for Canned {
//!     async fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
//!         Ok(HttpResponse::new(200, url, HashMap::new(), serde_json::json!({})))
//!     }
//! }
//! ```

use std::collections::HashMap;

use async_trait::async_trait;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_response::HttpResponse;
use crate::config::PrestaConfig;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A capability to perform a single HTTP GET and decode its JSON body.
///
/// Implementations must not retry. A non-2xx status is reported as
/// [`HttpError::Response`]; a 2xx body that is not JSON as
/// [`HttpError::InvalidJson`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends a GET request to an absolute URL.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure, non-2xx status, or a
    /// malformed body.
    async fn get(&self, url: &str) -> Result<HttpResponse, HttpError>;
}

/// Default [`HttpTransport`] backed by `reqwest`.
///
/// The underlying connection pool is shared by every request made through
/// the same transport.
///
/// # Thread Safety
///
/// `ReqwestTransport` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify ReqwestTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};

impl ReqwestTransport {
    /// Creates a new transport.
    ///
    /// # Arguments
    ///
    /// * `config` - Optional configuration supplying the `user_agent_prefix`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use prestashop_api::clients::ReqwestTransport;
    ///
    /// let transport = ReqwestTransport::new(None).unwrap();
    /// assert_eq!(
    ///     transport.default_headers().get("Accept"),
    ///     Some(&"application/json".to_string())
    /// );
    /// ```
    pub fn new(config: Option<&PrestaConfig>) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .and_then(PrestaConfig::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}PrestaShop API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            default_headers,
        })
    }

    /// Returns the default headers for this transport.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes the webservice `errors` array of an error body.
    fn serialize_error(code: u16, body_text: &str) -> String {
        let body: serde_json::Value =
            serde_json::from_str(body_text).unwrap_or(serde_json::Value::Null);

        let mut error_body = serde_json::Map::new();
        if let Some(errors) = body.get("errors") {
            error_body.insert("errors".to_string(), errors.clone());
        } else {
            error_body.insert(
                "error".to_string(),
                serde_json::json!(format!("Webservice responded with status {code}")),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        let mut req_builder = self.client.get(url);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let final_url = res.url().to_string();
        let headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        if !(200..=299).contains(&code) {
            tracing::warn!(code, "PrestaShop webservice responded with an error status");
            return Err(HttpError::Response(HttpResponseError {
                code,
                message: Self::serialize_error(code, &body_text),
            }));
        }

        let body = if body_text.trim().is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text)?
        };

        Ok(HttpResponse::new(code, final_url, headers, body))
    }
}
