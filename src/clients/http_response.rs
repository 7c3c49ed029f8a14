//! HTTP response type for the PrestaShop webservice client.
//!
//! This module provides the [`HttpResponse`] type returned by every
//! [`HttpTransport`](crate::clients::HttpTransport).

use std::collections::HashMap;

/// An HTTP response from the PrestaShop webservice.
///
/// Contains the status code, headers, decoded JSON body, and the final URL
/// the response was served from (after redirects).
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The URL that produced this response.
    pub url: String,
    /// Response headers, keyed by lowercase name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(
        code: u16,
        url: impl Into<String>,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            url: url.into(),
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `PSWS-Version` header value, if present.
    ///
    /// This is the PrestaShop version answering the request.
    #[must_use]
    pub fn webservice_version(&self) -> Option<&str> {
        self.header("psws-version")
    }

    /// Returns the server-side execution time in seconds, from the
    /// `Execution-Time` header.
    #[must_use]
    pub fn execution_time(&self) -> Option<f64> {
        self.header("execution-time")
            .and_then(|value| value.trim().parse::<f64>().ok())
    }

    /// Takes the sub-object stored under `key`, or `Null` when the body is
    /// not an object or has no such key.
    ///
    /// PrestaShop answers an empty array rather than an object when a listing
    /// matches nothing, so `Null` is the normal result for an empty listing.
    #[must_use]
    pub fn into_slice(self, key: &str) -> serde_json::Value {
        match self.body {
            serde_json::Value::Object(mut map) => {
                map.remove(key).unwrap_or(serde_json::Value::Null)
            }
            _ => serde_json::Value::Null,
        }
    }
}
