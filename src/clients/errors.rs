//! HTTP-specific error types for the PrestaShop webservice client.
//!
//! # Error Handling
//!
//! Transport errors are never recovered locally; they are returned to the
//! caller of the single request that produced them:
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the webservice
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use prestashop_api::clients::HttpError;
//!
//! match client.get(&query).await {
//!     Ok(body) => println!("Products: {}", body),
//!     Err(HttpError::Response(e)) => {
//!         println!("Webservice error {}: {}", e.code, e.message);
//!     }
//!     Err(HttpError::InvalidJson(e)) => {
//!         println!("Malformed body: {}", e);
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {}", e);
//!     }
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// The message contains the `errors` array of the webservice body serialized
/// as JSON, or the status line when the body carries no errors.
///
/// # Example
///
/// ```rust
/// use prestashop_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 401,
///     message: r#"{"errors":[{"code":17,"message":"Authentication key is empty"}]}"#.to_string(),
/// };
///
/// assert!(error.to_string().contains("Authentication key is empty"));
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// A successful response whose body is not valid JSON.
    #[error("Invalid JSON in response body: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
