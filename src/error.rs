//! Error types for the PrestaShop webservice client.
//!
//! This module contains the configuration error type. HTTP errors live in
//! [`crate::clients`].
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` so that a
//! malformed shop URL or a missing key is caught when the client is built
//! rather than on the first request.
//!
//! # Example
//!
//! ```rust
//! use prestashop_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`PrestaConfig`](crate::PrestaConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Webservice key cannot be empty.
    #[error("Webservice key cannot be empty. Please provide a valid PrestaShop webservice key.")]
    EmptyApiKey,

    /// Shop URL is invalid.
    #[error("Invalid shop URL '{url}'. Expected an absolute URL ending with '/' (e.g., 'https://shop.example.com/api/').")]
    InvalidShopUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
