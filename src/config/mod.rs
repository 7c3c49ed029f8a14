//! Configuration types for the PrestaShop webservice client.
//!
//! This module provides the connection settings used to compile request URLs
//! and to build image URLs.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`PrestaConfig`]: The immutable configuration holding the shop URL and keys
//! - [`PrestaConfigBuilder`]: A builder for constructing [`PrestaConfig`] instances
//! - [`ApiKey`]: A validated webservice key with masked debug output
//! - [`ShopUrl`]: A validated webservice base URL
//!
//! # Example
//!
//! ```rust
//! use prestashop_api::{PrestaConfig, ApiKey, ShopUrl};
//!
//! let config = PrestaConfig::builder()
//!     .shop_url(ShopUrl::new("https://shop.example.com/api/").unwrap())
//!     .api_key(ApiKey::new("WS-KEY").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! # Loading From a File
//!
//! `PrestaConfig` implements `Deserialize` and applies the same validation as
//! the builder, so host applications can load it with any serde format:
//!
//! ```rust
//! use prestashop_api::PrestaConfig;
//!
//! let config: PrestaConfig = serde_json::from_str(r#"{
//!     "shop_url": "https://shop.example.com/api/",
//!     "api_key": "WS-KEY",
//!     "image_api_key": "IMG-KEY"
//! }"#).unwrap();
//!
//! assert_eq!(config.image_key().as_ref(), "IMG-KEY");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, ShopUrl};

use crate::error::ConfigError;
use serde::Deserialize;

/// Configuration for the PrestaShop webservice client.
///
/// Created once at startup and read-only thereafter.
///
/// # Thread Safety
///
/// `PrestaConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Image Key
///
/// Image URLs are usually embedded in pages served to browsers. A separate,
/// read-only `image_api_key` keeps the main key out of that HTML. When it is
/// not set, [`PrestaConfig::image_key`] falls back to the main key.
#[derive(Clone, Debug, Deserialize)]
#[serde(try_from = "RawPrestaConfig")]
pub struct PrestaConfig {
    shop_url: ShopUrl,
    api_key: ApiKey,
    image_api_key: Option<ApiKey>,
    user_agent_prefix: Option<String>,
}

impl PrestaConfig {
    /// Creates a new builder for constructing a `PrestaConfig`.
    #[must_use]
    pub fn builder() -> PrestaConfigBuilder {
        PrestaConfigBuilder::new()
    }

    /// Returns the webservice base URL.
    #[must_use]
    pub const fn shop_url(&self) -> &ShopUrl {
        &self.shop_url
    }

    /// Returns the webservice key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the dedicated image key, if configured.
    #[must_use]
    pub const fn image_api_key(&self) -> Option<&ApiKey> {
        self.image_api_key.as_ref()
    }

    /// Returns the key used for image URLs: the image key when configured,
    /// otherwise the webservice key.
    #[must_use]
    pub fn image_key(&self) -> &ApiKey {
        self.image_api_key.as_ref().unwrap_or(&self.api_key)
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify PrestaConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PrestaConfig>();
};

/// Serialized form of [`PrestaConfig`], validated through the builder.
#[derive(Deserialize)]
struct RawPrestaConfig {
    shop_url: Option<ShopUrl>,
    api_key: Option<ApiKey>,
    image_api_key: Option<ApiKey>,
    user_agent_prefix: Option<String>,
}

impl TryFrom<RawPrestaConfig> for PrestaConfig {
    type Error = ConfigError;

    fn try_from(raw: RawPrestaConfig) -> Result<Self, Self::Error> {
        PrestaConfigBuilder {
            shop_url: raw.shop_url,
            api_key: raw.api_key,
            image_api_key: raw.image_api_key,
            user_agent_prefix: raw.user_agent_prefix,
        }
        .build()
    }
}

/// Builder for constructing [`PrestaConfig`] instances.
///
/// Required fields are `shop_url` and `api_key`.
///
/// # Example
///
/// ```rust
/// use prestashop_api::{PrestaConfig, ApiKey, ShopUrl};
///
/// let config = PrestaConfig::builder()
///     .shop_url(ShopUrl::new("https://shop.example.com/api/").unwrap())
///     .api_key(ApiKey::new("WS-KEY").unwrap())
///     .image_api_key(ApiKey::new("IMG-KEY").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct PrestaConfigBuilder {
    shop_url: Option<ShopUrl>,
    api_key: Option<ApiKey>,
    image_api_key: Option<ApiKey>,
    user_agent_prefix: Option<String>,
}

impl PrestaConfigBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the webservice base URL (required).
    #[must_use]
    pub fn shop_url(mut self, url: ShopUrl) -> Self {
        self.shop_url = Some(url);
        self
    }

    /// Sets the webservice key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the key used for image URLs.
    #[must_use]
    pub fn image_api_key(mut self, key: ApiKey) -> Self {
        self.image_api_key = Some(key);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`PrestaConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shop_url` or
    /// `api_key` are not set.
    pub fn build(self) -> Result<PrestaConfig, ConfigError> {
        let shop_url = self
            .shop_url
            .ok_or(ConfigError::MissingRequiredField { field: "shop_url" })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(PrestaConfig {
            shop_url,
            api_key,
            image_api_key: self.image_api_key,
            user_agent_prefix: self.user_agent_prefix.filter(|p| !p.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop_url() -> ShopUrl {
        ShopUrl::new("https://shop.test/api/").unwrap()
    }

    #[test]
    fn test_builder_requires_shop_url() {
        let result = PrestaConfigBuilder::new()
            .api_key(ApiKey::new("key").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "shop_url" })
        ));
    }

    #[test]
    fn test_builder_requires_api_key() {
        let result = PrestaConfigBuilder::new().shop_url(shop_url()).build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = PrestaConfig::builder()
            .shop_url(shop_url())
            .api_key(ApiKey::new("key").unwrap())
            .build()
            .unwrap();

        assert!(config.image_api_key().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_image_key_falls_back_to_api_key() {
        let config = PrestaConfig::builder()
            .shop_url(shop_url())
            .api_key(ApiKey::new("KEY").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.image_key().as_ref(), "KEY");
    }

    #[test]
    fn test_image_key_prefers_image_api_key() {
        let config = PrestaConfig::builder()
            .shop_url(shop_url())
            .api_key(ApiKey::new("KEY").unwrap())
            .image_api_key(ApiKey::new("IMG").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.image_key().as_ref(), "IMG");
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PrestaConfig>();
    }

    #[test]
    fn test_config_debug_masks_keys() {
        let config = PrestaConfig::builder()
            .shop_url(shop_url())
            .api_key(ApiKey::new("very-secret").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("PrestaConfig"));
        assert!(!debug_str.contains("very-secret"));
    }

    #[test]
    fn test_deserialize_full_config() {
        let config: PrestaConfig = serde_json::from_str(
            r#"{
                "shop_url": "https://shop.test/api/",
                "api_key": "KEY",
                "image_api_key": "IMG",
                "user_agent_prefix": "MyApp/1.0"
            }"#,
        )
        .unwrap();

        assert_eq!(config.shop_url().as_ref(), "https://shop.test/api/");
        assert_eq!(config.api_key().as_ref(), "KEY");
        assert_eq!(config.image_key().as_ref(), "IMG");
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_deserialize_reports_missing_api_key() {
        let result: Result<PrestaConfig, _> =
            serde_json::from_str(r#"{ "shop_url": "https://shop.test/api/" }"#);

        let message = result.unwrap_err().to_string();
        assert!(message.contains("api_key"));
    }

    #[test]
    fn test_deserialize_rejects_malformed_shop_url() {
        let result: Result<PrestaConfig, _> =
            serde_json::from_str(r#"{ "shop_url": "https://shop.test/api", "api_key": "KEY" }"#);

        assert!(result.is_err());
    }
}
