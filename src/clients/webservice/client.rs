//! Webservice client implementation.
//!
//! This module provides the [`WebserviceClient`] type, which compiles
//! [`Query`] values into request URLs and performs them through an
//! [`HttpTransport`].

use crate::clients::{HttpError, HttpResponse, HttpTransport, ReqwestTransport};
use crate::config::PrestaConfig;
use crate::images::{self, ImageSize};
use crate::query::{compiler, Query};

/// Client for the PrestaShop webservice.
///
/// Each call compiles one URL and performs one GET; nothing is cached or
/// retried, and no state is kept between calls beyond the configuration.
///
/// # Thread Safety
///
/// `WebserviceClient` is `Send + Sync` whenever its transport is, so a single
/// client can serve concurrent requests.
///
/// # Example
///
/// ```rust,ignore
/// use prestashop_api::{PrestaConfig, WebserviceClient};
/// use prestashop_api::query::Query;
///
/// let client = WebserviceClient::new(config)?;
///
/// let query = Query::builder().resource("categories").display("id,name").build();
/// let categories = client.get_resource(&query).await?;
/// ```
#[derive(Debug)]
pub struct WebserviceClient<T = ReqwestTransport> {
    config: PrestaConfig,
    transport: T,
}

// Verify WebserviceClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WebserviceClient>();
};

impl WebserviceClient<ReqwestTransport> {
    /// Creates a client backed by a [`ReqwestTransport`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be created.
    pub fn new(config: PrestaConfig) -> Result<Self, HttpError> {
        let transport = ReqwestTransport::new(Some(&config))?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: HttpTransport> WebserviceClient<T> {
    /// Creates a client that performs requests through `transport`.
    #[must_use]
    pub fn with_transport(config: PrestaConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &PrestaConfig {
        &self.config
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the URL that `query` compiles to.
    #[must_use]
    pub fn request_url(&self, query: &Query) -> String {
        compiler::compile(query, &self.config)
    }

    /// Fetches the full decoded body for `query`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] unchanged from the transport.
    pub async fn get(&self, query: &Query) -> Result<serde_json::Value, HttpError> {
        let response = self.send(query).await?;
        Ok(response.body)
    }

    /// Fetches `query` and returns only the collection stored under the
    /// query's resource name (e.g. `body["products"]`).
    ///
    /// Returns `Null` when the body has no such key, which is how the
    /// webservice reports an empty listing.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] unchanged from the transport.
    pub async fn get_resource(&self, query: &Query) -> Result<serde_json::Value, HttpError> {
        let response = self.send(query).await?;
        Ok(response.into_slice(query.resource_name()))
    }

    /// Runs a full-text search.
    ///
    /// Identical to [`get`](Self::get); the query is expected to have a
    /// search term set, but this is not checked.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] unchanged from the transport.
    pub async fn search(&self, query: &Query) -> Result<serde_json::Value, HttpError> {
        self.get(query).await
    }

    /// Runs a full-text search and returns the collection stored under the
    /// query's resource name.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] unchanged from the transport.
    pub async fn search_resource(&self, query: &Query) -> Result<serde_json::Value, HttpError> {
        self.get_resource(query).await
    }

    /// Builds the URL of a resource image.
    ///
    /// No request is made. See [`images::image_url`] for the URL rules.
    #[must_use]
    pub fn image_url(
        &self,
        resource: &str,
        resource_id: u64,
        image_id: Option<u64>,
        size: Option<ImageSize>,
    ) -> String {
        images::image_url(&self.config, resource, resource_id, image_id, size)
    }

    async fn send(&self, query: &Query) -> Result<HttpResponse, HttpError> {
        let url = self.request_url(query);

        tracing::debug!(
            resource = query.resource_name(),
            search = query.is_search(),
            "Sending PrestaShop webservice request"
        );
        tracing::trace!(url = %redact_key(&url, self.config.api_key().as_ref()));

        self.transport.get(&url).await
    }
}

/// Replaces the webservice key in a URL so it can be logged.
fn redact_key(url: &str, key: &str) -> String {
    url.replacen(&format!("ws_key={key}"), "ws_key=*****", 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, ShopUrl};

    fn config() -> PrestaConfig {
        PrestaConfig::builder()
            .shop_url(ShopUrl::new("https://shop.test/api/").unwrap())
            .api_key(ApiKey::new("KEY").unwrap())
            .image_api_key(ApiKey::new("IMG").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_request_url_delegates_to_compiler() {
        let client = WebserviceClient::new(config()).unwrap();
        let query = Query::builder().resource("stores").build();

        assert_eq!(
            client.request_url(&query),
            "https://shop.test/api/stores?ws_key=KEY&output_format=JSON&display=full"
        );
    }

    #[test]
    fn test_image_url_uses_image_key() {
        let client = WebserviceClient::new(config()).unwrap();

        assert_eq!(
            client.image_url("products", 7, Some(3), Some(ImageSize::Medium)),
            "https://shop.test/api/images/products/7/3/medium_default?ws_key=IMG"
        );
    }

    #[test]
    fn test_redact_key_hides_webservice_key() {
        let redacted = redact_key(
            "https://shop.test/api/products?ws_key=KEY&output_format=JSON",
            "KEY",
        );
        assert_eq!(
            redacted,
            "https://shop.test/api/products?ws_key=*****&output_format=JSON"
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WebserviceClient>();
    }
}
