//! Image URL construction.
//!
//! Image URLs bypass query compilation: they address a single file (or, for
//! non-product resources, the resource's only image) and carry the image key
//! rather than the webservice key when one is configured.
//!
//! # URL Shapes
//!
//! ```text
//! {shop_url}images/products/{product_id}/{image_id}/{size_token}?ws_key={key}
//! {shop_url}images/products/{product_id}?ws_key={key}
//! {shop_url}images/{resource}/{resource_id}?ws_key={key}
//! ```
//!
//! The second form lists the images of a product and is used when no image
//! id is given.

mod size;

pub use size::{ImageSize, ParseImageSizeError};

use crate::config::PrestaConfig;

/// Resource whose image URLs address individual images by id and size.
pub const PRODUCTS_RESOURCE: &str = "products";

/// Builds the URL of a resource image.
///
/// For `products`, `image_id` selects the image and `size` the variant
/// (defaulting to [`ImageSize::Large`]). Every other resource has a single
/// image per id; `image_id` and `size` are ignored.
///
/// # Example
///
/// ```rust
/// use prestashop_api::{ApiKey, ImageSize, PrestaConfig, ShopUrl};
/// use prestashop_api::images::image_url;
///
/// let config = PrestaConfig::builder()
///     .shop_url(ShopUrl::new("https://shop.test/api/").unwrap())
///     .api_key(ApiKey::new("KEY").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     image_url(&config, "products", 7, Some(3), Some(ImageSize::Small)),
///     "https://shop.test/api/images/products/7/3/small_default?ws_key=KEY"
/// );
/// assert_eq!(
///     image_url(&config, "categories", 7, None, None),
///     "https://shop.test/api/images/categories/7?ws_key=KEY"
/// );
/// ```
#[must_use]
pub fn image_url(
    config: &PrestaConfig,
    resource: &str,
    resource_id: u64,
    image_id: Option<u64>,
    size: Option<ImageSize>,
) -> String {
    let shop_url = config.shop_url().as_ref();
    let key = config.image_key().as_ref();

    match image_id {
        Some(image_id) if resource == PRODUCTS_RESOURCE => {
            let token = size.unwrap_or_default().token();
            format!("{shop_url}images/{resource}/{resource_id}/{image_id}/{token}?ws_key={key}")
        }
        _ => format!("{shop_url}images/{resource}/{resource_id}?ws_key={key}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, ShopUrl};

    fn config(image_key: Option<&str>) -> PrestaConfig {
        let mut builder = PrestaConfig::builder()
            .shop_url(ShopUrl::new("https://shop.test/api/").unwrap())
            .api_key(ApiKey::new("KEY").unwrap());
        if let Some(image_key) = image_key {
            builder = builder.image_api_key(ApiKey::new(image_key).unwrap());
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_product_image_uses_id_and_size_token() {
        assert_eq!(
            image_url(&config(None), "products", 7, Some(3), Some(ImageSize::Small)),
            "https://shop.test/api/images/products/7/3/small_default?ws_key=KEY"
        );
    }

    #[test]
    fn test_product_image_defaults_to_large() {
        assert_eq!(
            image_url(&config(None), "products", 7, Some(3), None),
            "https://shop.test/api/images/products/7/3/large_default?ws_key=KEY"
        );
    }

    #[test]
    fn test_product_without_image_id_lists_product_images() {
        assert_eq!(
            image_url(&config(None), "products", 7, None, Some(ImageSize::Home)),
            "https://shop.test/api/images/products/7?ws_key=KEY"
        );
    }

    #[test]
    fn test_other_resources_ignore_image_id_and_size() {
        for resource in ["categories", "manufacturers", "suppliers", "stores"] {
            assert_eq!(
                image_url(&config(None), resource, 4, Some(9), Some(ImageSize::Cart)),
                format!("https://shop.test/api/images/{resource}/4?ws_key=KEY")
            );
        }
    }

    #[test]
    fn test_image_key_takes_precedence() {
        let url = image_url(&config(Some("IMG")), "products", 1, Some(2), None);
        assert!(url.ends_with("?ws_key=IMG"));
    }
}
