//! # PrestaShop Webservice Client
//!
//! A Rust client for the PrestaShop webservice, turning declarative queries
//! into the exact URLs the webservice expects and fetching their JSON.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`PrestaConfig`] and [`PrestaConfigBuilder`]
//! - A [`Query`] model with filters, sorting, pagination, field projection,
//!   and full-text search
//! - A pure query compiler in [`query::compiler`]
//! - Image URLs for every resource kind and [`ImageSize`] variant
//! - An async [`WebserviceClient`] over a pluggable [`HttpTransport`]
//!
//! ## Quick Start
//!
//! ```rust
//! use prestashop_api::{ApiKey, PrestaConfig, ShopUrl};
//! use prestashop_api::query::{Query, SortOrder};
//!
//! let config = PrestaConfig::builder()
//!     .shop_url(ShopUrl::new("https://shop.example.com/api/").unwrap())
//!     .api_key(ApiKey::new("WS-KEY").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let query = Query::builder()
//!     .display_fields(["id", "name"])
//!     .filter("active", "1")
//!     .sort_by("id", SortOrder::Desc)
//!     .limit(10)
//!     .build();
//!
//! assert_eq!(
//!     query.to_url(&config),
//!     "https://shop.example.com/api/products?ws_key=WS-KEY&output_format=JSON\
//!      &display=[id,name]&filter[active]=[1]&sort=[id_DESC]&limit=10"
//! );
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use prestashop_api::WebserviceClient;
//!
//! let client = WebserviceClient::new(config)?;
//! let products = client.get_resource(&query).await?;
//! ```
//!
//! ## Image URLs
//!
//! ```rust
//! use prestashop_api::{ApiKey, ImageSize, PrestaConfig, ShopUrl};
//!
//! let config = PrestaConfig::builder()
//!     .shop_url(ShopUrl::new("https://shop.example.com/api/").unwrap())
//!     .api_key(ApiKey::new("WS-KEY").unwrap())
//!     .image_api_key(ApiKey::new("IMG-KEY").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let url = prestashop_api::images::image_url(&config, "products", 7, Some(3), Some(ImageSize::Home));
//! assert_eq!(url, "https://shop.example.com/api/images/products/7/3/home_default?ws_key=IMG-KEY");
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Pure compilation**: Building a URL never modifies the query
//! - **No hidden encoding**: Values are interpolated verbatim
//! - **Thread-safe**: All types are `Send + Sync`

pub mod clients;
pub mod config;
pub mod error;
pub mod images;
pub mod query;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, PrestaConfig, PrestaConfigBuilder, ShopUrl};
pub use error::ConfigError;
pub use images::{ImageSize, ParseImageSizeError};
pub use query::{Filter, Limit, Query, QueryBuilder, SortOrder};

// Re-export HTTP client types
pub use clients::{
    HttpError, HttpResponse, HttpResponseError, HttpTransport, ReqwestTransport,
    WebserviceClient,
};
