//! High-level client for the PrestaShop webservice.
//!
//! This module provides a client built on top of an
//! [`HttpTransport`](crate::clients::HttpTransport) that compiles
//! [`Query`](crate::query::Query) values into webservice URLs.
//!
//! # Overview
//!
//! - [`WebserviceClient::get`] / [`WebserviceClient::search`]: full decoded body
//! - [`WebserviceClient::get_resource`] / [`WebserviceClient::search_resource`]:
//!   the collection stored under the query's resource name
//! - [`WebserviceClient::image_url`]: image URL, no request made
//!
//! # Example
//!
//! ```rust,ignore
//! use prestashop_api::{ApiKey, PrestaConfig, ShopUrl, WebserviceClient};
//! use prestashop_api::query::Query;
//!
//! let config = PrestaConfig::builder()
//!     .shop_url(ShopUrl::new("https://shop.example.com/api/").unwrap())
//!     .api_key(ApiKey::new("WS-KEY").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = WebserviceClient::new(config)?;
//!
//! let query = Query::builder().search_encoded("mug").build();
//! let products = client.search_resource(&query).await?;
//! ```
//!
//! # Cancellation
//!
//! Every method returns a future; dropping it aborts the in-flight request.

mod client;

pub use client::WebserviceClient;
