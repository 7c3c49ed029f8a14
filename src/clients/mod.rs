//! HTTP client types for PrestaShop webservice communication.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpTransport`]: The GET capability the webservice client depends on
//! - [`ReqwestTransport`]: The default `reqwest`-backed transport
//! - [`HttpResponse`]: A decoded response
//! - [`HttpError`]: Unified error type for transport failures
//! - [`webservice::WebserviceClient`]: Query-level client
//!
//! # Retry Behavior
//!
//! None. Each call performs exactly one request and forwards any failure
//! to the caller.

mod errors;
mod http_client;
mod http_response;
pub mod webservice;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpTransport, ReqwestTransport, SDK_VERSION};
pub use http_response::HttpResponse;

pub use webservice::WebserviceClient;
