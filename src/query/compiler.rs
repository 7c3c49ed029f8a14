//! Query-to-URL compiler.
//!
//! Turns a [`Query`] into the absolute URL the PrestaShop webservice expects.
//! Compilation is pure: it reads the query and the configuration and returns
//! a new string.
//!
//! # URL Shapes
//!
//! Listing:
//!
//! ```text
//! {shop_url}{resource}?ws_key={key}&output_format=JSON&display=...&filter[f]=[e]...&sort=[...]&limit=N
//! ```
//!
//! Search:
//!
//! ```text
//! {shop_url}search?ws_key={key}&output_format=JSON&language=1&display=...&filter[f]=[e]...&query={term}
//! ```
//!
//! The search endpoint ignores sort and limit, so they are not emitted there.

use crate::config::PrestaConfig;
use crate::query::{Display, Filter, Query};

/// Path segment of the full-text search endpoint.
pub const SEARCH_PATH: &str = "search";

/// Language id sent with search requests.
pub const SEARCH_LANGUAGE: u32 = 1;

/// Compiles a query into an absolute request URL.
///
/// No value is percent-encoded.
///
/// # Example
///
/// ```rust
/// use prestashop_api::{ApiKey, PrestaConfig, ShopUrl};
/// use prestashop_api::query::{compiler, Query};
///
/// let config = PrestaConfig::builder()
///     .shop_url(ShopUrl::new("https://shop.test/api/").unwrap())
///     .api_key(ApiKey::new("KEY").unwrap())
///     .build()
///     .unwrap();
///
/// let query = Query::builder()
///     .filter("id", "[1,2]")
///     .sort("id_DESC")
///     .limit("0,10")
///     .build();
///
/// assert_eq!(
///     compiler::compile(&query, &config),
///     "https://shop.test/api/products?ws_key=KEY&output_format=JSON\
///      &display=full&filter[id]=[[1,2]]&sort=[id_DESC]&limit=0,10"
/// );
/// ```
#[must_use]
pub fn compile(query: &Query, config: &PrestaConfig) -> String {
    let shop_url = config.shop_url().as_ref();
    let key = config.api_key().as_ref();

    let display = display_fragment(&query.display);
    let filters = filter_fragment(&query.filters);

    match query.search_term() {
        None => {
            let resource = query.resource_name();
            let sort = sort_fragment(&query.sort);
            let limit = limit_fragment(query);
            format!(
                "{shop_url}{resource}?ws_key={key}&output_format=JSON{display}{filters}{sort}{limit}"
            )
        }
        Some(term) => format!(
            "{shop_url}{SEARCH_PATH}?ws_key={key}&output_format=JSON&language={SEARCH_LANGUAGE}{display}{filters}&query={term}"
        ),
    }
}

fn display_fragment(display: &Display) -> String {
    match display {
        Display::Fields(fields) if !display.is_full() => {
            format!("&display=[{}]", join_non_empty(fields))
        }
        _ => "&display=full".to_string(),
    }
}

fn filter_fragment(filters: &[Filter]) -> String {
    filters
        .iter()
        .filter(|f| !f.field().is_empty())
        .map(|f| format!("&filter[{}]=[{}]", f.field(), f.expression()))
        .collect()
}

fn sort_fragment(sort: &[String]) -> String {
    let joined = join_non_empty(sort);
    if joined.is_empty() {
        String::new()
    } else {
        format!("&sort=[{joined}]")
    }
}

fn limit_fragment(query: &Query) -> String {
    query
        .limit_spec()
        .map_or_else(String::new, |limit| format!("&limit={limit}"))
}

fn join_non_empty(entries: &[String]) -> String {
    entries
        .iter()
        .filter(|e| !e.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(",")
}
