//! Integration tests for the query-to-URL compiler.
//!
//! These tests pin the exact URLs produced for listing and search queries,
//! since the webservice matches them byte for byte.

use prestashop_api::query::{compiler, Display, Filter, Limit, Query, SortOrder};
use prestashop_api::{ApiKey, PrestaConfig, ShopUrl};

const SHOP_URL: &str = "https://shop.test/api/";

/// Creates a test configuration with the given key.
fn create_test_config(api_key: &str) -> PrestaConfig {
    PrestaConfig::builder()
        .shop_url(ShopUrl::new(SHOP_URL).unwrap())
        .api_key(ApiKey::new(api_key).unwrap())
        .build()
        .unwrap()
}

// ============================================================================
// Listing Tests
// ============================================================================

#[test]
fn test_reference_listing_url() {
    let config = create_test_config("KEY");
    let query = Query::builder()
        .filter("id", "[1,2]")
        .sort("id_DESC")
        .limit("0,10")
        .build();

    assert_eq!(
        compiler::compile(&query, &config),
        "https://shop.test/api/products?ws_key=KEY&output_format=JSON&display=full&filter[id]=[[1,2]]&sort=[id_DESC]&limit=0,10"
    );
}

#[test]
fn test_missing_resource_targets_products() {
    let config = create_test_config("KEY");

    for query in [
        Query::new(),
        Query::builder().display("id").build(),
        Query::builder().filter("active", "1").limit(3).build(),
    ] {
        let url = compiler::compile(&query, &config);
        assert!(
            url.starts_with("https://shop.test/api/products?"),
            "unexpected url: {url}"
        );
    }
}

#[test]
fn test_explicit_resource_is_used_verbatim() {
    let config = create_test_config("KEY");
    let query = Query::builder().resource("manufacturers").build();

    assert_eq!(
        compiler::compile(&query, &config),
        "https://shop.test/api/manufacturers?ws_key=KEY&output_format=JSON&display=full"
    );
}

#[test]
fn test_display_unset_requests_full() {
    let config = create_test_config("KEY");
    let url = compiler::compile(&Query::new(), &config);

    assert!(url.contains("&display=full"));
    assert!(!url.contains("&display=["));
}

#[test]
fn test_display_set_is_bracketed_verbatim() {
    let config = create_test_config("KEY");
    let query = Query::builder().display("id,name,price").build();

    let url = compiler::compile(&query, &config);
    assert!(url.contains("&display=[id,name,price]"));
    assert!(!url.contains("display=full"));
}

#[test]
fn test_display_assigned_directly() {
    let config = create_test_config("KEY");
    let query = Query {
        display: Display::Fields(vec!["id".to_string(), "reference".to_string()]),
        ..Query::default()
    };

    assert!(compiler::compile(&query, &config).contains("&display=[id,reference]"));
}

#[test]
fn test_single_filter_appears_exactly_once() {
    let config = create_test_config("KEY");
    let query = Query::builder().filter("status", "1").build();

    let url = compiler::compile(&query, &config);
    assert_eq!(url.matches("&filter[status]=[1]").count(), 1);
}

#[test]
fn test_multiple_filters_keep_insertion_order() {
    let config = create_test_config("KEY");
    let query = Query::builder()
        .filter_with(Filter::any_of("id", [3, 1, 2]))
        .filter("active", "1")
        .filter_with(Filter::between("price", 5, 50))
        .build();

    let url = compiler::compile(&query, &config);
    let id = url.find("&filter[id]=[3|1|2]").unwrap();
    let active = url.find("&filter[active]=[1]").unwrap();
    let price = url.find("&filter[price]=[5,50]").unwrap();

    assert!(id < active && active < price);
    assert_eq!(url.matches("&filter[").count(), 3);
}

#[test]
fn test_no_filters_produce_no_filter_fragment() {
    let config = create_test_config("KEY");
    let url = compiler::compile(&Query::new(), &config);
    assert!(!url.contains("filter["));
}

#[test]
fn test_sort_and_limit_follow_filters() {
    let config = create_test_config("KEY");
    let query = Query::builder()
        .limit(Limit::count(25))
        .sort_by("date_add", SortOrder::Desc)
        .filter("active", "1")
        .build();

    assert!(compiler::compile(&query, &config)
        .ends_with("&filter[active]=[1]&sort=[date_add_DESC]&limit=25"));
}

#[test]
fn test_values_are_not_percent_encoded() {
    let config = create_test_config("KEY");
    let query = Query::builder().filter("name", "Mug The%").build();

    assert!(compiler::compile(&query, &config).contains("&filter[name]=[Mug The%]"));
}

// ============================================================================
// Search Tests
// ============================================================================

#[test]
fn test_search_url_shape() {
    let config = create_test_config("KEY");
    let query = Query::builder().search("mug").build();

    assert_eq!(
        compiler::compile(&query, &config),
        "https://shop.test/api/search?ws_key=KEY&output_format=JSON&language=1&display=full&query=mug"
    );
}

#[test]
fn test_search_omits_sort_and_limit() {
    let config = create_test_config("KEY");
    let query = Query::builder()
        .search("mug")
        .sort("id_DESC")
        .limit("0,10")
        .build();

    let url = compiler::compile(&query, &config);
    assert!(url.starts_with("https://shop.test/api/search?"));
    assert!(url.ends_with("&query=mug"));
    assert!(!url.contains("&sort="));
    assert!(!url.contains("&limit="));
}

#[test]
fn test_search_ignores_resource_path() {
    let config = create_test_config("KEY");
    let query = Query::builder().resource("categories").search("shoes").build();

    let url = compiler::compile(&query, &config);
    assert!(url.starts_with("https://shop.test/api/search?"));
    assert!(!url.contains("categories"));
}

#[test]
fn test_search_keeps_display_and_filters() {
    let config = create_test_config("KEY");
    let query = Query::builder()
        .search("mug")
        .display("id,name")
        .filter("active", "1")
        .build();

    assert_eq!(
        compiler::compile(&query, &config),
        "https://shop.test/api/search?ws_key=KEY&output_format=JSON&language=1&display=[id,name]&filter[active]=[1]&query=mug"
    );
}

#[test]
fn test_encoded_search_term() {
    let config = create_test_config("KEY");
    let query = Query::builder().search_encoded("blue mug").build();

    assert!(compiler::compile(&query, &config).ends_with("&query=blue%20mug"));
}

// ============================================================================
// Purity Tests
// ============================================================================

#[test]
fn test_repeated_compilation_is_stable() {
    let config = create_test_config("KEY");
    let query = Query::builder()
        .display("id")
        .filter("active", "1")
        .sort("id_ASC")
        .limit(5)
        .build();
    let snapshot = query.clone();

    let first = query.to_url(&config);
    let second = query.to_url(&config);

    assert_eq!(first, second);
    assert_eq!(query, snapshot);
}

#[test]
fn test_different_keys_produce_different_urls() {
    let query = Query::new();

    let first = compiler::compile(&query, &create_test_config("KEY-ONE"));
    let second = compiler::compile(&query, &create_test_config("KEY-TWO"));

    assert!(first.contains("ws_key=KEY-ONE&"));
    assert!(second.contains("ws_key=KEY-TWO&"));
}
