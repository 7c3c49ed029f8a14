//! Query model for PrestaShop webservice requests.
//!
//! A [`Query`] describes one listing or search request: which resource to
//! read, which fields to return, how to filter, sort, and paginate. The
//! [`compiler`] module turns it into the exact URL the webservice expects.
//!
//! # Example
//!
//! ```rust
//! use prestashop_api::query::{Filter, Limit, Query, SortOrder};
//!
//! let query = Query::builder()
//!     .resource("categories")
//!     .display_fields(["id", "name"])
//!     .filter("active", "1")
//!     .filter_with(Filter::any_of("id_parent", [2, 3]))
//!     .sort_by("position", SortOrder::Asc)
//!     .limit(Limit::range(0, 20))
//!     .build();
//!
//! assert_eq!(query.resource_name(), "categories");
//! assert_eq!(query.filters.len(), 2);
//! ```
//!
//! # Escaping
//!
//! Values are interpolated into the URL verbatim. Field names, filter
//! expressions, and search terms that contain reserved URL characters must be
//! percent-encoded by the caller. [`QueryBuilder::search_encoded`] does this
//! for the common case of a free-text search term.

pub mod compiler;

use std::fmt;

use crate::config::PrestaConfig;

/// Resource read when a query does not name one.
pub const DEFAULT_RESOURCE: &str = "products";

/// Field projection for a query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Display {
    /// Return every field of each item (`display=full`).
    #[default]
    Full,
    /// Return exactly the listed fields, in order.
    Fields(Vec<String>),
}

impl Display {
    /// Returns `true` when all fields are requested.
    ///
    /// An empty field list requests all fields.
    #[must_use]
    pub fn is_full(&self) -> bool {
        match self {
            Self::Full => true,
            Self::Fields(fields) => fields.iter().all(String::is_empty),
        }
    }
}

/// Sort direction for a single sort key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl SortOrder {
    /// Returns the suffix the webservice expects after the field name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `filter[field]=[expression]` constraint.
///
/// The expression is passed through verbatim inside the brackets, so any of
/// the webservice's filter syntaxes can be used directly:
///
/// ```rust
/// use prestashop_api::query::Filter;
///
/// let exact = Filter::new("reference", "demo_1");
/// let list = Filter::any_of("id", [1, 5, 9]);
/// let interval = Filter::between("price", 10, 20);
///
/// assert_eq!(exact.expression(), "demo_1");
/// assert_eq!(list.expression(), "1|5|9");
/// assert_eq!(interval.expression(), "10,20");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filter {
    field: String,
    expression: String,
}

impl Filter {
    /// Creates a filter with a verbatim expression.
    #[must_use]
    pub fn new(field: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expression: expression.into(),
        }
    }

    /// Matches any of the given values (`v1|v2|...`).
    #[must_use]
    pub fn any_of<I, V>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: fmt::Display,
    {
        let expression = values
            .into_iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join("|");
        Self::new(field, expression)
    }

    /// Matches values in the inclusive interval `lower,upper`.
    #[must_use]
    pub fn between(
        field: impl Into<String>,
        lower: impl fmt::Display,
        upper: impl fmt::Display,
    ) -> Self {
        Self::new(field, format!("{lower},{upper}"))
    }

    /// Returns the filtered field name.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the filter expression.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }
}

/// Pagination for a listing query.
///
/// Rendered after `limit=` as either `count` or `offset,count`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Limit(String);

impl Limit {
    /// Returns at most `count` items.
    #[must_use]
    pub fn count(count: u32) -> Self {
        Self(count.to_string())
    }

    /// Returns at most `count` items, skipping the first `offset`.
    #[must_use]
    pub fn range(offset: u32, count: u32) -> Self {
        Self(format!("{offset},{count}"))
    }

    /// Returns the rendered limit.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the limit renders to nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<u32> for Limit {
    fn from(count: u32) -> Self {
        Self::count(count)
    }
}

impl From<&str> for Limit {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for Limit {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A declarative webservice request.
///
/// Every field is optional; unset and empty values are treated alike. Use
/// [`Query::builder`] for fluent construction, or fill the public fields
/// directly.
///
/// Compiling a query never modifies it. [`Query::normalized`] returns a copy
/// with the defaults filled in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    /// The remote collection, e.g. `products` or `categories`.
    pub resource: Option<String>,
    /// Field projection.
    pub display: Display,
    /// Filters, compiled in insertion order.
    pub filters: Vec<Filter>,
    /// Sort keys such as `id_DESC`, compiled in order.
    pub sort: Vec<String>,
    /// Pagination.
    pub limit: Option<Limit>,
    /// Free-text search term; switches the request to the search endpoint.
    pub search: Option<String>,
}

impl Query {
    /// Creates an empty query, which lists all products with all fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new builder for constructing a `Query`.
    #[must_use]
    pub fn builder() -> QueryBuilder {
        QueryBuilder::default()
    }

    /// Returns the resource name, defaulting to [`DEFAULT_RESOURCE`].
    #[must_use]
    pub fn resource_name(&self) -> &str {
        self.resource
            .as_deref()
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_RESOURCE)
    }

    /// Returns the search term when one is set and non-empty.
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    /// Returns the limit when one is set and non-empty.
    #[must_use]
    pub fn limit_spec(&self) -> Option<&Limit> {
        self.limit.as_ref().filter(|l| !l.is_empty())
    }

    /// Returns `true` if this query targets the search endpoint.
    #[must_use]
    pub fn is_search(&self) -> bool {
        self.search_term().is_some()
    }

    /// Returns a copy with defaults filled in and empty values cleared.
    ///
    /// Compiling the normalized copy yields the same URL as compiling `self`.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let display = if self.display.is_full() {
            Display::Full
        } else {
            self.display.clone()
        };

        Self {
            resource: Some(self.resource_name().to_string()),
            display,
            filters: self.filters.clone(),
            sort: self.sort.iter().filter(|s| !s.is_empty()).cloned().collect(),
            limit: self.limit_spec().cloned(),
            search: self.search_term().map(String::from),
        }
    }

    /// Compiles this query into a request URL for the given configuration.
    ///
    /// See [`compiler::compile`].
    #[must_use]
    pub fn to_url(&self, config: &PrestaConfig) -> String {
        compiler::compile(self, config)
    }
}

/// Builder for constructing [`Query`] instances.
///
/// # Example
///
/// ```rust
/// use prestashop_api::query::Query;
///
/// let query = Query::builder()
///     .search_encoded("blue shirt")
///     .display("id,name")
///     .build();
///
/// assert_eq!(query.search.as_deref(), Some("blue%20shirt"));
/// ```
#[derive(Debug, Default)]
pub struct QueryBuilder {
    query: Query,
}

impl QueryBuilder {
    /// Sets the resource to read.
    #[must_use]
    pub fn resource(mut self, resource: impl Into<String>) -> Self {
        self.query.resource = Some(resource.into());
        self
    }

    /// Adds a display entry, emitted verbatim (e.g. `id` or `id,name`).
    #[must_use]
    pub fn display(self, fields: impl Into<String>) -> Self {
        self.display_fields([fields])
    }

    /// Adds several display fields, in order.
    #[must_use]
    pub fn display_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields = fields.into_iter().map(Into::into);
        if let Display::Fields(existing) = &mut self.query.display {
            existing.extend(fields);
        } else {
            self.query.display = Display::Fields(fields.collect());
        }
        self
    }

    /// Adds a filter with a verbatim expression.
    #[must_use]
    pub fn filter(self, field: impl Into<String>, expression: impl Into<String>) -> Self {
        self.filter_with(Filter::new(field, expression))
    }

    /// Adds a prepared [`Filter`].
    #[must_use]
    pub fn filter_with(mut self, filter: Filter) -> Self {
        self.query.filters.push(filter);
        self
    }

    /// Adds a raw sort entry (e.g. `id_DESC`).
    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.query.sort.push(sort.into());
        self
    }

    /// Adds a sort key built from a field name and direction.
    #[must_use]
    pub fn sort_by(self, field: impl AsRef<str>, order: SortOrder) -> Self {
        let entry = format!("{}_{order}", field.as_ref());
        self.sort(entry)
    }

    /// Sets the pagination.
    #[must_use]
    pub fn limit(mut self, limit: impl Into<Limit>) -> Self {
        self.query.limit = Some(limit.into());
        self
    }

    /// Sets a search term that is already safe to embed in a URL.
    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.query.search = Some(term.into());
        self
    }

    /// Percent-encodes a raw search term and sets it.
    #[must_use]
    pub fn search_encoded(self, term: &str) -> Self {
        let encoded = urlencoding::encode(term).into_owned();
        self.search(encoded)
    }

    /// Builds the [`Query`].
    #[must_use]
    pub fn build(self) -> Query {
        self.query
    }
}
