//! Unisearch Core Library
//!
//! Typed filter model for unified search.
//!
//! # Features
//! - Immutable, ordered filter collections with typed accessors
//! - Fluent filter builder with relative date-range shortcuts
//! - Lossless query-string serialization driven by filter definitions
//! - Shared query, result and provider contracts

pub mod config;
pub mod error;
pub mod filters;
pub mod providers;
pub mod search;

pub use config::Config;
pub use error::{Error, Result, UnisearchError};
pub use filters::{
    builtin_definitions, get_builtin_filter, is_builtin_filter, Clock, DateRange, Filter,
    FilterBuilder, FilterCollection, FilterDefinition, FilterDefinitionOptions,
    FilterDefinitions, FilterType, FilterValue, PersonType, PersonValue, BUILTIN_FILTERS,
};
pub use providers::{find_provider, ProviderInfo, RouteContext, SearchClient, SearchProvider};
pub use search::{
    AggregatedSearchResult, Cursor, ParsedFilters, ProviderSearchResult, SearchHighlight,
    SearchQuery, SearchQueryOptions, SearchResultEntry, SortOrder, DEFAULT_LIMIT,
};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "unisearch";
