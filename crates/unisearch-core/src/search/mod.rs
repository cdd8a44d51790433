//! Search query and result types shared with providers and clients

mod query;
mod result;

pub use query::{
    Cursor, ParsedFilters, SearchQuery, SearchQueryOptions, SortOrder, DEFAULT_LIMIT,
};
pub use result::{AggregatedSearchResult, ProviderSearchResult, SearchHighlight, SearchResultEntry};
