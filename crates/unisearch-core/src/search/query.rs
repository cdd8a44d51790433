//! Search query types

use crate::filters::{DateRange, FilterCollection, FilterValue, PersonValue};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Default number of entries requested per provider
pub const DEFAULT_LIMIT: usize = 25;

/// Result ordering requested from providers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Relevance,
    Date,
    Title,
}

/// Pagination cursor handed back by a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cursor {
    Offset(i64),
    Text(String),
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cursor::Offset(n) => write!(f, "{}", n),
            Cursor::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Cursor {
    fn from(value: i64) -> Self {
        Cursor::Offset(value)
    }
}

impl From<String> for Cursor {
    fn from(value: String) -> Self {
        Cursor::Text(value)
    }
}

impl From<&str> for Cursor {
    fn from(value: &str) -> Self {
        Cursor::Text(value.to_string())
    }
}

/// Options for a search query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQueryOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<Cursor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub providers: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_parameters: Option<HashMap<String, String>>,
}

/// A query sent to one or more providers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub term: String,
    pub filters: FilterCollection,
    pub limit: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<Cursor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub providers: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_parameters: Option<HashMap<String, String>>,
}

impl SearchQuery {
    /// Build a query from applied filters; the term comes from the `term` filter
    pub fn new(filters: FilterCollection, options: SearchQueryOptions) -> Self {
        Self {
            term: filters.get_term(),
            filters,
            limit: options.limit.unwrap_or(DEFAULT_LIMIT),
            cursor: options.cursor,
            providers: options.providers,
            sort_order: options.sort_order,
            route: options.route,
            route_parameters: options.route_parameters,
        }
    }

    /// Same query positioned at the next page
    pub fn with_cursor(&self, cursor: Cursor) -> Self {
        Self {
            cursor: Some(cursor),
            ..self.clone()
        }
    }

    /// Flat parameters for a provider request: filters plus `limit` and `cursor`
    pub fn to_query_params(&self) -> BTreeMap<String, String> {
        let mut params = self.filters.to_query_params();
        params.insert("limit".to_string(), self.limit.to_string());
        if let Some(cursor) = &self.cursor {
            params.insert("cursor".to_string(), cursor.to_string());
        }
        params
    }

    /// Whether `provider_id` should receive this query
    pub fn targets(&self, provider_id: &str) -> bool {
        self.providers
            .as_ref()
            .map_or(true, |ids| ids.iter().any(|id| id == provider_id))
    }
}

/// Read access to the filters of a query, as seen by providers
pub trait ParsedFilters {
    fn get_term(&self) -> String;
    fn get_date_range(&self) -> Option<DateRange>;
    fn get_person(&self) -> Option<PersonValue>;
    fn has(&self, name: &str) -> bool;
    fn get(&self, name: &str) -> Option<&FilterValue>;
    fn keys(&self) -> Vec<String>;
}

impl ParsedFilters for FilterCollection {
    fn get_term(&self) -> String {
        FilterCollection::get_term(self)
    }

    fn get_date_range(&self) -> Option<DateRange> {
        FilterCollection::get_date_range(self)
    }

    fn get_person(&self) -> Option<PersonValue> {
        FilterCollection::get_person(self)
    }

    fn has(&self, name: &str) -> bool {
        FilterCollection::has(self, name)
    }

    fn get(&self, name: &str) -> Option<&FilterValue> {
        FilterCollection::get(self, name)
    }

    fn keys(&self) -> Vec<String> {
        FilterCollection::keys(self)
    }
}
