//! JSON output formatter

use unisearch_core::{FilterDefinition, SearchQuery};

pub fn format_definitions(definitions: &[&FilterDefinition]) -> String {
    serde_json::to_string_pretty(definitions).unwrap_or_else(|_| "[]".to_string()) + "\n"
}

pub fn format_query(query: &SearchQuery) -> String {
    serde_json::to_string_pretty(query).unwrap_or_else(|_| "{}".to_string()) + "\n"
}
