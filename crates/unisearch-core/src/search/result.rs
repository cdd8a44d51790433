//! Search result types

use super::Cursor;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A highlighted fragment showing where a match occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHighlight {
    pub field: String,
    pub fragments: Vec<String>,
}

/// A single search result entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultEntry {
    pub id: String,
    pub provider_id: String,
    pub score: f64,
    pub title: String,
    pub subline: String,
    pub resource_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounded: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<SearchHighlight>>,

    /// Provider-specific attributes
    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

/// Result set from a single provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSearchResult {
    pub name: String,
    pub is_paginated: bool,
    pub entries: Vec<SearchResultEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<Cursor>,
}

impl ProviderSearchResult {
    /// Whether the provider can return another page
    pub fn has_more(&self) -> bool {
        self.is_paginated && self.cursor.is_some()
    }
}

/// Aggregated results from multiple providers
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedSearchResult {
    pub entries: Vec<SearchResultEntry>,
    pub by_provider: HashMap<String, ProviderSearchResult>,
    pub total_count: usize,
    pub has_more: bool,
}

impl AggregatedSearchResult {
    /// Merge per-provider results; entries are ordered by descending score
    pub fn from_provider_results(by_provider: HashMap<String, ProviderSearchResult>) -> Self {
        let mut entries: Vec<SearchResultEntry> = by_provider
            .values()
            .flat_map(|result| result.entries.iter().cloned())
            .collect();
        entries.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.provider_id.cmp(&b.provider_id))
                .then_with(|| a.id.cmp(&b.id))
        });

        let has_more = by_provider.values().any(ProviderSearchResult::has_more);

        Self {
            total_count: entries.len(),
            entries,
            by_provider,
            has_more,
        }
    }
}
