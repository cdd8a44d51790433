//! Search provider contracts
//!
//! A provider is an external search backend (files, mail, contacts, ...)
//! contributing entries to a unified search. This module only describes the
//! shapes exchanged with providers; transport lives with the implementors of
//! `SearchClient`.

use crate::error::{Result, UnisearchError};
use crate::filters::{builtin_definitions, FilterDefinition, FilterDefinitions};
use crate::search::{ProviderSearchResult, SearchQuery};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The page a search was started from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteContext {
    pub route: String,

    #[serde(default)]
    pub parameters: HashMap<String, String>,
}

impl RouteContext {
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            parameters: HashMap::new(),
        }
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }
}

/// A search backend
pub trait SearchProvider: Send + Sync {
    fn id(&self) -> &str;

    fn name(&self) -> &str;

    fn icon(&self) -> &str;

    fn app_id(&self) -> &str;

    /// Position among providers for the given route, `None` to hide the provider
    fn order(&self, context: &RouteContext) -> Option<i32>;

    /// Names of the filters this provider understands
    fn supported_filters(&self) -> Vec<String>;

    fn custom_filters(&self) -> Vec<FilterDefinition> {
        Vec::new()
    }

    fn alternate_ids(&self) -> Vec<String> {
        Vec::new()
    }

    fn is_external(&self) -> bool {
        false
    }

    fn supports_in_app_search(&self) -> bool {
        false
    }

    /// Built-in definitions extended with this provider's custom filters
    fn filter_definitions(&self) -> FilterDefinitions {
        let mut definitions = builtin_definitions();
        for definition in self.custom_filters() {
            definitions.insert(definition.name.clone(), definition);
        }
        definitions
    }
}

/// Provider description as returned by a search server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderInfo {
    pub id: String,
    pub app_id: String,
    pub name: String,
    pub icon: String,
    pub order: i32,

    #[serde(default)]
    pub triggers: Vec<String>,

    /// Supported filter name -> filter type name
    #[serde(default)]
    pub filters: HashMap<String, String>,

    #[serde(default)]
    pub in_app_search: bool,

    #[serde(default)]
    pub is_external: bool,
}

impl ProviderInfo {
    pub fn supports_filter(&self, name: &str) -> bool {
        self.filters.contains_key(name)
    }
}

/// Client for a unified search server
#[async_trait::async_trait]
pub trait SearchClient: Send + Sync {
    /// Providers available on `route`, in display order
    async fn get_providers(&self, route: Option<&str>) -> Result<Vec<ProviderInfo>>;

    /// Run `query` against a single provider
    async fn search(&self, provider_id: &str, query: &SearchQuery) -> Result<ProviderSearchResult>;

    /// Run `query` against every targeted provider concurrently
    ///
    /// Targets are `query.providers` when set, otherwise every provider
    /// reported for the query's route. Providers that fail are logged and
    /// left out of the result.
    async fn search_all(&self, query: &SearchQuery) -> Result<HashMap<String, ProviderSearchResult>> {
        let provider_ids: Vec<String> = match &query.providers {
            Some(ids) => ids.clone(),
            None => self
                .get_providers(query.route.as_deref())
                .await?
                .into_iter()
                .map(|info| info.id)
                .collect(),
        };

        let searches = provider_ids.iter().map(|id| async move {
            (id.clone(), self.search(id, query).await)
        });

        let mut results = HashMap::new();
        for (id, outcome) in join_all(searches).await {
            match outcome {
                Ok(result) => {
                    results.insert(id, result);
                }
                Err(e) => tracing::warn!("Search provider '{}' failed: {}", id, e),
            }
        }

        Ok(results)
    }
}

/// Look up a provider by id or one of its alternate ids
pub fn find_provider<'a>(
    providers: &'a [Box<dyn SearchProvider>],
    id: &str,
) -> Result<&'a dyn SearchProvider> {
    providers
        .iter()
        .find(|p| p.id() == id || p.alternate_ids().iter().any(|alt| alt == id))
        .map(|p| p.as_ref())
        .ok_or_else(|| UnisearchError::ProviderNotFound(id.to_string()))
}
