//! Built-in filter definitions understood by every unified search provider

use super::value::{FilterDefinition, FilterDefinitionOptions, FilterType};
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Filter name -> definition
pub type FilterDefinitions = HashMap<String, FilterDefinition>;

const BUILTINS: &[(&str, FilterType, &str)] = &[
    ("term", FilterType::String, "Search term"),
    ("since", FilterType::DateTime, "From date"),
    ("until", FilterType::DateTime, "To date"),
    ("person", FilterType::Person, "Person"),
    ("title-only", FilterType::Bool, "Title only"),
    ("places", FilterType::String, "Location"),
    ("provider", FilterType::String, "Provider"),
];

lazy_static! {
    /// Read-only built-in definitions, the default input to
    /// [`FilterCollection::from_query_params`](super::FilterCollection::from_query_params)
    pub static ref BUILTIN_FILTERS: FilterDefinitions = BUILTINS
        .iter()
        .map(|(name, filter_type, label)| {
            let definition = FilterDefinition::new(*name, *filter_type).with_options(
                FilterDefinitionOptions {
                    label: Some(label.to_string()),
                    exclusive: false,
                },
            );
            (name.to_string(), definition)
        })
        .collect();
}

/// Get a built-in filter definition by name
pub fn get_builtin_filter(name: &str) -> Option<&'static FilterDefinition> {
    BUILTIN_FILTERS.get(name)
}

/// Check if a filter name is a built-in filter
pub fn is_builtin_filter(name: &str) -> bool {
    BUILTIN_FILTERS.contains_key(name)
}

/// Owned copy of the built-ins, to be extended with custom definitions
pub fn builtin_definitions() -> FilterDefinitions {
    BUILTIN_FILTERS.clone()
}

/// Built-in names in their canonical order
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|(name, _, _)| *name)
}
