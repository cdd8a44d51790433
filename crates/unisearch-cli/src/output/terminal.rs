//! Terminal output formatter

use unisearch_core::filters::codec;
use unisearch_core::{is_builtin_filter, FilterDefinition, SearchQuery, SortOrder};

pub fn format_definitions(definitions: &[&FilterDefinition]) -> String {
    let mut output = String::new();

    for def in definitions {
        let origin = if is_builtin_filter(&def.name) {
            ""
        } else {
            " (custom)"
        };
        output.push_str(&format!(
            "{:<12} {:<9} {}{}\n",
            def.name,
            def.filter_type.as_str(),
            def.label.as_deref().unwrap_or("-"),
            origin
        ));
    }

    output
}

pub fn format_query(query: &SearchQuery) -> String {
    let mut output = String::new();

    output.push_str(&format!("term:      {}\n", query.term));
    output.push_str(&format!("limit:     {}\n", query.limit));
    if let Some(ref cursor) = query.cursor {
        output.push_str(&format!("cursor:    {}\n", cursor));
    }
    let sort = match query.sort_order.unwrap_or_default() {
        SortOrder::Relevance => "relevance",
        SortOrder::Date => "date",
        SortOrder::Title => "title",
    };
    output.push_str(&format!("sort:      {}\n", sort));
    let providers = query
        .providers
        .as_ref()
        .map(|ids| ids.join(", "))
        .unwrap_or_else(|| "all".to_string());
    output.push_str(&format!("providers: {}\n", providers));

    if query.filters.is_empty() {
        output.push_str("filters:   none\n");
        return output;
    }

    output.push_str("filters:\n");
    for (name, filter) in &query.filters {
        output.push_str(&format!(
            "  {:<12} {:<9} {}\n",
            name,
            filter.filter_type.as_str(),
            codec::serialize_value(&filter.value, filter.filter_type)
        ));
    }

    output
}
