//! Output formatters

pub mod json;
pub mod terminal;

use crate::app::OutputFormat;
use unisearch_core::{FilterDefinition, SearchQuery};

/// Format filter definitions
pub fn format_definitions(definitions: &[&FilterDefinition], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_definitions(definitions),
        OutputFormat::Cli => terminal::format_definitions(definitions),
    }
}

/// Format a parsed search query
pub fn format_query(query: &SearchQuery, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_query(query),
        OutputFormat::Cli => terminal::format_query(query),
    }
}
