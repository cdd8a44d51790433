//! Parse command

use crate::app::{OutputFormat, ParseArgs};
use crate::output;
use anyhow::Result;
use unisearch_core::{Config, Cursor, FilterCollection, SearchQuery, SearchQueryOptions};

pub fn run(args: ParseArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let definitions = config.filter_definitions();
    let filters = FilterCollection::from_query_string(&args.query, &definitions);
    tracing::debug!("Parsed {} filters from query string", filters.len());

    let cursor = args.cursor.map(|raw| match raw.parse::<i64>() {
        Ok(offset) => Cursor::Offset(offset),
        Err(_) => Cursor::Text(raw),
    });

    let options = SearchQueryOptions {
        limit: Some(args.limit.unwrap_or(config.default_limit)),
        cursor,
        providers: (!args.providers.is_empty()).then_some(args.providers),
        sort_order: args.sort.map(Into::into),
        ..Default::default()
    };

    let query = SearchQuery::new(filters, options);
    print!("{}", output::format_query(&query, format));
    Ok(())
}
