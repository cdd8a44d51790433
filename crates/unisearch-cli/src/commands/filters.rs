//! Filters command

use crate::app::OutputFormat;
use crate::output;
use anyhow::Result;
use unisearch_core::filters::definitions::builtin_names;
use unisearch_core::Config;

pub fn run(config: &Config, format: OutputFormat) -> Result<()> {
    let definitions = config.filter_definitions();

    let mut custom: Vec<&str> = definitions
        .keys()
        .map(String::as_str)
        .filter(|name| !unisearch_core::is_builtin_filter(name))
        .collect();
    custom.sort_unstable();

    let mut ordered: Vec<_> = builtin_names()
        .filter_map(|name| definitions.get(name))
        .collect();
    ordered.extend(custom.into_iter().filter_map(|name| definitions.get(name)));

    print!("{}", output::format_definitions(&ordered, format));
    Ok(())
}
