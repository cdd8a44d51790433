//! Build command

use crate::app::BuildArgs;
use anyhow::{anyhow, bail, Context, Result};
use unisearch_core::filters::codec;
use unisearch_core::{Config, DateRange, FilterBuilder, PersonType, PersonValue};

pub fn run(args: BuildArgs, config: &Config) -> Result<()> {
    let mut builder = FilterBuilder::new();

    if let Some(ref term) = args.term {
        builder = builder.term(term);
    }

    if args.since.is_some() || args.until.is_some() {
        let since = args.since.as_deref().map(parse_instant).transpose()?;
        let until = args.until.as_deref().map(parse_instant).transpose()?;
        builder = builder.date_range(DateRange::new(since, until));
    }

    if let Some(days) = args.last_days {
        builder = builder.last_days(days);
    } else if args.today {
        builder = builder.today();
    } else if args.this_week {
        builder = builder.this_week();
    } else if args.this_month {
        builder = builder.this_month();
    } else if args.this_year {
        builder = builder.this_year();
    }

    if let Some(user) = args.user {
        builder = builder.user(user);
    }
    if let Some(ref person) = args.person {
        builder = builder.person(parse_person(person)?);
    }
    if args.title_only {
        builder = builder.bool("title-only", true);
    }
    if let Some(places) = args.places {
        builder = builder.string("places", places);
    }
    if let Some(provider) = args.provider {
        builder = builder.string("provider", provider);
    }

    let definitions = config.filter_definitions();
    for pair in &args.set {
        let (name, raw) = pair
            .split_once('=')
            .ok_or_else(|| anyhow!("Expected NAME=VALUE, got '{}'", pair))?;
        let def = definitions
            .get(name)
            .ok_or_else(|| anyhow!("Unknown filter '{}'", name))?;
        let value = codec::parse_value(raw, def.filter_type)
            .with_context(|| format!("Invalid value for filter '{}'", name))?;
        builder = builder.custom(name, def.filter_type, value);
    }

    let collection = builder.build();
    tracing::debug!("Built {} filters", collection.len());

    println!("{}", collection.to_query_string());
    Ok(())
}

fn parse_instant(raw: &str) -> Result<chrono::DateTime<chrono::Utc>> {
    codec::parse_datetime(raw).with_context(|| format!("Invalid date '{}'", raw))
}

fn parse_person(raw: &str) -> Result<PersonValue> {
    let Some((kind, id)) = raw.split_once(':') else {
        bail!("Expected TYPE:ID, got '{}'", raw);
    };
    let person_type: PersonType = kind
        .parse()
        .map_err(|_| anyhow!("Unknown person type '{}'", kind))?;
    if id.is_empty() {
        bail!("Person id is empty");
    }
    Ok(PersonValue::new(person_type, id))
}
