//! Property and scenario tests for filter collections and the builder

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike, Utc};
use proptest::prelude::*;
use unisearch_core::{
    Clock, DateRange, Filter, FilterBuilder, FilterCollection, FilterType, FilterValue,
    PersonValue, BUILTIN_FILTERS,
};

fn arb_instant() -> impl Strategy<Value = DateTime<Utc>> {
    // 1970..2100, millisecond precision
    (0i64..4_102_444_800_000).prop_map(|ms| Utc.timestamp_millis_opt(ms).unwrap())
}

fn arb_filter() -> impl Strategy<Value = Filter> {
    prop_oneof![
        "[a-z][a-z0-9-]{0,8}".prop_map(|n| Filter::new(n, FilterType::String, "v")),
        any::<i32>().prop_map(|n| Filter::new("count", FilterType::Int, i64::from(n))),
        any::<bool>().prop_map(|b| Filter::new("flag", FilterType::Bool, b)),
    ]
}

proptest! {
    #[test]
    fn term_is_trimmed(s in "\\s*[a-zA-Z0-9][a-zA-Z0-9 ]{0,20}\\s*") {
        let collection = FilterBuilder::new().term(&s).build();
        prop_assert_eq!(collection.get_term(), s.trim());
    }

    #[test]
    fn blank_term_is_ignored(s in "[ \\t\\n]{0,10}") {
        let collection = FilterBuilder::new().term(&s).build();
        prop_assert!(!collection.has("term"));
    }

    #[test]
    fn clear_empties_builder(filters in prop::collection::vec(arb_filter(), 0..10)) {
        let mut builder = FilterBuilder::new().term("x").last_days(3.0);
        for filter in filters {
            builder = builder.custom(filter.name, filter.filter_type, filter.value);
        }
        prop_assert_eq!(builder.clear().build().len(), 0);
    }

    #[test]
    fn with_then_without_nets_out(
        filters in prop::collection::vec(arb_filter(), 0..10),
        name in "[a-z]{1,6}",
    ) {
        let collection: FilterCollection = filters.into_iter().collect();
        let added = collection.with(name.clone(), Filter::new(name.clone(), FilterType::Bool, true));
        prop_assert_eq!(added.without(&name).len(), collection.without(&name).len());
    }

    #[test]
    fn builtin_values_round_trip(
        term in "[^\\s].{0,20}",
        since in arb_instant(),
        until in arb_instant(),
        title_only in any::<bool>(),
        places in "[a-zA-Z/ ,]{0,20}",
        provider in "[a-z_]{0,10}",
    ) {
        let collection = FilterCollection::from(vec![
            Filter::new("term", FilterType::String, term),
            Filter::new("since", FilterType::DateTime, since),
            Filter::new("until", FilterType::DateTime, until),
            Filter::new("title-only", FilterType::Bool, title_only),
            Filter::new("places", FilterType::String, places),
            Filter::new("provider", FilterType::String, provider),
        ]);

        let parsed = FilterCollection::from_query_params(collection.to_query_params(), &BUILTIN_FILTERS);
        for name in collection.keys() {
            prop_assert_eq!(parsed.get(&name), collection.get(&name));
        }
    }

    #[test]
    fn person_round_trip_drops_display_name(id in "[a-z0-9@._]{1,16}", name in "[A-Za-z ]{1,16}") {
        let person = PersonValue::email(id.clone()).with_display_name(name);
        let collection = FilterBuilder::new().person(person).build();

        let parsed = FilterCollection::from_query_params(collection.to_query_params(), &BUILTIN_FILTERS);
        prop_assert_eq!(parsed.get_person(), Some(PersonValue::email(id)));
    }

    #[test]
    fn builder_clock_survives_round_trip(ms in 0i64..4_102_444_800_000, days in 0u32..400) {
        let clock = Clock::fixed_utc(Utc.timestamp_millis_opt(ms).unwrap());
        let collection = FilterBuilder::new().with_clock(clock).last_days(f64::from(days)).build();

        let parsed = FilterCollection::from_query_params(collection.to_query_params(), &BUILTIN_FILTERS);
        prop_assert_eq!(parsed.get_date_range(), collection.get_date_range());
    }
}

#[test]
fn unknown_filters_are_ignored() {
    let collection = FilterCollection::from_query_params([("unknown", "x")], &BUILTIN_FILTERS);
    assert_eq!(collection.len(), 0);
}

#[test]
fn invalid_date_is_dropped() {
    let collection = FilterCollection::from_query_params([("since", "not-a-date")], &BUILTIN_FILTERS);
    assert!(!collection.has("since"));
}

#[test]
fn short_iso_dates_are_kept() {
    let collection = FilterCollection::from_query_params(
        [("since", "2025-01-15T10:30Z"), ("until", "2025-02")],
        &BUILTIN_FILTERS,
    );

    assert_eq!(
        collection.get_date_range(),
        Some(DateRange::between(
            Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap()
        ))
    );
}

#[test]
fn quarterly_report_scenario() {
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
    let collection = FilterBuilder::new()
        .with_clock(Clock::fixed_utc(now))
        .term("  quarterly report  ")
        .this_year()
        .user("admin")
        .bool("title-only", true)
        .build();

    assert_eq!(collection.len(), 5);
    assert_eq!(collection.get_term(), "quarterly report");
    assert_eq!(
        collection.get_date_range(),
        Some(DateRange::between(
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            now
        ))
    );
    assert_eq!(collection.get_person(), Some(PersonValue::user("admin")));
    assert_eq!(collection.get_as::<bool>("title-only"), Some(true));
}

#[test]
fn system_clock_year_starts_at_local_midnight() {
    let collection = FilterBuilder::new().this_year().build();
    let since = collection
        .get_date_range()
        .and_then(|r| r.since)
        .unwrap()
        .with_timezone(&Local);

    assert_eq!(since.ordinal(), 1);
    assert_eq!((since.hour(), since.minute(), since.second()), (0, 0, 0));
}

#[test]
fn person_query_param_scenario() {
    let collection = FilterCollection::from(vec![Filter::new(
        "person",
        FilterType::Person,
        PersonValue::user("admin"),
    )]);

    let params = collection.to_query_params();
    assert_eq!(params.len(), 1);
    assert_eq!(params["person"], "user:admin");

    let parsed = FilterCollection::from_query_params(params, &BUILTIN_FILTERS);
    let person = parsed.get_person().unwrap();
    assert_eq!(person, PersonValue::user("admin"));
    assert_eq!(person.display_name, None);
}

#[test]
fn int_floors_toward_negative_infinity() {
    let collection = FilterBuilder::new().int("min-size", 1024.7).build();
    assert_eq!(collection.get("min-size"), Some(&FilterValue::Int(1024)));

    let collection = FilterBuilder::new().int("min-size", -1024.7).build();
    assert_eq!(collection.get("min-size"), Some(&FilterValue::Int(-1025)));
}

#[test]
fn one_sided_date_range_keeps_other_bound() {
    let until = Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap();
    let since = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();

    let collection = FilterBuilder::new()
        .date_range(DateRange::until(until))
        .date_range(DateRange::since(since))
        .build();

    assert_eq!(collection.get_date_range(), Some(DateRange::between(since, until)));
}
