//! Immutable collection of search filters with typed accessors

use super::codec;
use super::definitions::FilterDefinitions;
use super::value::{DateRange, Filter, FilterValue, PersonValue};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Immutable, insertion-ordered mapping from filter name to filter
///
/// Cloning is cheap; `with` and `without` copy the entries and return a new
/// collection, leaving `self` untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCollection {
    entries: Arc<Vec<(String, Filter)>>,
}

impl FilterCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection from `(name, filter)` pairs. Later duplicates replace
    /// earlier ones but keep the first position.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Filter)>,
        S: Into<String>,
    {
        let mut list: Vec<(String, Filter)> = Vec::new();
        for (name, filter) in entries {
            upsert(&mut list, name.into(), filter);
        }
        Self {
            entries: Arc::new(list),
        }
    }

    /// Number of filters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Value of the named filter
    pub fn get(&self, name: &str) -> Option<&FilterValue> {
        self.get_filter(name).map(|filter| &filter.value)
    }

    /// Value of the named filter cast to `T`; absent if missing or of another shape
    pub fn get_as<'a, T>(&'a self, name: &str) -> Option<T>
    where
        T: TryFrom<&'a FilterValue>,
    {
        self.get(name).and_then(|value| T::try_from(value).ok())
    }

    pub fn get_filter(&self, name: &str) -> Option<&Filter> {
        self.position(name).map(|idx| &self.entries[idx].1)
    }

    /// Search term, empty when not set
    pub fn get_term(&self) -> String {
        self.get("term")
            .and_then(FilterValue::as_str)
            .map(String::from)
            .unwrap_or_default()
    }

    /// `since`/`until` bounds, `None` when neither is set
    pub fn get_date_range(&self) -> Option<DateRange> {
        let since = self.get("since").and_then(FilterValue::as_datetime);
        let until = self.get("until").and_then(FilterValue::as_datetime);
        let range = DateRange::new(since, until);
        (!range.is_unbounded()).then_some(range)
    }

    pub fn get_person(&self) -> Option<PersonValue> {
        self.get("person").and_then(FilterValue::as_person).cloned()
    }

    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn values(&self) -> Vec<Filter> {
        self.entries.iter().map(|(_, filter)| filter.clone()).collect()
    }

    pub fn entries(&self) -> Vec<(String, Filter)> {
        self.entries.as_ref().clone()
    }

    /// Iterate `(name, filter)` pairs in insertion order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// New collection with `filter` stored under `name`
    pub fn with(&self, name: impl Into<String>, filter: Filter) -> Self {
        let mut list = self.entries.as_ref().clone();
        upsert(&mut list, name.into(), filter);
        Self {
            entries: Arc::new(list),
        }
    }

    /// New collection without the named filter
    pub fn without(&self, name: &str) -> Self {
        let list = self
            .entries
            .iter()
            .filter(|(key, _)| key != name)
            .cloned()
            .collect();
        Self {
            entries: Arc::new(list),
        }
    }

    /// Serialize every filter to a flat string map
    pub fn to_query_params(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(name, filter)| {
                (
                    name.clone(),
                    codec::serialize_value(&filter.value, filter.filter_type),
                )
            })
            .collect()
    }

    /// Rebuild a collection from a flat string map
    ///
    /// Names without a definition and values that fail to parse are dropped;
    /// the rest of the map is still processed.
    pub fn from_query_params<I, K, V>(params: I, definitions: &FilterDefinitions) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut list: Vec<(String, Filter)> = Vec::new();

        for (name, raw) in params {
            let (name, raw) = (name.as_ref(), raw.as_ref());
            let Some(definition) = definitions.get(name) else {
                tracing::debug!("Ignoring unknown filter '{}'", name);
                continue;
            };

            match codec::parse_value(raw, definition.filter_type) {
                Ok(value) => upsert(
                    &mut list,
                    name.to_string(),
                    Filter::new(name, definition.filter_type, value),
                ),
                Err(e) => tracing::debug!("Dropping filter '{}': {}", name, e),
            }
        }

        Self {
            entries: Arc::new(list),
        }
    }

    /// URL-encoded form of `to_query_params`
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.to_query_params())
            .finish()
    }

    /// Parse a URL-encoded query string (a leading `?` is accepted)
    pub fn from_query_string(query: &str, definitions: &FilterDefinitions) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_query_params(url::form_urlencoded::parse(query.as_bytes()), definitions)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(key, _)| key == name)
    }
}

fn upsert(list: &mut Vec<(String, Filter)>, name: String, filter: Filter) {
    match list.iter_mut().find(|(key, _)| *key == name) {
        Some(entry) => entry.1 = filter,
        None => list.push((name, filter)),
    }
}

/// Iterator over `(name, filter)` pairs of a [`FilterCollection`]
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (String, Filter)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Filter);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, filter)| (name.as_str(), filter))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a FilterCollection {
    type Item = (&'a str, &'a Filter);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Filter> for FilterCollection {
    fn from_iter<I: IntoIterator<Item = Filter>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().map(|filter| (filter.name.clone(), filter)))
    }
}

impl From<Vec<Filter>> for FilterCollection {
    fn from(filters: Vec<Filter>) -> Self {
        filters.into_iter().collect()
    }
}

impl Serialize for FilterCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, filter) in self.iter() {
            map.serialize_entry(name, filter)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::definitions::BUILTIN_FILTERS;
    use crate::filters::value::{FilterDefinition, FilterType};
    use chrono::{DateTime, TimeZone, Utc};

    fn term(value: &str) -> Filter {
        Filter::new("term", FilterType::String, value)
    }

    fn since(dt: DateTime<Utc>) -> Filter {
        Filter::new("since", FilterType::DateTime, dt)
    }

    fn jan_first() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    fn test_definitions() -> FilterDefinitions {
        [
            ("term", FilterType::String),
            ("since", FilterType::DateTime),
            ("title-only", FilterType::Bool),
            ("person", FilterType::Person),
            ("limit", FilterType::Int),
        ]
        .into_iter()
        .map(|(name, ty)| (name.to_string(), FilterDefinition::new(name, ty)))
        .collect()
    }

    #[test]
    fn test_empty_by_default() {
        let collection = FilterCollection::new();
        assert_eq!(collection.len(), 0);
        assert!(collection.is_empty());
        assert!(!collection.has("term"));
        assert_eq!(collection.get("term"), None);
    }

    #[test]
    fn test_from_filters() {
        let collection = FilterCollection::from(vec![term("test")]);
        assert_eq!(collection.len(), 1);
        assert!(collection.has("term"));
        assert_eq!(collection.get("term"), Some(&FilterValue::String("test".into())));
        assert_eq!(collection.get_filter("term"), Some(&term("test")));
    }

    #[test]
    fn test_get_as_mismatch_is_absent() {
        let collection = FilterCollection::from(vec![term("42")]);
        assert_eq!(collection.get_as::<String>("term").as_deref(), Some("42"));
        assert_eq!(collection.get_as::<i64>("term"), None);
    }

    #[test]
    fn test_get_term() {
        let collection = FilterCollection::from(vec![term("search query")]);
        assert_eq!(collection.get_term(), "search query");
        assert_eq!(FilterCollection::new().get_term(), "");
    }

    #[test]
    fn test_get_date_range() {
        let until = Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap();
        let both = FilterCollection::from(vec![
            since(jan_first()),
            Filter::new("until", FilterType::DateTime, until),
        ]);
        assert_eq!(
            both.get_date_range(),
            Some(DateRange::between(jan_first(), until))
        );

        let only_since = FilterCollection::from(vec![since(jan_first())]);
        assert_eq!(
            only_since.get_date_range(),
            Some(DateRange::since(jan_first()))
        );

        assert_eq!(FilterCollection::new().get_date_range(), None);
    }

    #[test]
    fn test_get_person() {
        let person = PersonValue::user("admin");
        let collection =
            FilterCollection::from(vec![Filter::new("person", FilterType::Person, person.clone())]);
        assert_eq!(collection.get_person(), Some(person));
        assert_eq!(FilterCollection::new().get_person(), None);
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let collection = FilterCollection::from(vec![term("test")]);
        let extended = collection.with("since", since(jan_first()));

        assert_eq!(collection.len(), 1);
        assert_eq!(extended.len(), 2);
        assert!(extended.has("since"));
        assert!(!collection.has("since"));
    }

    #[test]
    fn test_with_replaces_in_place() {
        let collection = FilterCollection::from(vec![term("old"), since(jan_first())]);
        let replaced = collection.with("term", term("new"));

        assert_eq!(replaced.keys(), vec!["term", "since"]);
        assert_eq!(replaced.get_term(), "new");
        assert_eq!(collection.get_term(), "old");
    }

    #[test]
    fn test_without() {
        let collection = FilterCollection::from(vec![term("test"), since(Utc::now())]);
        let reduced = collection.without("since");

        assert_eq!(collection.len(), 2);
        assert_eq!(reduced.len(), 1);
        assert!(!reduced.has("since"));
        assert_eq!(collection.without("missing").len(), 2);
    }

    #[test]
    fn test_to_query_params() {
        let collection = FilterCollection::from(vec![
            term("test query"),
            since(Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap()),
            Filter::new("title-only", FilterType::Bool, true),
            Filter::new("person", FilterType::Person, PersonValue::user("admin")),
        ]);

        let params = collection.to_query_params();
        assert_eq!(params.len(), 4);
        assert_eq!(params["term"], "test query");
        assert_eq!(params["since"], "2025-01-15T10:30:00.000Z");
        assert_eq!(params["title-only"], "1");
        assert_eq!(params["person"], "user:admin");
    }

    #[test]
    fn test_from_query_params() {
        let defs = test_definitions();
        let collection = FilterCollection::from_query_params(
            [
                ("term", "test query"),
                ("since", "2025-01-15T10:30:00.000Z"),
                ("title-only", "1"),
                ("person", "user:admin"),
                ("limit", "25"),
            ],
            &defs,
        );

        assert_eq!(collection.len(), 5);
        assert_eq!(collection.get_term(), "test query");
        assert_eq!(
            collection.get_date_range().and_then(|r| r.since),
            Some(Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap())
        );
        assert_eq!(collection.get_as::<bool>("title-only"), Some(true));
        assert_eq!(collection.get_person(), Some(PersonValue::user("admin")));
        assert_eq!(collection.get_as::<i64>("limit"), Some(25));
    }

    #[test]
    fn test_from_query_params_drops_bad_entries() {
        let defs = test_definitions();
        let collection = FilterCollection::from_query_params(
            [
                ("unknown", "value"),
                ("since", "not-a-date"),
                ("limit", "many"),
                ("person", "admin"),
                ("term", "kept"),
            ],
            &defs,
        );

        assert_eq!(collection.keys(), vec!["term"]);
    }

    #[test]
    fn test_query_string_round_trip() {
        let collection = FilterCollection::from(vec![
            term("a&b = c"),
            Filter::new("places", FilterType::String, "/Documents/Q1"),
        ]);

        let query = collection.to_query_string();
        assert_eq!(query, "places=%2FDocuments%2FQ1&term=a%26b+%3D+c");

        let parsed = FilterCollection::from_query_string(&format!("?{}", query), &BUILTIN_FILTERS);
        assert_eq!(parsed.get_term(), "a&b = c");
        assert_eq!(parsed.get_as::<String>("places").as_deref(), Some("/Documents/Q1"));
    }

    #[test]
    fn test_iteration_is_ordered_and_restartable() {
        let collection = FilterCollection::from(vec![term("test"), since(Utc::now())]);

        let names: Vec<&str> = collection.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["term", "since"]);
        assert_eq!((&collection).into_iter().count(), 2);
        assert_eq!(collection.keys(), vec!["term", "since"]);
        assert_eq!(collection.values().len(), 2);
        assert_eq!(collection.entries()[1].0, "since");
    }

    #[test]
    fn test_serialize_as_ordered_object() {
        let collection = FilterCollection::from(vec![
            term("test"),
            Filter::new("title-only", FilterType::Bool, false),
        ]);
        let json = serde_json::to_string(&collection).unwrap();
        assert_eq!(
            json,
            r#"{"term":{"name":"term","type":"string","value":"test"},"title-only":{"name":"title-only","type":"bool","value":false}}"#
        );
    }
}
