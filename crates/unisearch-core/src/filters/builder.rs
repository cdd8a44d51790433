//! Fluent builder for constructing filter collections

use super::clock::{self, Clock};
use super::collection::FilterCollection;
use super::value::{DateRange, Filter, FilterType, FilterValue, PersonValue};
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Builder for [`FilterCollection`]
///
/// ```
/// use unisearch_core::FilterBuilder;
///
/// let filters = FilterBuilder::new()
///     .term("  quarterly report  ")
///     .last_days(30.0)
///     .user("admin")
///     .bool("title-only", true)
///     .build();
///
/// assert_eq!(filters.get_term(), "quarterly report");
/// assert_eq!(filters.len(), 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterBuilder {
    filters: Vec<Filter>,
    clock: Clock,
}

impl FilterBuilder {
    /// Create an empty builder on the system clock
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `clock` for the relative date shortcuts
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Set the search term. Whitespace-only input leaves the builder unchanged.
    pub fn term(self, value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return self;
        }
        self.set(Filter::new("term", FilterType::String, trimmed))
    }

    /// Set `since` and/or `until`; a missing bound keeps any earlier value
    pub fn date_range(mut self, range: DateRange) -> Self {
        if let Some(since) = range.since {
            self = self.set(Filter::new("since", FilterType::DateTime, since));
        }
        if let Some(until) = range.until {
            self = self.set(Filter::new("until", FilterType::DateTime, until));
        }
        self
    }

    /// Range covering the last `days` 24-hour days up to now. Fractional
    /// days are allowed; the span is counted in whole milliseconds.
    pub fn last_days(self, days: f64) -> Self {
        let now = self.clock.now();
        // `as` saturates, so an out-of-range span falls back to the earliest instant
        let span = (days * MILLIS_PER_DAY as f64).round() as i64;
        let since = TimeDelta::try_milliseconds(span)
            .and_then(|delta| now.checked_sub_signed(delta))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        self.date_range(DateRange::between(since, now))
    }

    /// From local midnight today up to now
    pub fn today(self) -> Self {
        self.since_start_of(|today| today)
    }

    /// From local midnight of this week's Monday up to now
    pub fn this_week(self) -> Self {
        self.since_start_of(clock::week_start)
    }

    /// From local midnight on the first of this month up to now
    pub fn this_month(self) -> Self {
        self.since_start_of(clock::month_start)
    }

    /// From local midnight on January 1st up to now
    pub fn this_year(self) -> Self {
        self.since_start_of(clock::year_start)
    }

    /// Filter by person (user, group, or email)
    pub fn person(self, value: PersonValue) -> Self {
        self.set(Filter::new("person", FilterType::Person, value))
    }

    /// Filter by user id
    pub fn user(self, user_id: impl Into<String>) -> Self {
        self.person(PersonValue::user(user_id))
    }

    pub fn string(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let value: String = value.into();
        self.set(Filter::new(name, FilterType::String, value))
    }

    /// Set an integer filter; fractional input is floored
    pub fn int(self, name: impl Into<String>, value: f64) -> Self {
        // `as` saturates on overflow and maps NaN to 0
        let floored = value.floor() as i64;
        self.set(Filter::new(name, FilterType::Int, floored))
    }

    pub fn float(self, name: impl Into<String>, value: f64) -> Self {
        self.set(Filter::new(name, FilterType::Float, value))
    }

    pub fn bool(self, name: impl Into<String>, value: bool) -> Self {
        self.set(Filter::new(name, FilterType::Bool, value))
    }

    pub fn strings<I, S>(self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        self.set(Filter::new(name, FilterType::Strings, values))
    }

    pub fn datetime(self, name: impl Into<String>, value: DateTime<Utc>) -> Self {
        self.set(Filter::new(name, FilterType::DateTime, value))
    }

    /// Set a filter with an explicit type. The caller is responsible for the
    /// value matching the type.
    pub fn custom(
        self,
        name: impl Into<String>,
        filter_type: FilterType,
        value: impl Into<FilterValue>,
    ) -> Self {
        self.set(Filter::new(name, filter_type, value))
    }

    /// Remove a filter; no-op when absent
    pub fn remove(mut self, name: &str) -> Self {
        self.filters.retain(|filter| filter.name != name);
        self
    }

    /// Remove all filters
    pub fn clear(mut self) -> Self {
        self.filters.clear();
        self
    }

    /// Snapshot the current filters. The builder can keep going afterwards.
    pub fn build(&self) -> FilterCollection {
        self.filters.iter().cloned().collect()
    }

    fn since_start_of(self, period_start: impl FnOnce(NaiveDate) -> NaiveDate) -> Self {
        let (now, today) = self.clock.reading();
        let since = self.clock.start_of_day(period_start(today));
        self.date_range(DateRange::between(since, now))
    }

    fn set(mut self, filter: Filter) -> Self {
        match self.filters.iter_mut().find(|f| f.name == filter.name) {
            Some(existing) => *existing = filter,
            None => self.filters.push(filter),
        }
        self
    }
}
