//! Type-directed conversion between filter values and query parameter strings
//!
//! | type     | written as              | read back                            |
//! |----------|-------------------------|--------------------------------------|
//! | datetime | `2025-01-15T10:30:00.000Z` | RFC 3339, naive datetime or date  |
//! | bool     | `1` / `0`               | `1` or `true` is true, else false    |
//! | person   | `<type>:<id>`           | split on the first `:`               |
//! | strings  | comma joined            | comma split, empty tokens removed    |
//! | int      | decimal                 | leading base-10 integer              |
//! | float    | decimal                 | leading decimal float                |
//! | string   | as-is                   | as-is                                |

use super::value::{FilterType, FilterValue, PersonType, PersonValue};
use crate::error::{Result, UnisearchError};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref INT_PREFIX: Regex = Regex::new(r"^\s*([+-]?\d+)").unwrap();
    static ref FLOAT_PREFIX: Regex =
        Regex::new(r"^\s*([+-]?)(Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").unwrap();
    static ref REDUCED_DATE: Regex = Regex::new(r"^(\d{4})(?:-(\d{2}))?$").unwrap();
}

/// Serialize a value according to the filter's declared type
pub fn serialize_value(value: &FilterValue, filter_type: FilterType) -> String {
    match filter_type {
        FilterType::Bool => {
            if value.is_truthy() {
                "1".to_string()
            } else {
                "0".to_string()
            }
        }
        _ => value.to_string(),
    }
}

/// Parse a raw query parameter according to a declared type
pub fn parse_value(raw: &str, filter_type: FilterType) -> Result<FilterValue> {
    match filter_type {
        FilterType::DateTime => parse_datetime(raw).map(FilterValue::DateTime),
        FilterType::Bool => Ok(FilterValue::Bool(raw == "1" || raw == "true")),
        FilterType::Int => parse_int(raw).map(FilterValue::Int),
        FilterType::Float => parse_float(raw).map(FilterValue::Float),
        FilterType::Person => parse_person(raw).map(FilterValue::Person),
        FilterType::Strings => Ok(FilterValue::Strings(
            raw.split(',')
                .filter(|token| !token.is_empty())
                .map(String::from)
                .collect(),
        )),
        FilterType::String => Ok(FilterValue::String(raw.to_string())),
    }
}

/// ISO-8601 instant with millisecond precision and a `Z` suffix
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn format_float(x: f64) -> String {
    if x == f64::INFINITY {
        "Infinity".to_string()
    } else if x == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if x.is_nan() {
        "NaN".to_string()
    } else {
        x.to_string()
    }
}

/// Parse an instant. Values without an offset are read as UTC.
///
/// Accepts RFC 3339, minute precision with or without an offset
/// (`2025-01-15T10:30Z`, `2025-01-15T10:30+02:00`), a naive datetime, a
/// calendar date, and the reduced forms `2025-01` and `2025`.
pub fn parse_datetime(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M%:z") {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = raw.strip_suffix('Z').unwrap_or(raw);
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(naive, format) {
            return Ok(Utc.from_utc_datetime(&dt));
        }
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_reduced_date(raw));
    if let Some(midnight) = date.and_then(|date| date.and_hms_opt(0, 0, 0)) {
        return Ok(Utc.from_utc_datetime(&midnight));
    }

    Err(UnisearchError::invalid_value(FilterType::DateTime, raw))
}

/// `YYYY` or `YYYY-MM`, pinned to the first day
fn parse_reduced_date(raw: &str) -> Option<NaiveDate> {
    let caps = REDUCED_DATE.captures(raw)?;
    let year = caps[1].parse().ok()?;
    let month = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 1,
    };
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn parse_int(raw: &str) -> Result<i64> {
    INT_PREFIX
        .captures(raw)
        .and_then(|caps| caps[1].parse::<i64>().ok())
        .ok_or_else(|| UnisearchError::invalid_value(FilterType::Int, raw))
}

fn parse_float(raw: &str) -> Result<f64> {
    let caps = FLOAT_PREFIX
        .captures(raw)
        .ok_or_else(|| UnisearchError::invalid_value(FilterType::Float, raw))?;
    let negative = &caps[1] == "-";

    let magnitude = match &caps[2] {
        "Infinity" => f64::INFINITY,
        digits => digits
            .parse::<f64>()
            .map_err(|_| UnisearchError::invalid_value(FilterType::Float, raw))?,
    };

    Ok(if negative { -magnitude } else { magnitude })
}

fn parse_person(raw: &str) -> Result<PersonValue> {
    let (person_type, id) = raw
        .split_once(':')
        .ok_or_else(|| UnisearchError::invalid_value(FilterType::Person, raw))?;

    if id.is_empty() {
        return Err(UnisearchError::invalid_value(FilterType::Person, raw));
    }

    let person_type: PersonType = person_type.parse()?;
    Ok(PersonValue::new(person_type, id))
}
