//! Filter value types
//!
//! A filter is a named, typed value. `FilterType` is the closed set of types a
//! filter can declare and `FilterValue` holds the matching runtime value.

use crate::error::{Result, UnisearchError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Supported filter value types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    String,
    Int,
    Float,
    Bool,
    DateTime,
    Person,
    Strings,
}

impl FilterType {
    /// Wire name of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterType::String => "string",
            FilterType::Int => "int",
            FilterType::Float => "float",
            FilterType::Bool => "bool",
            FilterType::DateTime => "datetime",
            FilterType::Person => "person",
            FilterType::Strings => "strings",
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterType {
    type Err = UnisearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "string" => Ok(FilterType::String),
            "int" => Ok(FilterType::Int),
            "float" => Ok(FilterType::Float),
            "bool" => Ok(FilterType::Bool),
            "datetime" => Ok(FilterType::DateTime),
            "person" => Ok(FilterType::Person),
            "strings" => Ok(FilterType::Strings),
            other => Err(UnisearchError::UnknownFilterType(other.to_string())),
        }
    }
}

/// Kind of person a person filter points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonType {
    User,
    Group,
    Email,
}

impl PersonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonType::User => "user",
            PersonType::Group => "group",
            PersonType::Email => "email",
        }
    }
}

impl fmt::Display for PersonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonType {
    type Err = UnisearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "user" => Ok(PersonType::User),
            "group" => Ok(PersonType::Group),
            "email" => Ok(PersonType::Email),
            other => Err(UnisearchError::invalid_value(FilterType::Person, other)),
        }
    }
}

/// A person/user filter value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonValue {
    pub id: String,

    #[serde(rename = "type")]
    pub person_type: PersonType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl PersonValue {
    pub fn new(person_type: PersonType, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            person_type,
            display_name: None,
        }
    }

    /// A user identified by user id
    pub fn user(id: impl Into<String>) -> Self {
        Self::new(PersonType::User, id)
    }

    pub fn group(id: impl Into<String>) -> Self {
        Self::new(PersonType::Group, id)
    }

    pub fn email(address: impl Into<String>) -> Self {
        Self::new(PersonType::Email, address)
    }

    /// Attach a human readable name
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

/// A date range with optional bounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn new(since: Option<DateTime<Utc>>, until: Option<DateTime<Utc>>) -> Self {
        Self { since, until }
    }

    pub fn since(since: DateTime<Utc>) -> Self {
        Self::new(Some(since), None)
    }

    pub fn until(until: DateTime<Utc>) -> Self {
        Self::new(None, Some(until))
    }

    pub fn between(since: DateTime<Utc>, until: DateTime<Utc>) -> Self {
        Self::new(Some(since), Some(until))
    }

    /// True when neither bound is set
    pub fn is_unbounded(&self) -> bool {
        self.since.is_none() && self.until.is_none()
    }
}

/// Union of all possible filter values
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(DateTime<Utc>),
    Person(PersonValue),
    Strings(Vec<String>),
}

impl FilterValue {
    /// The filter type this value naturally belongs to
    pub fn natural_type(&self) -> FilterType {
        match self {
            FilterValue::String(_) => FilterType::String,
            FilterValue::Int(_) => FilterType::Int,
            FilterValue::Float(_) => FilterType::Float,
            FilterValue::Bool(_) => FilterType::Bool,
            FilterValue::DateTime(_) => FilterType::DateTime,
            FilterValue::Person(_) => FilterType::Person,
            FilterValue::Strings(_) => FilterType::Strings,
        }
    }

    fn kind(&self) -> &'static str {
        self.natural_type().as_str()
    }

    /// Truthiness used when a value is written out as a bool flag
    pub fn is_truthy(&self) -> bool {
        match self {
            FilterValue::String(s) => !s.is_empty(),
            FilterValue::Int(n) => *n != 0,
            FilterValue::Float(f) => *f != 0.0 && !f.is_nan(),
            FilterValue::Bool(b) => *b,
            FilterValue::DateTime(_) | FilterValue::Person(_) | FilterValue::Strings(_) => true,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FilterValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_person(&self) -> Option<&PersonValue> {
        match self {
            FilterValue::Person(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            FilterValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::String(s) => f.write_str(s),
            FilterValue::Int(n) => write!(f, "{}", n),
            FilterValue::Float(x) => f.write_str(&super::codec::format_float(*x)),
            FilterValue::Bool(b) => write!(f, "{}", b),
            FilterValue::DateTime(dt) => f.write_str(&super::codec::format_datetime(dt)),
            FilterValue::Person(p) => write!(f, "{}:{}", p.person_type, p.id),
            FilterValue::Strings(items) => f.write_str(&items.join(",")),
        }
    }
}

impl Serialize for FilterValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            FilterValue::String(s) => serializer.serialize_str(s),
            FilterValue::Int(n) => serializer.serialize_i64(*n),
            FilterValue::Float(x) => serializer.serialize_f64(*x),
            FilterValue::Bool(b) => serializer.serialize_bool(*b),
            FilterValue::DateTime(dt) => {
                serializer.serialize_str(&super::codec::format_datetime(dt))
            }
            FilterValue::Person(p) => p.serialize(serializer),
            FilterValue::Strings(items) => items.serialize(serializer),
        }
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::String(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::String(value.to_string())
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Int(value)
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Float(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

impl From<DateTime<Utc>> for FilterValue {
    fn from(value: DateTime<Utc>) -> Self {
        FilterValue::DateTime(value)
    }
}

impl From<PersonValue> for FilterValue {
    fn from(value: PersonValue) -> Self {
        FilterValue::Person(value)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(value: Vec<String>) -> Self {
        FilterValue::Strings(value)
    }
}

macro_rules! impl_try_from_value {
    ($target:ty, $expected:literal, $pattern:pat => $out:expr) => {
        impl TryFrom<&FilterValue> for $target {
            type Error = UnisearchError;

            fn try_from(value: &FilterValue) -> Result<Self> {
                match value {
                    $pattern => Ok($out),
                    other => Err(UnisearchError::TypeMismatch {
                        expected: $expected,
                        found: other.kind(),
                    }),
                }
            }
        }
    };
}

impl_try_from_value!(String, "string", FilterValue::String(s) => s.clone());
impl_try_from_value!(i64, "int", FilterValue::Int(n) => *n);
impl_try_from_value!(f64, "float", FilterValue::Float(x) => *x);
impl_try_from_value!(bool, "bool", FilterValue::Bool(b) => *b);
impl_try_from_value!(DateTime<Utc>, "datetime", FilterValue::DateTime(dt) => *dt);
impl_try_from_value!(PersonValue, "person", FilterValue::Person(p) => p.clone());
impl_try_from_value!(Vec<String>, "strings", FilterValue::Strings(items) => items.clone());

/// A single filter instance with name, declared type and value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Filter {
    pub name: String,

    #[serde(rename = "type")]
    pub filter_type: FilterType,

    pub value: FilterValue,
}

impl Filter {
    /// Create a filter with an explicit type
    pub fn new(name: impl Into<String>, filter_type: FilterType, value: impl Into<FilterValue>) -> Self {
        Self {
            name: name.into(),
            filter_type,
            value: value.into(),
        }
    }

    /// Create a filter whose type follows from the value
    pub fn typed(name: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        let value = value.into();
        Self {
            name: name.into(),
            filter_type: value.natural_type(),
            value,
        }
    }
}

/// Options for creating a filter definition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterDefinitionOptions {
    pub label: Option<String>,
    pub exclusive: bool,
}

/// Schema definition for a filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterDefinition {
    pub name: String,

    #[serde(rename = "type")]
    pub filter_type: FilterType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Advisory flag for collaborators, not enforced here
    #[serde(default)]
    pub exclusive: bool,
}

impl FilterDefinition {
    pub fn new(name: impl Into<String>, filter_type: FilterType) -> Self {
        Self {
            name: name.into(),
            filter_type,
            label: None,
            exclusive: false,
        }
    }

    pub fn with_options(mut self, options: FilterDefinitionOptions) -> Self {
        self.label = options.label;
        self.exclusive = options.exclusive;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
