//! Typed search filters
//!
//! Provides:
//! - `FilterCollection`: immutable, ordered set of applied filters
//! - `FilterBuilder`: fluent accumulator producing a collection
//! - Built-in filter definitions used to recover types from query strings

mod builder;
pub mod clock;
pub mod codec;
mod collection;
pub mod definitions;
mod value;

pub use builder::FilterBuilder;
pub use clock::Clock;
pub use collection::{FilterCollection, Iter};
pub use definitions::{
    builtin_definitions, get_builtin_filter, is_builtin_filter, FilterDefinitions,
    BUILTIN_FILTERS,
};
pub use value::{
    DateRange, Filter, FilterDefinition, FilterDefinitionOptions, FilterType, FilterValue,
    PersonType, PersonValue,
};
