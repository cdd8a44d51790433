//! CLI command handlers

pub mod build;
pub mod filters;
pub mod parse;
