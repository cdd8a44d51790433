//! Error types for unisearch

use thiserror::Error;

/// Result type alias using UnisearchError
pub type Result<T> = std::result::Result<T, UnisearchError>;

/// Error type alias for convenience
pub type Error = UnisearchError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOT_FOUND: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
}

/// Main error type for unisearch
#[derive(Debug, Error)]
pub enum UnisearchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown filter type: {0}")]
    UnknownFilterType(String),

    #[error("Invalid {filter_type} filter value: {value:?}")]
    InvalidFilterValue { filter_type: String, value: String },

    #[error("Filter value type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Provider not found: {0}")]
    ProviderNotFound(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl UnisearchError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ProviderNotFound(_) => exit_codes::NOT_FOUND,
            Self::Config(_)
            | Self::UnknownFilterType(_)
            | Self::InvalidFilterValue { .. } => exit_codes::INVALID_INPUT,
            _ => exit_codes::GENERAL_ERROR,
        }
    }

    pub(crate) fn invalid_value(filter_type: impl ToString, value: &str) -> Self {
        Self::InvalidFilterValue {
            filter_type: filter_type.to_string(),
            value: value.to_string(),
        }
    }
}
