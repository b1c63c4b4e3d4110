//! Error types for coupon table loading and config parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the coupon table.
///
/// None of these are fatal to the service: the caller keeps running
/// with an empty table and reports the error to the operator.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("coupon source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("malformed coupon source: {0}")]
    MalformedSource(String),

    #[error("no valid codes found")]
    NoCodesFound,
}

/// Errors that can occur while reading the service config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
