// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for identifier decoding and configuration

use thiserror::Error;

/// Errors raised when generating or decoding identifier values
#[derive(Debug, Error)]
pub enum RefError {
    /// A required optional capability is not compiled in
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("invalid UUID {value:?}: {source}")]
    InvalidUuid {
        value: String,
        #[source]
        source: uuid::Error,
    },
    #[error("invalid ObjectId {value:?}: {reason}")]
    InvalidObjectId { value: String, reason: String },
    #[error("timestamp encoded in {value:?} is out of range")]
    TimestampOutOfRange { value: String },
}

/// Errors raised while loading identity configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid node id {0:?}: expected 12 hex digits")]
    InvalidNodeId(String),
}
