// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stream logger setup
//!
//! Builds a `tracing` subscriber that writes to stderr, filtered to one
//! target at one level.

use thiserror::Error;
use tracing::{Level, Subscriber};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Errors from logger setup
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log level: {0:?}")]
    InvalidLevel(String),
    #[error("failed to install subscriber: {0}")]
    Init(String),
}

/// Output layout of each log line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
}

/// Stderr logger scoped to a target
#[derive(Debug, Clone)]
pub struct StreamLogger {
    target: String,
    level: Level,
    format: LogFormat,
}

impl StreamLogger {
    /// `target` selects the module path to log; empty means everything.
    /// `level` is one of `trace`, `debug`, `info`, `warn`, `error`.
    pub fn new(target: impl Into<String>, level: &str) -> Result<Self, LoggingError> {
        let level = level
            .trim()
            .parse::<Level>()
            .map_err(|_| LoggingError::InvalidLevel(level.to_string()))?;
        Ok(Self {
            target: target.into(),
            level,
            format: LogFormat::default(),
        })
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn filter(&self) -> EnvFilter {
        let level = self.level.as_str().to_ascii_lowercase();
        if self.target.is_empty() {
            EnvFilter::new(level)
        } else {
            EnvFilter::new(format!("{}={}", self.target, level))
        }
    }

    pub fn build(&self) -> Box<dyn Subscriber + Send + Sync> {
        let layer = fmt::layer().with_writer(std::io::stderr);
        let registry = tracing_subscriber::registry().with(self.filter());
        match self.format {
            LogFormat::Full => Box::new(registry.with(layer)),
            LogFormat::Compact => Box::new(registry.with(layer.compact())),
        }
    }

    /// Install as the global default subscriber
    pub fn init(&self) -> Result<(), LoggingError> {
        tracing::subscriber::set_global_default(self.build())
            .map_err(|e| LoggingError::Init(e.to_string()))
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
