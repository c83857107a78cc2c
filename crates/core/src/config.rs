// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Identity generation configuration
//!
//! ```toml
//! node_id = "02:42:ac:11:00:02"
//! clock_sequence = 4711
//! ```
//!
//! Both keys are optional; missing values are chosen at random.

use crate::clock::{Clock, SystemClock};
use crate::error::ConfigError;
use crate::id::{random_node_id, UuidV1Gen};
use serde::Deserialize;
use std::path::Path;

/// Settings for the UUID version 1 generator
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdentityConfig {
    /// 12 hex digits, optionally separated by `:` or `-`
    #[serde(default)]
    pub node_id: Option<String>,
    #[serde(default)]
    pub clock_sequence: Option<u16>,
}

impl IdentityConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Decoded node id, if one is configured
    pub fn node_id(&self) -> Result<Option<[u8; 6]>, ConfigError> {
        self.node_id.as_deref().map(parse_node_id).transpose()
    }

    /// Build a generator driven by the system clock
    pub fn uuid_generator(&self) -> Result<UuidV1Gen, ConfigError> {
        self.uuid_generator_with_clock(SystemClock)
    }

    pub fn uuid_generator_with_clock<C: Clock>(&self, clock: C) -> Result<UuidV1Gen<C>, ConfigError> {
        let node_id = self.node_id()?.unwrap_or_else(random_node_id);
        let clock_sequence = self.clock_sequence.unwrap_or_else(rand::random);
        tracing::debug!(
            configured_node = self.node_id.is_some(),
            clock_sequence,
            "building uuid v1 generator"
        );
        Ok(UuidV1Gen::with_clock(clock, node_id, clock_sequence))
    }
}

fn parse_node_id(raw: &str) -> Result<[u8; 6], ConfigError> {
    let invalid = || ConfigError::InvalidNodeId(raw.to_string());
    let digits: String = raw.chars().filter(|c| !matches!(c, ':' | '-')).collect();
    if digits.len() != 12 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let mut node = [0u8; 6];
    for (i, byte) in node.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
    }
    Ok(node)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
