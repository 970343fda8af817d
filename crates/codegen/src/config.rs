//! Configuration system for the ROM generator.
//!
//! This module defines the options that parameterize a generation run. It provides:
//! 1. **Defaults:** Baseline values used when nothing is supplied.
//! 2. **Structure:** The flat [`Config`] consumed by the pipeline.
//! 3. **JSON ingestion:** Deserialization for build-system integration.
//!
//! Configuration is supplied as JSON or built in code; use `Config::default()`
//! for the plain command-line path. ROM capacity and the filler word are fixed
//! facts of the output format and live in [`crate::common::constants`], not here.

use serde::Deserialize;

use crate::common::error::RomError;

/// Default configuration constants for the generator.
mod defaults {
    /// Entity name stamped into the ROM module when none is supplied.
    pub const ENTITY_NAME: &str = "bootrom";

    /// Strict validation is off; short or oversized images are absorbed silently.
    pub const STRICT: bool = false;
}

/// Options for one generation run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// VHDL entity name stamped into the generated ROM module.
    ///
    /// Used verbatim; an identifier the downstream toolchain rejects is
    /// passed through unchanged.
    pub entity_name: String,

    /// Fail generation instead of silently dropping image data.
    ///
    /// When set, a truncated tail or an over-capacity image aborts with the
    /// matching [`RomError`] and no text is produced.
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entity_name: defaults::ENTITY_NAME.to_string(),
            strict: defaults::STRICT,
        }
    }
}

impl Config {
    /// Parses a configuration from its JSON representation.
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RomError::Config`] when the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, RomError> {
        Ok(serde_json::from_str(json)?)
    }
}
