//! Configuration for the core model and its simulator wrapper.
//!
//! This module defines the configuration structures used to parameterize the
//! model. It provides:
//! 1. **Defaults:** Baseline harness timing.
//! 2. **Structures:** General (tracing) and core (unspecified-behavior policy) settings.
//! 3. **Enums:** The deterministic policy applied to unassigned encodings.
//!
//! Configuration is supplied as JSON (`Config::from_json`, `Config::from_file`)
//! or built with `Config::default()`. Every field is optional in JSON.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::{Error, Result};

/// Default configuration constants.
mod defaults {
    use crate::common::constants::RESET_HOLD_CYCLES;

    /// Cycles `rst_n` is held low, and then high, by `Simulator::apply_reset`.
    pub const RESET_CYCLES: u32 = RESET_HOLD_CYCLES;
}

/// Output behavior for words whose `(class, funct3, funct2)` selects no operation.
///
/// Neither policy writes a register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum IllegalOpPolicy {
    /// Drive `0x00` onto the output port.
    #[default]
    DriveZero,
    /// Repeat the last value the core drove.
    #[serde(alias = "Hold")]
    HoldOutput,
}

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Core behavior settings.
    #[serde(default)]
    pub core: CoreConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `tracing` event at INFO level for every executed cycle
    /// (they are always emitted at TRACE level).
    #[serde(default)]
    pub trace_instructions: bool,
}

/// Core behavior settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CoreConfig {
    /// Output policy for unassigned encodings.
    #[serde(default)]
    pub illegal_op: IllegalOpPolicy,

    /// Reset hold time, in clock cycles, used by the simulator wrapper.
    #[serde(default = "CoreConfig::default_reset_cycles")]
    pub reset_cycles: u32,
}

impl CoreConfig {
    /// Returns the default reset hold time.
    const fn default_reset_cycles() -> u32 {
        defaults::RESET_CYCLES
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            illegal_op: IllegalOpPolicy::default(),
            reset_cycles: defaults::RESET_CYCLES,
        }
    }
}
