//! Configuration system for the machine.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Baseline memory size, load base, stack top, and step budget.
//! 2. **Structures:** Hierarchical config for general run options, the memory map, and memory.
//! 3. **Loading:** JSON deserialization from a string or a file.
//!
//! Every field is optional in JSON; missing fields take their default. The CLI
//! starts from `Config::default()` or a JSON file and applies flag overrides.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::VmResult;

/// Default configuration constants for the machine.
mod defaults {
    /// Memory size in bytes (64 KiB).
    pub const MEMORY_SIZE: usize = 64 * 1024;

    /// Address the program image is loaded at and execution starts from.
    pub const LOAD_BASE: u32 = 0x1000;

    /// Initial stack pointer. The stack grows down from here toward the image.
    pub const STACK_TOP: u32 = 0x9000;

    /// Instruction budget before a run is declared runaway.
    pub const MAX_STEPS: u64 = crate::common::DEFAULT_MAX_STEPS;
}

/// Root configuration structure containing all machine settings.
///
/// # Examples
///
/// ```
/// use tinyvm_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.memory.size, 64 * 1024);
/// assert_eq!(config.system.load_base, 0x1000);
/// ```
///
/// Deserializing from JSON, with unspecified fields defaulted:
///
/// ```
/// use tinyvm_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_steps": 5000 },
///     "system": { "stack_top": 32768 }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_steps, 5000);
/// assert_eq!(config.system.stack_top, 0x8000);
/// assert_eq!(config.system.load_base, 0x1000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General run settings
    pub general: GeneralConfig,
    /// Memory map (load base and stack)
    pub system: SystemConfig,
    /// Memory unit configuration
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// [`VmError::Config`](crate::common::VmError::Config) if the text is not valid JSON for this schema.
    pub fn from_json_str(json: &str) -> VmResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// [`VmError::Io`](crate::common::VmError::Io) if the file cannot be read,
    /// [`VmError::Config`](crate::common::VmError::Config) if it does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> VmResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

/// General run settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Emit a `trace`-level log line for every executed instruction
    pub trace_instructions: bool,

    /// Instruction budget for one run; exhausting it is a fatal error
    pub max_steps: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            max_steps: defaults::MAX_STEPS,
        }
    }
}

/// Memory map configuration.
///
/// Where the program image goes and where the stack starts. The stack grows
/// toward lower addresses, so `stack_top` must leave room below it for the
/// program's deepest call chain without reaching the image.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Image load address and initial instruction pointer
    pub load_base: u32,

    /// Initial stack pointer
    pub stack_top: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            load_base: defaults::LOAD_BASE,
            stack_top: defaults::STACK_TOP,
        }
    }
}

/// Memory unit configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Memory size in bytes, fixed for the life of the machine
    pub size: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size: defaults::MEMORY_SIZE,
        }
    }
}
