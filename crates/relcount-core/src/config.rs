//! Counting configuration
//!
//! The two global switches live in `PerformanceSettings`. They may change
//! between process restarts but are read-only for the duration of a single
//! operation. Configuration is stored as TOML:
//!
//! ```toml
//! engine_key = "order-engine"
//!
//! [performance]
//! enable_execution_relationship_counts = true
//! enable_task_relationship_counts = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{RelCountError, Result};

/// Provider of the process-wide counting switches
pub trait CountingPolicy {
    /// Whether execution relationship counting is switched on globally
    fn execution_counting_enabled(&self) -> bool;

    /// Whether task relationship counting is switched on globally
    fn task_counting_enabled(&self) -> bool;
}

/// Global counting switches
///
/// Both switches default to off: counting is an opt-in optimisation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PerformanceSettings {
    pub enable_execution_relationship_counts: bool,
    pub enable_task_relationship_counts: bool,
}

impl PerformanceSettings {
    pub fn new(execution: bool, task: bool) -> Self {
        Self {
            enable_execution_relationship_counts: execution,
            enable_task_relationship_counts: task,
        }
    }

    /// Both switches on
    pub fn all_enabled() -> Self {
        Self::new(true, true)
    }
}

impl CountingPolicy for PerformanceSettings {
    fn execution_counting_enabled(&self) -> bool {
        self.enable_execution_relationship_counts
    }

    fn task_counting_enabled(&self) -> bool {
        self.enable_task_relationship_counts
    }
}

/// Top-level configuration for the counting core
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CountingConfig {
    /// Key attached to every dispatched event, identifying this engine
    #[serde(default = "default_engine_key")]
    pub engine_key: String,

    #[serde(default)]
    pub performance: PerformanceSettings,
}

fn default_engine_key() -> String {
    "default".to_string()
}

impl Default for CountingConfig {
    fn default() -> Self {
        Self {
            engine_key: default_engine_key(),
            performance: PerformanceSettings::default(),
        }
    }
}

impl CountingConfig {
    /// Build a config with the given performance switches and the default engine key
    pub fn with_performance(performance: PerformanceSettings) -> Self {
        Self {
            performance,
            ..Self::default()
        }
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns `ConfigParse` on malformed TOML, wrong value types, or unknown keys.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CountingConfig = toml::from_str(content)?;
        if config.engine_key.trim().is_empty() {
            return Err(RelCountError::ConfigParse {
                message: "engine_key cannot be empty".to_string(),
            });
        }
        Ok(config)
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `ConfigRead` if the file cannot be read, or `ConfigParse` if
    /// its content is invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| RelCountError::ConfigRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        tracing::debug!(
            component = module_path!(),
            op = "load_config",
            path = %path.display(),
            "loading counting configuration"
        );
        Self::from_toml_str(&content)
    }
}

impl CountingPolicy for CountingConfig {
    fn execution_counting_enabled(&self) -> bool {
        self.performance.execution_counting_enabled()
    }

    fn task_counting_enabled(&self) -> bool {
        self.performance.task_counting_enabled()
    }
}
