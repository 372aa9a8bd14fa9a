// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so misspelled keys are
//! reported instead of silently ignored.

use serde::{Deserialize, Serialize};

/// Default prefix an extension module name must carry to be scanned.
pub const DEFAULT_PREFIX: &str = "intake_";

/// Log levels accepted by `logging.level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Top-level Intake configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IntakeConfig {
    /// Plugin discovery settings.
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Catalog file handling.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Plugin discovery configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DiscoveryConfig {
    /// Only extension modules whose name starts with this prefix are scanned.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Extension modules removed from the search path before discovery.
    #[serde(default)]
    pub disabled_modules: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            disabled_modules: Vec::new(),
        }
    }
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Level for Intake's own crates when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Catalog file configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Resolve relative source locations against the catalog file's directory.
    #[serde(default = "default_resolve_relative_paths")]
    pub resolve_relative_paths: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            resolve_relative_paths: default_resolve_relative_paths(),
        }
    }
}

fn default_resolve_relative_paths() -> bool {
    true
}
