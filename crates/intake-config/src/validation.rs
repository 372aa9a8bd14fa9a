// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation.
//!
//! Checks constraints serde cannot express. All problems are collected
//! rather than stopping at the first.

use std::collections::HashSet;

use crate::diagnostic::ConfigError;
use crate::model::{IntakeConfig, LOG_LEVELS};

/// Validate a deserialized configuration, returning every error found.
pub fn validate_config(config: &IntakeConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let prefix = &config.discovery.prefix;
    if prefix.is_empty() {
        errors.push(ConfigError::Validation {
            key: "discovery.prefix".to_string(),
            message: "must not be empty".to_string(),
        });
    } else if !prefix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        errors.push(ConfigError::Validation {
            key: "discovery.prefix".to_string(),
            message: format!("`{prefix}` may only contain ASCII letters, digits and `_`"),
        });
    }

    let mut seen = HashSet::new();
    for (i, module) in config.discovery.disabled_modules.iter().enumerate() {
        if module.trim().is_empty() {
            errors.push(ConfigError::Validation {
                key: format!("discovery.disabled_modules[{i}]"),
                message: "must not be empty".to_string(),
            });
        } else if !seen.insert(module) {
            errors.push(ConfigError::Validation {
                key: format!("discovery.disabled_modules[{i}]"),
                message: format!("`{module}` is listed more than once"),
            });
        }
    }

    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            key: "logging.level".to_string(),
            message: format!(
                "unknown level `{}`, expected one of: {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
