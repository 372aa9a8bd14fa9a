// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration loading with Figment.
//!
//! Lookup order: `/etc/intake/intake.toml`, then
//! `~/.config/intake/intake.toml`, then `./intake.toml`, with `INTAKE_*`
//! environment variables applied last.

#![allow(clippy::result_large_err)] // figment::Error is external

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::IntakeConfig;

/// System-wide configuration file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/intake/intake.toml";

/// Configuration file in the working directory.
pub const LOCAL_CONFIG_PATH: &str = "intake.toml";

/// Per-user configuration file, if the platform has a config directory.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("intake/intake.toml"))
}

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/intake/intake.toml`
/// 3. `~/.config/intake/intake.toml`
/// 4. `./intake.toml`
/// 5. `INTAKE_*` environment variables
pub fn load_config() -> Result<IntakeConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from TOML text over the compiled defaults only.
pub fn load_config_from_str(toml_content: &str) -> Result<IntakeConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(IntakeConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one file plus env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<IntakeConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(IntakeConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// The full layered Figment, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(IntakeConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_PATH))
        .merge(env_provider())
}

/// `INTAKE_*` variables, mapped section by section.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `INTAKE_CATALOG_RESOLVE_RELATIVE_PATHS` must become
/// `catalog.resolve_relative_paths`.
fn env_provider() -> Env {
    Env::prefixed("INTAKE_").map(|key| map_env_key(key.as_str()).into())
}

/// Map a lowercased, prefix-stripped env var name to a config key path.
pub fn map_env_key(key: &str) -> String {
    key.replacen("discovery_", "discovery.", 1)
        .replacen("logging_", "logging.", 1)
        .replacen("catalog_", "catalog.", 1)
}
