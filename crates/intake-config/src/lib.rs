// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for the Intake catalog.
//!
//! TOML files are merged over compiled defaults following the XDG lookup
//! order, `INTAKE_*` environment variables override them, and unknown keys
//! are reported as miette diagnostics with typo suggestions.
//!
//! ```no_run
//! let config = intake_config::load_and_validate().expect("config errors");
//! println!("discovery prefix: {}", config.discovery.prefix);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use tracing::debug;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{CatalogConfig, DiscoveryConfig, IntakeConfig, LoggingConfig};

/// Load configuration from the standard hierarchy and validate it.
pub fn load_and_validate() -> Result<IntakeConfig, Vec<ConfigError>> {
    let sources = collect_toml_sources();
    debug!(files = sources.len(), "loading configuration");
    finish(loader::load_config(), &sources)
}

/// Load configuration from inline TOML text and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<IntakeConfig, Vec<ConfigError>> {
    let sources = vec![("<inline>".to_string(), toml_content.to_string())];
    finish(loader::load_config_from_str(toml_content), &sources)
}

/// Load configuration from one file (plus env overrides) and validate it.
pub fn load_and_validate_path(path: &std::path::Path) -> Result<IntakeConfig, Vec<ConfigError>> {
    let sources = std::fs::read_to_string(path)
        .map(|content| vec![(path.display().to_string(), content)])
        .unwrap_or_default();
    finish(loader::load_config_from_path(path), &sources)
}

fn finish(
    loaded: Result<IntakeConfig, figment::Error>,
    sources: &[(String, String)],
) -> Result<IntakeConfig, Vec<ConfigError>> {
    match loaded {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err, sources)),
    }
}

/// Contents of the config files that exist, for diagnostic spans.
fn collect_toml_sources() -> Vec<(String, String)> {
    let mut candidates = vec![std::path::PathBuf::from(loader::SYSTEM_CONFIG_PATH)];
    candidates.extend(loader::user_config_path());
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join(loader::LOCAL_CONFIG_PATH));
    }

    candidates
        .into_iter()
        .filter_map(|path| {
            std::fs::read_to_string(&path)
                .ok()
                .map(|content| (path.display().to_string(), content))
        })
        .collect()
}
