// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! TOML catalog file format.
//!
//! ```toml
//! description = "optional"
//!
//! [[sources]]
//! name = "trips"
//! driver = "csv"
//! location = "data/trips-*.csv"
//! description = "optional"
//!
//! [sources.options]
//! blocksize = 1048576
//!
//! [sources.options.metadata]
//! owner = "analytics"
//! ```

use std::path::Path;

use intake_core::{IntakeError, OpenOptions, Result};
use serde::Deserialize;

use crate::entry::CatalogEntry;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    sources: Vec<SourceDefinition>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SourceDefinition {
    name: String,
    driver: String,
    location: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    options: OpenOptions,
}

/// A parsed catalog file, before entries are validated by the catalog.
#[derive(Debug)]
pub struct ParsedCatalog {
    pub description: Option<String>,
    pub entries: Vec<CatalogEntry>,
}

/// Parse catalog text.
///
/// `origin` names the text in error messages. With `base_dir`, relative
/// local locations are joined onto it.
pub fn parse_catalog(text: &str, origin: &str, base_dir: Option<&Path>) -> Result<ParsedCatalog> {
    let file: CatalogFile = toml::from_str(text)
        .map_err(|e| IntakeError::invalid_config(format!("{origin}: {}", e.message())))?;

    let entries = file
        .sources
        .into_iter()
        .map(|source| {
            let location = match base_dir {
                Some(dir) => resolve_location(dir, &source.location),
                None => source.location,
            };
            CatalogEntry {
                name: source.name,
                driver: source.driver,
                location,
                description: source.description,
                options: source.options,
            }
        })
        .collect();

    Ok(ParsedCatalog {
        description: file.description,
        entries,
    })
}

/// Join a relative local path onto `base_dir`; URLs and absolute paths are
/// returned unchanged.
pub fn resolve_location(base_dir: &Path, location: &str) -> String {
    if location.contains("://") || Path::new(location).is_absolute() {
        return location.to_string();
    }
    base_dir.join(location).display().to_string()
}
