// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog entries: a name bound to a driver, a location and open options.

use intake_core::options::METADATA_KEY;
use intake_core::{Metadata, OpenOptions};
use serde_json::Value;

/// One named source definition.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub name: String,
    /// Registry name of the plugin that opens this source.
    pub driver: String,
    pub location: String,
    pub description: Option<String>,
    /// Passed to `Plugin::open` unchanged, base keys included.
    pub options: OpenOptions,
}

impl CatalogEntry {
    pub fn new(
        name: impl Into<String>,
        driver: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            driver: driver.into(),
            location: location.into(),
            description: None,
            options: OpenOptions::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }

    /// The entry's `metadata` option, or an empty map.
    pub fn metadata(&self) -> Metadata {
        match self.options.get(METADATA_KEY) {
            Some(Value::Object(map)) => map.clone(),
            _ => Metadata::new(),
        }
    }
}
