// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Name resolution from catalog entries to opened data sources.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;

use intake_config::CatalogConfig;
use intake_core::{DataSource, IntakeError, Result, Schema};
use intake_plugin::PluginRegistry;
use serde_json::Value;
use tracing::{debug, info};

use crate::entry::CatalogEntry;
use crate::loader::parse_catalog;

/// Attributes of one entry, sorted by key.
pub type EntryInfo = BTreeMap<String, Value>;

/// A collection of named source definitions resolved through a plugin registry.
#[derive(Debug)]
pub struct Catalog {
    registry: Arc<PluginRegistry>,
    description: Option<String>,
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// An empty catalog.
    pub fn new(registry: Arc<PluginRegistry>) -> Self {
        Self {
            registry,
            description: None,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Load a TOML catalog file.
    ///
    /// Relative locations are resolved against the file's directory when
    /// `config.resolve_relative_paths` is set.
    pub fn from_path(
        path: impl AsRef<Path>,
        registry: Arc<PluginRegistry>,
        config: &CatalogConfig,
    ) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let base_dir = if config.resolve_relative_paths {
            path.parent()
        } else {
            None
        };

        let parsed = parse_catalog(&text, &path.display().to_string(), base_dir)?;
        let mut catalog = Self::new(registry);
        catalog.description = parsed.description;
        for entry in parsed.entries {
            catalog.add_entry(entry)?;
        }

        info!(
            path = %path.display(),
            entries = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Parse catalog text. Locations are kept as written.
    pub fn from_toml_str(text: &str, registry: Arc<PluginRegistry>) -> Result<Self> {
        let parsed = parse_catalog(text, "<inline>", None)?;
        let mut catalog = Self::new(registry);
        catalog.description = parsed.description;
        for entry in parsed.entries {
            catalog.add_entry(entry)?;
        }
        Ok(catalog)
    }

    /// Append an entry. Names must be non-empty and unique.
    pub fn add_entry(&mut self, entry: CatalogEntry) -> Result<()> {
        if entry.name.trim().is_empty() {
            return Err(IntakeError::invalid_config("catalog entry name must not be empty"));
        }
        if self.index.contains_key(&entry.name) {
            return Err(IntakeError::invalid_config(format!(
                "duplicate catalog entry `{}`",
                entry.name
            )));
        }
        self.index.insert(entry.name.clone(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Entry names in definition order.
    pub fn list(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn entry(&self, name: &str) -> Result<&CatalogEntry> {
        self.index
            .get(name)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| IntakeError::EntryNotFound {
                name: name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry attributes plus the flattened `schema.*` fields.
    ///
    /// Opens the source to compute its schema and closes it again, so driver
    /// and schema failures are returned.
    pub fn describe(&self, name: &str) -> Result<EntryInfo> {
        let entry = self.entry(name)?;
        let plugin = self.registry.get(&entry.driver)?;

        let mut info = EntryInfo::new();
        info.insert("name".into(), Value::from(entry.name.as_str()));
        info.insert("driver".into(), Value::from(entry.driver.as_str()));
        info.insert("location".into(), Value::from(entry.location.as_str()));
        info.insert(
            "description".into(),
            entry
                .description
                .as_deref()
                .map(Value::from)
                .unwrap_or(Value::Null),
        );
        info.insert("plugin_version".into(), Value::from(plugin.version().to_string()));
        info.insert("partition_access".into(), Value::Bool(plugin.partition_access()));
        info.insert("metadata".into(), Value::Object(entry.metadata()));

        self.with_source(name, |source| {
            info.insert("container".into(), Value::from(source.container().to_string()));
            info.extend(source.discover()?.attributes());
            Ok(())
        })?;
        Ok(info)
    }

    /// Whether `name` resolves. Only a missing entry answers `false`; any
    /// other resolution failure is returned.
    pub fn exists(&self, name: &str) -> Result<bool> {
        match self.describe(name) {
            Ok(_) => Ok(true),
            Err(e) if e.is_entry_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Open the named source. The schema is not computed yet.
    pub fn get(&self, name: &str) -> Result<DataSource> {
        let entry = self.entry(name)?;
        let plugin = self.registry.get(&entry.driver)?;
        debug!(entry = %entry.name, driver = %entry.driver, "opening source");
        plugin.open(&entry.location, entry.options.clone())
    }

    /// Open the named source, run `f` on it and close it on every exit path.
    pub fn with_source<T>(
        &self,
        name: &str,
        f: impl FnOnce(&mut DataSource) -> Result<T>,
    ) -> Result<T> {
        let mut source = self.get(name)?;
        let outcome = f(&mut source);
        source.close();
        outcome
    }

    /// Open the named source, force schema discovery and release it.
    pub fn discover(&self, name: &str) -> Result<Arc<Schema>> {
        self.with_source(name, |source| source.discover())
    }
}
