// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subcommand implementations.
//!
//! Each command writes its output to the given writer so it can be exercised
//! without a terminal.

use std::io::Write;
use std::sync::Arc;

use intake_catalog::Catalog;
use intake_config::CatalogConfig;
use intake_core::Result;
use intake_plugin::PluginRegistry;
use serde_json::Value;

/// Load the catalog named by `uri`, a path or a `file://` URL.
pub fn open_catalog(
    uri: &str,
    registry: Arc<PluginRegistry>,
    config: &CatalogConfig,
) -> Result<Catalog> {
    let path = uri.strip_prefix("file://").unwrap_or(uri);
    Catalog::from_path(path, registry, config)
}

/// `intake list`: entry names, or every attribute with `full`.
pub fn list(catalog: &Catalog, full: bool, out: &mut impl Write) -> Result<()> {
    for name in catalog.list() {
        if full {
            print_entry_info(catalog, name, out)?;
        } else {
            writeln!(out, "{name}")?;
        }
    }
    Ok(())
}

/// `intake describe`.
pub fn describe(catalog: &Catalog, name: &str, out: &mut impl Write) -> Result<()> {
    print_entry_info(catalog, name, out)
}

/// `intake exists`: `True` or `False`. Errors other than a missing entry
/// are returned.
pub fn exists(catalog: &Catalog, name: &str, out: &mut impl Write) -> Result<()> {
    let answer = if catalog.exists(name)? { "True" } else { "False" };
    writeln!(out, "{answer}")?;
    Ok(())
}

/// `intake get`: read the whole source and print it.
pub fn get(catalog: &Catalog, name: &str, out: &mut impl Write) -> Result<()> {
    let data = catalog.with_source(name, |source| source.read())?;
    write!(out, "{data}")?;
    Ok(())
}

/// `intake discover`: print the schema as JSON.
pub fn discover(catalog: &Catalog, name: &str, out: &mut impl Write) -> Result<()> {
    let schema = catalog.discover(name)?;
    writeln!(out, "{}", serde_json::to_string_pretty(schema.as_ref())?)?;
    Ok(())
}

/// `intake plugins`: one line per registered plugin matching `query`.
pub fn plugins(registry: &PluginRegistry, query: Option<&str>, out: &mut impl Write) -> Result<()> {
    for manifest in registry.search(query.unwrap_or("")) {
        writeln!(
            out,
            "{} {} container={} partition_access={} module={}",
            manifest.name,
            manifest.version,
            manifest.container,
            manifest.partition_access,
            manifest.module
        )?;
    }
    Ok(())
}

fn print_entry_info(catalog: &Catalog, name: &str, out: &mut impl Write) -> Result<()> {
    for (key, value) in catalog.describe(name)? {
        writeln!(out, "[{name}] {key}={}", format_value(&value))?;
    }
    Ok(())
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
