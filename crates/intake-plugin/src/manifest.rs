// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Serializable description of a registered plugin, used for listings.

use intake_core::{Container, Plugin};
use serde::{Deserialize, Serialize};

/// Snapshot of a plugin's identity and where it was discovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginManifest {
    /// Registry key (e.g., "csv").
    pub name: String,
    /// Semantic version string.
    pub version: String,
    /// Kind of value produced by the plugin's sources.
    pub container: Container,
    /// Whether produced sources support multi-partition reads.
    pub partition_access: bool,
    /// Extension module that defined the plugin.
    pub module: String,
}

impl PluginManifest {
    pub fn from_plugin(plugin: &dyn Plugin, module: &str) -> Self {
        Self {
            name: plugin.name().to_string(),
            version: plugin.version().to_string(),
            container: plugin.container(),
            partition_access: plugin.partition_access(),
            module: module.to_string(),
        }
    }

    /// Case-insensitive match against the name or module.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.module.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(name: &str, module: &str) -> PluginManifest {
        PluginManifest {
            name: name.to_string(),
            version: "0.1.0".to_string(),
            container: Container::Dataframe,
            partition_access: true,
            module: module.to_string(),
        }
    }

    #[test]
    fn matches_is_case_insensitive_on_name() {
        assert!(manifest("csv", "intake_csv").matches("CSV"));
    }

    #[test]
    fn matches_module_name() {
        assert!(manifest("tables", "intake_sql").matches("sql"));
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(manifest("csv", "intake_csv").matches(""));
    }

    #[test]
    fn no_match() {
        assert!(!manifest("csv", "intake_csv").matches("parquet"));
    }

    #[test]
    fn serializes_container_lowercase() {
        let json = serde_json::to_value(manifest("csv", "intake_csv")).unwrap();
        assert_eq!(json["container"], "dataframe");
    }
}
