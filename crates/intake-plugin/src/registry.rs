// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin registry built by scanning extension modules.
//!
//! The `PluginRegistry` holds exactly one plugin per name, in discovery
//! order. When two modules provide the same name, the plugin discovered
//! first is kept and the collision is recorded and logged as a warning.
//! A module that fails to load is recorded and skipped.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use intake_core::{IntakeError, Plugin, Result};
use tracing::{debug, info, warn};

use crate::manifest::PluginManifest;
use crate::module::ExtensionModule;

/// Module name prefix scanned when none is configured.
pub const DEFAULT_PLUGIN_PREFIX: &str = "intake_";

/// A plugin together with the module it was discovered in.
#[derive(Clone)]
pub struct RegisteredPlugin {
    pub plugin: Arc<dyn Plugin>,
    pub module: String,
}

impl RegisteredPlugin {
    pub fn manifest(&self) -> PluginManifest {
        PluginManifest::from_plugin(self.plugin.as_ref(), &self.module)
    }
}

impl fmt::Debug for RegisteredPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredPlugin")
            .field("plugin", &self.plugin)
            .field("module", &self.module)
            .finish()
    }
}

/// Two modules provided a plugin with the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginCollision {
    pub name: String,
    /// Module of the plugin that stayed registered.
    pub kept_module: String,
    /// Module of the plugin that was discarded.
    pub rejected_module: String,
}

impl fmt::Display for PluginCollision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "plugin name collision for `{}` from `{}` and `{}`; keeping plugin from first location",
            self.name, self.kept_module, self.rejected_module
        )
    }
}

/// An extension module that could not be imported.
#[derive(Debug)]
pub struct ModuleLoadFailure {
    pub module: String,
    pub error: IntakeError,
}

/// Registry of plugins keyed by name.
///
/// Read-only once built; share it between catalogs behind an `Arc`.
#[derive(Debug, Default)]
pub struct PluginRegistry {
    order: Vec<String>,
    entries: HashMap<String, RegisteredPlugin>,
    collisions: Vec<PluginCollision>,
    failures: Vec<ModuleLoadFailure>,
}

impl PluginRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `search_path` in order and register every plugin defined by a
    /// module whose name starts with `prefix`.
    ///
    /// Declarations re-exported from another module are skipped, so a plugin
    /// reachable from two modules is only registered by its defining one.
    pub fn discover(search_path: &[ExtensionModule], prefix: &str) -> Self {
        let mut registry = Self::new();

        for module in search_path {
            if !module.name().starts_with(prefix) {
                debug!(module = module.name(), prefix, "skipping module without plugin prefix");
                continue;
            }
            registry.scan_module(module);
        }

        info!(
            count = registry.len(),
            collisions = registry.collisions.len(),
            failures = registry.failures.len(),
            "plugin registry initialized"
        );
        registry
    }

    fn scan_module(&mut self, module: &ExtensionModule) {
        let started = Instant::now();

        let declarations = match module.load() {
            Ok(declarations) => declarations,
            Err(error) => {
                warn!(module = module.name(), error = %error, "failed to import plugin module");
                self.failures.push(ModuleLoadFailure {
                    module: module.name().to_string(),
                    error,
                });
                return;
            }
        };

        let mut registered = 0;
        for declaration in declarations {
            if declaration.module() != module.name() {
                debug!(
                    module = module.name(),
                    defined_in = declaration.module(),
                    "skipping re-exported plugin"
                );
                continue;
            }
            if self.register(module.name(), declaration.instantiate()) {
                registered += 1;
            }
        }

        debug!(
            module = module.name(),
            registered,
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "scanned plugin module"
        );
    }

    /// Register `plugin` as provided by `module`.
    ///
    /// Returns false, keeping the existing plugin, if the name is taken.
    pub fn register(&mut self, module: &str, plugin: Box<dyn Plugin>) -> bool {
        let name = plugin.name().to_string();
        if let Some(existing) = self.entries.get(&name) {
            let collision = PluginCollision {
                name,
                kept_module: existing.module.clone(),
                rejected_module: module.to_string(),
            };
            warn!(
                plugin = %collision.name,
                kept = %collision.kept_module,
                rejected = %collision.rejected_module,
                "{collision}"
            );
            self.collisions.push(collision);
            return false;
        }

        self.order.push(name.clone());
        self.entries.insert(
            name,
            RegisteredPlugin {
                plugin: Arc::from(plugin),
                module: module.to_string(),
            },
        );
        true
    }

    /// Look up a plugin by name.
    pub fn get(&self, name: &str) -> Result<Arc<dyn Plugin>> {
        self.entries
            .get(name)
            .map(|entry| Arc::clone(&entry.plugin))
            .ok_or_else(|| IntakeError::PluginNotFound {
                name: name.to_string(),
            })
    }

    /// Look up the full registration for a plugin.
    pub fn entry(&self, name: &str) -> Option<&RegisteredPlugin> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Plugin names in discovery order.
    pub fn names(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    /// All registrations in discovery order.
    pub fn list_all(&self) -> Vec<&RegisteredPlugin> {
        self.order
            .iter()
            .filter_map(|name| self.entries.get(name))
            .collect()
    }

    /// Manifests of registered plugins matching `query` (case-insensitive,
    /// name or module). An empty query returns all of them.
    pub fn search(&self, query: &str) -> Vec<PluginManifest> {
        self.list_all()
            .into_iter()
            .map(RegisteredPlugin::manifest)
            .filter(|manifest| manifest.matches(query))
            .collect()
    }

    /// Name collisions recorded while building the registry.
    pub fn collisions(&self) -> &[PluginCollision] {
        &self.collisions
    }

    /// Modules that failed to import during discovery.
    pub fn failures(&self) -> &[ModuleLoadFailure] {
        &self.failures
    }

    /// Returns the number of registered plugins.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no plugins are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::PluginDeclaration;
    use intake_core::{Container, DataSource, OpenOptions};

    struct Named {
        name: &'static str,
        version: u64,
    }

    impl Plugin for Named {
        fn name(&self) -> &str {
            self.name
        }
        fn version(&self) -> semver::Version {
            semver::Version::new(self.version, 0, 0)
        }
        fn container(&self) -> Container {
            Container::Array
        }
        fn partition_access(&self) -> bool {
            false
        }
        fn open(&self, _location: &str, _options: OpenOptions) -> Result<DataSource> {
            Err(IntakeError::invalid_config("not openable"))
        }
    }

    fn declare(module: &str, name: &'static str, version: u64) -> PluginDeclaration {
        PluginDeclaration::new(module, move || Box::new(Named { name, version }) as Box<dyn Plugin>)
    }

    #[test]
    fn register_and_get_roundtrip() {
        let mut registry = PluginRegistry::new();
        assert!(registry.register("intake_a", Box::new(Named { name: "a", version: 1 })));

        let plugin = registry.get("a").unwrap();
        assert_eq!(plugin.name(), "a");
        assert_eq!(registry.entry("a").unwrap().module, "intake_a");
    }

    #[test]
    fn get_unknown_is_plugin_not_found() {
        let registry = PluginRegistry::new();
        assert!(matches!(
            registry.get("missing"),
            Err(IntakeError::PluginNotFound { .. })
        ));
    }

    #[test]
    fn register_keeps_first_on_collision() {
        let mut registry = PluginRegistry::new();
        registry.register("intake_one", Box::new(Named { name: "dup", version: 1 }));
        let inserted = registry.register("intake_two", Box::new(Named { name: "dup", version: 2 }));

        assert!(!inserted);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("dup").unwrap().version().major, 1);
        assert_eq!(
            registry.collisions(),
            &[PluginCollision {
                name: "dup".into(),
                kept_module: "intake_one".into(),
                rejected_module: "intake_two".into(),
            }]
        );
    }

    #[test]
    fn discover_respects_prefix() {
        let modules = vec![
            ExtensionModule::with_declarations("intake_a", vec![declare("intake_a", "a", 1)]),
            ExtensionModule::with_declarations("other_b", vec![declare("other_b", "b", 1)]),
        ];
        let registry = PluginRegistry::discover(&modules, DEFAULT_PLUGIN_PREFIX);
        assert_eq!(registry.names(), vec!["a"]);
    }

    #[test]
    fn discover_skips_reexported_declarations() {
        let shared = declare("intake_base", "base", 1);
        let modules = vec![
            ExtensionModule::with_declarations("intake_base", vec![shared.clone()]),
            ExtensionModule::with_declarations(
                "intake_wrapper",
                vec![shared, declare("intake_wrapper", "wrapper", 1)],
            ),
        ];
        let registry = PluginRegistry::discover(&modules, "intake_");

        assert_eq!(registry.names(), vec!["base", "wrapper"]);
        assert!(registry.collisions().is_empty());
    }

    #[test]
    fn discover_preserves_order_and_search_filters() {
        let modules = vec![ExtensionModule::with_declarations(
            "intake_multi",
            vec![
                declare("intake_multi", "zeta", 1),
                declare("intake_multi", "alpha", 1),
            ],
        )];
        let registry = PluginRegistry::discover(&modules, "intake_");

        assert_eq!(registry.names(), vec!["zeta", "alpha"]);
        let found = registry.search("ALP");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "alpha");
        assert_eq!(found[0].module, "intake_multi");
        assert_eq!(registry.search("").len(), 2);
    }

    #[test]
    fn module_with_no_plugins_is_not_an_error() {
        let modules = vec![ExtensionModule::with_declarations("intake_empty", vec![])];
        let registry = PluginRegistry::discover(&modules, "intake_");
        assert!(registry.is_empty());
        assert!(registry.failures().is_empty());
    }

    #[test]
    fn len_and_is_empty() {
        let mut registry = PluginRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);

        registry.register("intake_t", Box::new(Named { name: "t", version: 1 }));
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 1);
    }
}
