// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Extension modules: the explicit link table scanned by discovery.
//!
//! Each backend crate exposes an [`ExtensionModule`] whose loader returns the
//! [`PluginDeclaration`]s it defines. The host program lists the modules it
//! links in; discovery then imports and instantiates them in that order.

use std::fmt;
use std::sync::Arc;

use intake_core::{Plugin, Result};

type Constructor = Arc<dyn Fn() -> Box<dyn Plugin> + Send + Sync>;
type Loader = Arc<dyn Fn() -> Result<Vec<PluginDeclaration>> + Send + Sync>;

/// A plugin type made available by an extension module.
#[derive(Clone)]
pub struct PluginDeclaration {
    module: String,
    constructor: Constructor,
}

impl PluginDeclaration {
    /// Declare a plugin defined in `module`, built by `constructor`.
    pub fn new(
        module: impl Into<String>,
        constructor: impl Fn() -> Box<dyn Plugin> + Send + Sync + 'static,
    ) -> Self {
        Self {
            module: module.into(),
            constructor: Arc::new(constructor),
        }
    }

    /// Declare a plugin type that is constructed with no arguments.
    pub fn of<P: Plugin + Default>(module: impl Into<String>) -> Self {
        Self::new(module, || Box::new(P::default()) as Box<dyn Plugin>)
    }

    /// The module that defines this plugin. Re-exports keep the original module.
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Build a fresh plugin instance.
    pub fn instantiate(&self) -> Box<dyn Plugin> {
        (self.constructor)()
    }
}

impl fmt::Debug for PluginDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginDeclaration")
            .field("module", &self.module)
            .finish_non_exhaustive()
    }
}

/// A named, importable unit that may define plugins.
#[derive(Clone)]
pub struct ExtensionModule {
    name: String,
    loader: Loader,
}

impl ExtensionModule {
    /// Create a module whose import runs `loader`. Loader errors are reported
    /// per module by discovery and do not abort the scan.
    pub fn new(
        name: impl Into<String>,
        loader: impl Fn() -> Result<Vec<PluginDeclaration>> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            loader: Arc::new(loader),
        }
    }

    /// Create a module that always exposes the given declarations.
    pub fn with_declarations(name: impl Into<String>, declarations: Vec<PluginDeclaration>) -> Self {
        Self::new(name, move || Ok(declarations.clone()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Import the module, returning every declaration it exposes.
    pub fn load(&self) -> Result<Vec<PluginDeclaration>> {
        (self.loader)()
    }
}

impl fmt::Debug for ExtensionModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtensionModule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
