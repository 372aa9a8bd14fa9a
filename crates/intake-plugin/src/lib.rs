// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin discovery and registry.
//!
//! Backends are linked in explicitly: each backend crate exposes an
//! [`ExtensionModule`] and the host program passes the list of linked
//! modules to [`PluginRegistry::discover`]. Discovery filters modules by
//! name prefix, imports them one by one, instantiates the plugins they
//! define, and resolves name collisions in favour of the first module.

pub mod manifest;
pub mod module;
pub mod registry;

pub use manifest::PluginManifest;
pub use module::{ExtensionModule, PluginDeclaration};
pub use registry::{
    DEFAULT_PLUGIN_PREFIX, ModuleLoadFailure, PluginCollision, PluginRegistry, RegisteredPlugin,
};
