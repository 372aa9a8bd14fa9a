// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Driver plugin trait: a named, versioned factory of data sources.

use crate::error::Result;
use crate::options::OpenOptions;
use crate::source::DataSource;
use crate::types::Container;

/// A factory that opens data at a location into a [`DataSource`].
///
/// Plugins are instantiated once by the registry and shared between catalogs,
/// so they must not hold per-source state.
pub trait Plugin: Send + Sync + 'static {
    /// Registry key. Must be the same for every instance of the implementing type.
    fn name(&self) -> &str;

    /// Semantic version of the plugin.
    fn version(&self) -> semver::Version;

    /// The kind of value produced by sources from this plugin.
    fn container(&self) -> Container;

    /// Whether produced sources support reads of more than one partition.
    fn partition_access(&self) -> bool;

    /// Construct a source for `location`.
    ///
    /// Implementations split `options` with
    /// [`split_options`](crate::options::split_options) and must not read any
    /// data or compute a schema here.
    fn open(&self, location: &str, options: OpenOptions) -> Result<DataSource>;
}

impl std::fmt::Debug for dyn Plugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Plugin")
            .field("name", &self.name())
            .field("version", &self.version().to_string())
            .field("container", &self.container())
            .field("partition_access", &self.partition_access())
            .finish()
    }
}
