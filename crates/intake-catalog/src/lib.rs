// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalogs of named data sources.
//!
//! A [`Catalog`] maps entry names to a driver, a location and open options.
//! Entries are resolved through a shared [`intake_plugin::PluginRegistry`]
//! and opened lazily: listing and describing never touch the backend.

pub mod catalog;
pub mod entry;
pub mod loader;

pub use catalog::{Catalog, EntryInfo};
pub use entry::CatalogEntry;
