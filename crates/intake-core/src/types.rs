// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by plugins, sources, and catalogs.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// User-supplied descriptive metadata attached to a source.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Tag describing the kind of value a data source produces.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Container {
    /// Tabular data with named columns.
    Dataframe,
    /// A flat sequence of values.
    Array,
    /// An arbitrary structured value.
    Object,
}

/// Lifecycle state of a [`DataSource`](crate::DataSource).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SourceState {
    /// Constructed; the backend has not been touched yet.
    Created,
    /// The schema has been computed and the backend handle is held.
    Open,
    /// Released. Terminal.
    Closed,
}
