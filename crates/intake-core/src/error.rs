// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Intake catalog.

use thiserror::Error;

/// Result alias used by every Intake library crate.
pub type Result<T> = std::result::Result<T, IntakeError>;

/// The primary error type for discovery, catalog resolution, and source reads.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// An extension module failed to load during discovery.
    #[error("failed to import plugin module `{module}`: {message}")]
    PluginImport { module: String, message: String },

    /// No catalog entry has the requested name.
    #[error("catalog entry not found: {name}")]
    EntryNotFound { name: String },

    /// A catalog entry refers to a driver that is not registered.
    #[error("no plugin registered for driver `{name}`")]
    PluginNotFound { name: String },

    /// The backend failed while establishing the schema of a source.
    #[error("schema computation failed: {message}")]
    SchemaComputation {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A partition index outside `0..npartitions` was requested.
    #[error("partition index {index} out of range (source has {npartitions} partitions)")]
    PartitionIndexOutOfRange { index: usize, npartitions: usize },

    /// The backend failed while realising a partition.
    #[error("failed to read partition {index}: {message}")]
    PartitionRead { index: usize, message: String },

    /// Options or catalog definitions failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The source was already closed.
    #[error("data source is closed")]
    SourceClosed,

    /// Filesystem errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntakeError {
    /// Build an `InvalidConfiguration` error from any message.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        IntakeError::InvalidConfiguration(message.into())
    }

    /// Build a `SchemaComputation` error without an underlying cause.
    pub fn schema(message: impl Into<String>) -> Self {
        IntakeError::SchemaComputation {
            message: message.into(),
            source: None,
        }
    }

    /// Build a `SchemaComputation` error wrapping the backend failure.
    pub fn schema_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        IntakeError::SchemaComputation {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Build a `PartitionRead` error for the given partition.
    pub fn partition_read(index: usize, message: impl Into<String>) -> Self {
        IntakeError::PartitionRead {
            index,
            message: message.into(),
        }
    }

    /// Returns true for the error kind produced by resolving an unknown catalog name.
    pub fn is_entry_not_found(&self) -> bool {
        matches!(self, IntakeError::EntryNotFound { .. })
    }
}

impl From<serde_json::Error> for IntakeError {
    fn from(err: serde_json::Error) -> Self {
        IntakeError::InvalidConfiguration(err.to_string())
    }
}
