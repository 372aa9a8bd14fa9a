// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shape and type description of a data source's output.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::Metadata;

/// Describes the layout of the data a source produces.
///
/// A schema is immutable once built. Sources hand it out as `Arc<Schema>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Optional structural type descriptor.
    pub datashape: Option<String>,
    /// Backend-defined per-field type descriptor.
    pub dtype: Value,
    /// Dimensions of the output; `None` marks an unknown extent such as a row count.
    pub shape: Vec<Option<u64>>,
    /// Number of independently readable partitions.
    pub npartitions: usize,
    /// Backend-specific extras.
    #[serde(default)]
    pub extra_metadata: Metadata,
}

impl Schema {
    /// A single-partition schema with no type information.
    pub fn new(dtype: Value, shape: Vec<Option<u64>>) -> Self {
        Self {
            datashape: None,
            dtype,
            shape,
            npartitions: 1,
            extra_metadata: Metadata::new(),
        }
    }

    pub fn with_npartitions(mut self, npartitions: usize) -> Self {
        self.npartitions = npartitions;
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra_metadata.insert(key.into(), value);
        self
    }

    /// Returns true if `index` addresses an existing partition.
    pub fn contains_partition(&self, index: usize) -> bool {
        index < self.npartitions
    }

    /// Flatten the schema into `schema.*` attributes for display.
    pub fn attributes(&self) -> Vec<(String, Value)> {
        let shape = self
            .shape
            .iter()
            .map(|d| d.map(Value::from).unwrap_or(Value::Null))
            .collect::<Vec<_>>();
        let mut attrs = vec![
            (
                "schema.datashape".to_string(),
                self.datashape.clone().map(Value::String).unwrap_or(Value::Null),
            ),
            ("schema.dtype".to_string(), self.dtype.clone()),
            ("schema.shape".to_string(), Value::Array(shape)),
            ("schema.npartitions".to_string(), Value::from(self.npartitions)),
        ];
        for (key, value) in &self.extra_metadata {
            attrs.push((format!("schema.extra.{key}"), value.clone()));
        }
        attrs
    }
}
