// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Separation of `open` options into base keys and backend keys.
//!
//! The base layer only understands `metadata` and `storage_options`. Every
//! other key belongs to the backend and is handed over untouched, so new
//! drivers can accept arbitrary options without changes here.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{IntakeError, Result};
use crate::types::Metadata;

/// Options passed to [`Plugin::open`](crate::Plugin::open).
pub type OpenOptions = Map<String, Value>;

/// Key holding user metadata.
pub const METADATA_KEY: &str = "metadata";

/// Key holding opaque remote-storage parameters.
pub const STORAGE_OPTIONS_KEY: &str = "storage_options";

/// Options meaningful to every data source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseOptions {
    pub metadata: Metadata,
    pub storage_options: Option<Map<String, Value>>,
}

/// Options owned by a specific backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackendOptions(pub Map<String, Value>);

impl BackendOptions {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Deserialize the backend options into a driver's typed option struct.
    ///
    /// Failures (unknown keys, wrong types) become `InvalidConfiguration`.
    pub fn parse<T: DeserializeOwned>(self, driver: &str) -> Result<T> {
        serde_json::from_value(Value::Object(self.0))
            .map_err(|e| IntakeError::invalid_config(format!("{driver}: {e}")))
    }
}

/// Split `options` into base and backend parts.
pub fn split_options(mut options: OpenOptions) -> Result<(BaseOptions, BackendOptions)> {
    let metadata = match options.remove(METADATA_KEY) {
        None | Some(Value::Null) => Metadata::new(),
        Some(Value::Object(map)) => map,
        Some(other) => {
            return Err(IntakeError::invalid_config(format!(
                "`{METADATA_KEY}` must be a table, got {other}"
            )));
        }
    };

    let storage_options = match options.remove(STORAGE_OPTIONS_KEY) {
        None | Some(Value::Null) => None,
        Some(Value::Object(map)) => Some(map),
        Some(other) => {
            return Err(IntakeError::invalid_config(format!(
                "`{STORAGE_OPTIONS_KEY}` must be a table, got {other}"
            )));
        }
    };

    Ok((
        BaseOptions {
            metadata,
            storage_options,
        },
        BackendOptions(options),
    ))
}
