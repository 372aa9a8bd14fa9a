// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Backend options accepted by the `csv` driver.

use intake_core::{IntakeError, Result};
use serde::Deserialize;

/// Options parsed from the backend half of the `open` options.
///
/// Unknown keys are rejected so typos surface at open time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CsvOptions {
    /// Field separator; must be a single ASCII character.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Whether the first line of every file is a header.
    #[serde(default = "default_has_header")]
    pub has_header: bool,

    /// Split each file into partitions of roughly this many bytes.
    /// `None` reads every file as one partition.
    #[serde(default)]
    pub blocksize: Option<u64>,

    /// Number of leading records sampled to infer column types.
    #[serde(default = "default_infer_rows")]
    pub infer_rows: usize,

    /// Explicit column names, replacing the header or the generated names.
    #[serde(default)]
    pub columns: Option<Vec<String>>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            has_header: default_has_header(),
            blocksize: None,
            infer_rows: default_infer_rows(),
            columns: None,
        }
    }
}

fn default_delimiter() -> String {
    ",".to_string()
}

fn default_has_header() -> bool {
    true
}

fn default_infer_rows() -> usize {
    100
}

impl CsvOptions {
    /// Check semantic constraints and return the delimiter byte.
    pub fn validate(&self) -> Result<u8> {
        let delimiter = match self.delimiter.as_bytes() {
            [byte] if byte.is_ascii() => *byte,
            _ => {
                return Err(IntakeError::invalid_config(format!(
                    "csv: delimiter must be a single ASCII character, got {:?}",
                    self.delimiter
                )));
            }
        };

        if self.blocksize == Some(0) {
            return Err(IntakeError::invalid_config("csv: blocksize must be greater than zero"));
        }

        if let Some(columns) = &self.columns {
            if columns.is_empty() {
                return Err(IntakeError::invalid_config("csv: columns must not be empty"));
            }
        }

        Ok(delimiter)
    }
}
