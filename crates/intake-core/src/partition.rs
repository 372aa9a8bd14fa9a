// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Realised partition content.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::{IntakeError, Result};
use crate::types::Container;

/// Tabular partition content: named columns and typed row cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Frame {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Frame {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for Frame {
    /// Renders the frame as CSV, quoting cells where needed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.columns.is_empty() {
            return Ok(());
        }
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        writer.write_record(&self.columns).map_err(|_| fmt::Error)?;
        for row in &self.rows {
            writer
                .write_record(row.iter().map(render_cell))
                .map_err(|_| fmt::Error)?;
        }
        let bytes = writer.into_inner().map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&bytes))
    }
}

fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The content of one partition, shaped by the producing source's container.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PartitionData {
    Frame(Frame),
    Array(Vec<Value>),
    Object(Value),
}

impl PartitionData {
    /// The container kind this content belongs to.
    pub fn container(&self) -> Container {
        match self {
            PartitionData::Frame(_) => Container::Dataframe,
            PartitionData::Array(_) => Container::Array,
            PartitionData::Object(_) => Container::Object,
        }
    }

    /// Concatenate partitions in index order into a single value.
    ///
    /// Frames must share their column list. Several object partitions are
    /// gathered into a JSON array; a single one is returned as is.
    pub fn concat(container: Container, parts: Vec<PartitionData>) -> Result<PartitionData> {
        match container {
            Container::Dataframe => {
                let mut out: Option<Frame> = None;
                for (index, part) in parts.into_iter().enumerate() {
                    let frame = match part {
                        PartitionData::Frame(frame) => frame,
                        other => return Err(mismatch(index, container, &other)),
                    };
                    match out.as_mut() {
                        None => out = Some(frame),
                        Some(acc) => {
                            if acc.columns != frame.columns {
                                return Err(IntakeError::partition_read(
                                    index,
                                    format!(
                                        "columns {:?} do not match earlier partitions {:?}",
                                        frame.columns, acc.columns
                                    ),
                                ));
                            }
                            acc.rows.extend(frame.rows);
                        }
                    }
                }
                Ok(PartitionData::Frame(out.unwrap_or_default()))
            }
            Container::Array => {
                let mut values = Vec::new();
                for (index, part) in parts.into_iter().enumerate() {
                    match part {
                        PartitionData::Array(items) => values.extend(items),
                        other => return Err(mismatch(index, container, &other)),
                    }
                }
                Ok(PartitionData::Array(values))
            }
            Container::Object => {
                let mut values = Vec::with_capacity(parts.len());
                for (index, part) in parts.into_iter().enumerate() {
                    match part {
                        PartitionData::Object(value) => values.push(value),
                        other => return Err(mismatch(index, container, &other)),
                    }
                }
                if values.len() == 1 {
                    Ok(PartitionData::Object(values.remove(0)))
                } else {
                    Ok(PartitionData::Object(Value::Array(values)))
                }
            }
        }
    }
}

fn mismatch(index: usize, expected: Container, got: &PartitionData) -> IntakeError {
    IntakeError::partition_read(
        index,
        format!("expected {expected} content, got {}", got.container()),
    )
}

impl fmt::Display for PartitionData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionData::Frame(frame) => write!(f, "{frame}"),
            PartitionData::Array(values) => {
                for value in values {
                    writeln!(f, "{}", render_cell(value))?;
                }
                Ok(())
            }
            PartitionData::Object(value) => {
                let text = serde_json::to_string_pretty(value).map_err(|_| fmt::Error)?;
                writeln!(f, "{text}")
            }
        }
    }
}
