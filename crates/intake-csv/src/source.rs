// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! CSV backend driver.
//!
//! The location may be a path or a glob pattern. On schema computation the
//! driver expands the pattern, reads the header and a sample of the first
//! file, and plans the partitions; that layout is the handle kept until the
//! source is closed.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use intake_core::{Frame, IntakeError, PartitionData, Result, Schema, SourceDriver};
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::blocks::{Block, plan_blocks, read_block_lines};
use crate::infer::{ColumnType, TypeInference};
use crate::options::CsvOptions;

/// Column layout and partition plan computed with the schema.
#[derive(Debug)]
struct Layout {
    columns: Vec<String>,
    types: Vec<ColumnType>,
    blocks: Vec<Block>,
}

/// Reads one or more CSV files as a partitioned dataframe.
#[derive(Debug)]
pub struct CsvDriver {
    location: String,
    options: CsvOptions,
    delimiter: u8,
    storage_options: Option<Map<String, Value>>,
    layout: Option<Layout>,
}

impl CsvDriver {
    pub fn new(
        location: impl Into<String>,
        options: CsvOptions,
        delimiter: u8,
        storage_options: Option<Map<String, Value>>,
    ) -> Self {
        Self {
            location: location.into(),
            options,
            delimiter,
            storage_options,
            layout: None,
        }
    }

    fn resolve_files(&self) -> Result<Vec<PathBuf>> {
        let pattern = self
            .location
            .strip_prefix("file://")
            .unwrap_or(&self.location);
        if let Some((scheme, _)) = pattern.split_once("://") {
            return Err(IntakeError::schema(format!(
                "csv: remote storage `{scheme}://` is not supported"
            )));
        }

        let entries = glob::glob(pattern).map_err(|e| {
            IntakeError::schema_with_source(format!("csv: invalid path pattern {pattern:?}"), e)
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| IntakeError::schema_with_source("csv: cannot read matched path", e))?;
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn read_header(&self, path: &Path) -> Result<(Vec<String>, Vec<ColumnType>)> {
        let open_error = |e: csv::Error| {
            IntakeError::schema_with_source(format!("csv: cannot read {}", path.display()), e)
        };

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.options.has_header)
            .flexible(true)
            .from_path(path)
            .map_err(open_error)?;

        let header: Vec<String> = reader
            .headers()
            .map_err(open_error)?
            .iter()
            .map(str::to_string)
            .collect();

        let columns = dedupe_columns(match &self.options.columns {
            Some(columns) => {
                if !header.is_empty() && columns.len() != header.len() {
                    return Err(IntakeError::schema(format!(
                        "csv: {} column names given but {} has {} fields",
                        columns.len(),
                        path.display(),
                        header.len()
                    )));
                }
                columns.clone()
            }
            None if self.options.has_header => header,
            None => (0..header.len()).map(|i| format!("column_{i}")).collect(),
        });

        let mut inference = TypeInference::new(columns.len());
        for record in reader.records().take(self.options.infer_rows) {
            let record = record.map_err(open_error)?;
            inference.observe(record.iter());
        }
        Ok((columns, inference.finish()))
    }

    /// Byte offset of the first data record of `path`: just past the header
    /// record, which may span several lines when a field is quoted.
    fn data_offset(&self, path: &Path) -> Result<u64> {
        if !self.options.has_header {
            return Ok(0);
        }
        let open_error = |e: csv::Error| {
            IntakeError::schema_with_source(format!("csv: cannot read {}", path.display()), e)
        };
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(open_error)?;
        reader.headers().map_err(open_error)?;
        Ok(reader.position().byte())
    }
}

/// Rename repeated column names `a`, `a.1`, `a.2`, skipping names already taken.
fn dedupe_columns(columns: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(columns.len());
    let mut out = Vec::with_capacity(columns.len());
    for name in columns {
        let mut unique = name.clone();
        let mut suffix = 1;
        while seen.contains(&unique) {
            unique = format!("{name}.{suffix}");
            suffix += 1;
        }
        seen.insert(unique.clone());
        out.push(unique);
    }
    out
}

impl SourceDriver for CsvDriver {
    fn load_schema(&mut self) -> Result<Schema> {
        if let Some(storage_options) = &self.storage_options {
            debug!(
                keys = ?storage_options.keys().collect::<Vec<_>>(),
                "csv: storage options ignored for local files"
            );
        }

        let files = self.resolve_files()?;
        let first = files.first().ok_or_else(|| {
            IntakeError::schema(format!("csv: no files match {:?}", self.location))
        })?;
        let (columns, types) = self.read_header(first)?;

        let mut blocks = Vec::new();
        for path in &files {
            let len = std::fs::metadata(path)
                .map_err(|e| {
                    IntakeError::schema_with_source(format!("csv: cannot stat {}", path.display()), e)
                })?
                .len();
            let data_start = self.data_offset(path)?;
            blocks.extend(plan_blocks(path, data_start, len, self.options.blocksize));
        }

        let dtype: Map<String, Value> = columns
            .iter()
            .zip(&types)
            .map(|(name, kind)| (name.clone(), Value::String(kind.to_string())))
            .collect();
        let file_names: Vec<String> = files.iter().map(|p| p.display().to_string()).collect();

        let schema = Schema::new(Value::Object(dtype), vec![None, Some(columns.len() as u64)])
            .with_npartitions(blocks.len())
            .with_extra("files", json!(file_names))
            .with_extra("columns", json!(columns));

        debug!(
            location = %self.location,
            files = files.len(),
            partitions = blocks.len(),
            "csv: layout planned"
        );
        self.layout = Some(Layout {
            columns,
            types,
            blocks,
        });
        Ok(schema)
    }

    fn read_partition(&mut self, index: usize, _schema: &Schema) -> Result<PartitionData> {
        let layout = self
            .layout
            .as_ref()
            .ok_or_else(|| IntakeError::partition_read(index, "csv: source has not been loaded"))?;
        let block = layout
            .blocks
            .get(index)
            .ok_or(IntakeError::PartitionIndexOutOfRange {
                index,
                npartitions: layout.blocks.len(),
            })?;

        let bytes = read_block_lines(block).map_err(|e| {
            IntakeError::partition_read(index, format!("{}: {e}", block.path.display()))
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes.as_slice());

        let mut frame = Frame::new(layout.columns.clone());
        for record in reader.records() {
            let record = record.map_err(|e| IntakeError::partition_read(index, e.to_string()))?;
            if record.len() != layout.columns.len() {
                return Err(IntakeError::partition_read(
                    index,
                    format!(
                        "{}: expected {} fields, found {}",
                        block.path.display(),
                        layout.columns.len(),
                        record.len()
                    ),
                ));
            }
            frame.rows.push(
                record
                    .iter()
                    .zip(&layout.types)
                    .map(|(cell, kind)| kind.convert(cell))
                    .collect(),
            );
        }
        Ok(PartitionData::Frame(frame))
    }

    fn release(&mut self) {
        self.layout = None;
    }
}
