// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Column type inference and cell conversion.

use serde_json::{Number, Value};
use strum::Display;

/// Inferred type of a CSV column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ColumnType {
    Int64,
    Float64,
    Bool,
    String,
}

impl ColumnType {
    /// The narrowest type that can hold `cell`, or `None` for an empty cell.
    fn of_cell(cell: &str) -> Option<ColumnType> {
        let cell = cell.trim();
        if cell.is_empty() {
            None
        } else if cell.parse::<i64>().is_ok() {
            Some(ColumnType::Int64)
        } else if cell.parse::<f64>().is_ok() {
            Some(ColumnType::Float64)
        } else if parse_bool(cell).is_some() {
            Some(ColumnType::Bool)
        } else {
            Some(ColumnType::String)
        }
    }

    /// The narrowest type holding values of both `self` and `other`.
    fn widen(self, other: ColumnType) -> ColumnType {
        use ColumnType::*;
        match (self, other) {
            (a, b) if a == b => a,
            (Int64, Float64) | (Float64, Int64) => Float64,
            _ => String,
        }
    }

    /// Convert a raw cell to a typed JSON value.
    ///
    /// Empty cells become null. Cells that do not parse as the column type
    /// (possible past the sampled rows) fall back to the nearest wider form.
    pub fn convert(self, cell: &str) -> Value {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            return Value::Null;
        }
        match self {
            ColumnType::Int64 => trimmed
                .parse::<i64>()
                .map(Value::from)
                .unwrap_or_else(|_| float_or_string(trimmed, cell)),
            ColumnType::Float64 => float_or_string(trimmed, cell),
            ColumnType::Bool => parse_bool(trimmed)
                .map(Value::Bool)
                .unwrap_or_else(|| Value::String(cell.to_string())),
            ColumnType::String => Value::String(cell.to_string()),
        }
    }
}

fn float_or_string(trimmed: &str, raw: &str) -> Value {
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(raw.to_string()))
}

fn parse_bool(cell: &str) -> Option<bool> {
    if cell.eq_ignore_ascii_case("true") {
        Some(true)
    } else if cell.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Accumulates observed cells per column and yields the inferred types.
#[derive(Debug)]
pub struct TypeInference {
    observed: Vec<Option<ColumnType>>,
}

impl TypeInference {
    pub fn new(width: usize) -> Self {
        Self {
            observed: vec![None; width],
        }
    }

    pub fn observe<'a>(&mut self, cells: impl IntoIterator<Item = &'a str>) {
        for (slot, cell) in self.observed.iter_mut().zip(cells) {
            if let Some(kind) = ColumnType::of_cell(cell) {
                *slot = Some(match *slot {
                    None => kind,
                    Some(seen) => seen.widen(kind),
                });
            }
        }
    }

    /// Columns with no non-empty sample are typed as strings.
    pub fn finish(self) -> Vec<ColumnType> {
        self.observed
            .into_iter()
            .map(|kind| kind.unwrap_or(ColumnType::String))
            .collect()
    }
}
