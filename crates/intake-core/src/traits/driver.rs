// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Backend half of a data source.

use crate::error::Result;
use crate::partition::PartitionData;
use crate::schema::Schema;

/// Backend operations wrapped by [`DataSource`](crate::DataSource).
///
/// The wrapper owns caching and lifecycle: `load_schema` is called at most
/// once per successful computation, `read_partition` only with an index that
/// is in range for the cached schema, and `release` at most once.
pub trait SourceDriver: Send {
    /// Consult the backend and describe its output. May open and retain a handle.
    fn load_schema(&mut self) -> Result<Schema>;

    /// Realise the content of partition `index`.
    fn read_partition(&mut self, index: usize, schema: &Schema) -> Result<PartitionData>;

    /// Drop any handle acquired by `load_schema` or `read_partition`.
    fn release(&mut self) {}
}
