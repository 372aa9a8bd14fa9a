// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lazily-initialised, closable data source handle.
//!
//! A [`DataSource`] wraps a backend [`SourceDriver`] and enforces the
//! lifecycle `Created -> Open -> Closed`:
//!
//! - the schema is computed on first use and memoised for the lifetime of the
//!   instance;
//! - partition reads always follow schema computation and are bounds-checked
//!   against the cached partition count;
//! - `close` releases the backend handle, is idempotent, and runs on drop, so
//!   owning a `DataSource` is the scope of the acquired resource.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::{IntakeError, Result};
use crate::partition::PartitionData;
use crate::schema::Schema;
use crate::traits::SourceDriver;
use crate::types::{Container, Metadata, SourceState};

/// A named, lazily-initialised handle to data.
pub struct DataSource {
    driver_name: String,
    container: Container,
    metadata: Metadata,
    schema: Option<Arc<Schema>>,
    state: SourceState,
    driver: Box<dyn SourceDriver>,
}

impl DataSource {
    /// Wrap a backend driver. Nothing is read until the schema is requested.
    pub fn new(
        driver_name: impl Into<String>,
        container: Container,
        metadata: Metadata,
        driver: impl SourceDriver + 'static,
    ) -> Self {
        Self {
            driver_name: driver_name.into(),
            container,
            metadata,
            schema: None,
            state: SourceState::Created,
            driver: Box::new(driver),
        }
    }

    /// Name of the plugin that produced this source.
    pub fn driver_name(&self) -> &str {
        &self.driver_name
    }

    pub fn container(&self) -> Container {
        self.container
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn state(&self) -> SourceState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.state == SourceState::Closed
    }

    /// The schema if it has already been computed.
    pub fn cached_schema(&self) -> Option<&Arc<Schema>> {
        self.schema.as_ref()
    }

    /// Return the schema, computing it through the backend on first call only.
    ///
    /// A backend failure propagates and leaves the cache empty; the source
    /// stays closable.
    pub fn schema(&mut self) -> Result<Arc<Schema>> {
        self.ensure_usable()?;
        if let Some(schema) = &self.schema {
            return Ok(Arc::clone(schema));
        }
        self.compute_schema()
    }

    /// Force schema computation and return it, for previewing a source.
    pub fn discover(&mut self) -> Result<Arc<Schema>> {
        self.schema()
    }

    /// Recompute the schema, replacing the cached instance wholesale.
    pub fn refresh_schema(&mut self) -> Result<Arc<Schema>> {
        self.ensure_usable()?;
        self.schema = None;
        self.compute_schema()
    }

    /// Read partition `index`, which must be below the schema's partition count.
    pub fn partition(&mut self, index: usize) -> Result<PartitionData> {
        let schema = self.schema()?;
        if !schema.contains_partition(index) {
            return Err(IntakeError::PartitionIndexOutOfRange {
                index,
                npartitions: schema.npartitions,
            });
        }
        self.driver.read_partition(index, &schema)
    }

    /// Read every partition in order and concatenate them.
    pub fn read(&mut self) -> Result<PartitionData> {
        let schema = self.schema()?;
        let mut parts = Vec::with_capacity(schema.npartitions);
        for index in 0..schema.npartitions {
            parts.push(self.driver.read_partition(index, &schema)?);
        }
        PartitionData::concat(self.container, parts)
    }

    /// Release the backend handle. Calling this more than once is a no-op.
    pub fn close(&mut self) {
        if self.state == SourceState::Closed {
            return;
        }
        self.driver.release();
        self.schema = None;
        self.state = SourceState::Closed;
        debug!(driver = %self.driver_name, "data source closed");
    }

    fn compute_schema(&mut self) -> Result<Arc<Schema>> {
        let schema = Arc::new(self.driver.load_schema()?);
        debug!(
            driver = %self.driver_name,
            npartitions = schema.npartitions,
            "schema computed"
        );
        self.schema = Some(Arc::clone(&schema));
        self.state = SourceState::Open;
        Ok(schema)
    }

    fn ensure_usable(&self) -> Result<()> {
        if self.state == SourceState::Closed {
            return Err(IntakeError::SourceClosed);
        }
        Ok(())
    }
}

impl Drop for DataSource {
    fn drop(&mut self) {
        self.close();
    }
}

impl fmt::Debug for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSource")
            .field("driver", &self.driver_name)
            .field("container", &self.container)
            .field("state", &self.state)
            .field("schema", &self.schema)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::Frame;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Counters {
        loads: AtomicUsize,
        reads: AtomicUsize,
        releases: AtomicUsize,
    }

    struct StubDriver {
        counters: Arc<Counters>,
        npartitions: usize,
        fail_load: bool,
    }

    impl SourceDriver for StubDriver {
        fn load_schema(&mut self) -> Result<Schema> {
            self.counters.loads.fetch_add(1, Ordering::SeqCst);
            if self.fail_load {
                return Err(IntakeError::schema("backend unavailable"));
            }
            Ok(Schema::new(json!({"n": "int64"}), vec![None, Some(1)])
                .with_npartitions(self.npartitions))
        }

        fn read_partition(&mut self, index: usize, _schema: &Schema) -> Result<PartitionData> {
            self.counters.reads.fetch_add(1, Ordering::SeqCst);
            Ok(PartitionData::Frame(Frame {
                columns: vec!["n".to_string()],
                rows: vec![vec![json!(index)]],
            }))
        }

        fn release(&mut self) {
            self.counters.releases.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn source(npartitions: usize, fail_load: bool) -> (DataSource, Arc<Counters>) {
        let counters = Arc::new(Counters::default());
        let driver = StubDriver {
            counters: Arc::clone(&counters),
            npartitions,
            fail_load,
        };
        (
            DataSource::new("stub", Container::Dataframe, Metadata::new(), driver),
            counters,
        )
    }

    #[test]
    fn new_source_is_created_without_backend_access() {
        let (src, counters) = source(2, false);
        assert_eq!(src.state(), SourceState::Created);
        assert!(src.cached_schema().is_none());
        assert_eq!(counters.loads.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn schema_is_computed_once_and_shared() {
        let (mut src, counters) = source(2, false);
        let first = src.schema().unwrap();
        let second = src.schema().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(counters.loads.load(Ordering::SeqCst), 1);
        assert_eq!(src.state(), SourceState::Open);
    }

    #[test]
    fn discover_uses_the_cached_schema() {
        let (mut src, counters) = source(1, false);
        src.schema().unwrap();
        src.discover().unwrap();
        assert_eq!(counters.loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn refresh_replaces_cached_schema() {
        let (mut src, counters) = source(1, false);
        let first = src.schema().unwrap();
        let refreshed = src.refresh_schema().unwrap();
        assert!(!Arc::ptr_eq(&first, &refreshed));
        assert_eq!(*first, *refreshed);
        assert_eq!(counters.loads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn partition_forces_schema_then_reads() {
        let (mut src, counters) = source(3, false);
        let part = src.partition(2).unwrap();
        assert_eq!(counters.loads.load(Ordering::SeqCst), 1);
        assert_eq!(counters.reads.load(Ordering::SeqCst), 1);
        let PartitionData::Frame(frame) = part else {
            panic!("expected frame");
        };
        assert_eq!(frame.rows, vec![vec![json!(2)]]);
    }

    #[test]
    fn partition_out_of_range_fails_without_backend_read() {
        let (mut src, counters) = source(3, false);
        let err = src.partition(3).unwrap_err();
        assert!(matches!(
            err,
            IntakeError::PartitionIndexOutOfRange { index: 3, npartitions: 3 }
        ));
        assert_eq!(counters.reads.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn read_concatenates_all_partitions() {
        let (mut src, counters) = source(3, false);
        let PartitionData::Frame(frame) = src.read().unwrap() else {
            panic!("expected frame");
        };
        assert_eq!(frame.rows, vec![vec![json!(0)], vec![json!(1)], vec![json!(2)]]);
        assert_eq!(counters.reads.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn close_is_idempotent_and_blocks_reads() {
        let (mut src, counters) = source(1, false);
        src.schema().unwrap();
        src.close();
        src.close();
        assert!(src.is_closed());
        assert_eq!(counters.releases.load(Ordering::SeqCst), 1);
        assert!(matches!(src.schema(), Err(IntakeError::SourceClosed)));
        assert!(matches!(src.partition(0), Err(IntakeError::SourceClosed)));
        assert!(matches!(src.read(), Err(IntakeError::SourceClosed)));
    }

    #[test]
    fn drop_releases_the_backend() {
        let (src, counters) = source(1, false);
        drop(src);
        assert_eq!(counters.releases.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failed_schema_propagates_and_source_stays_closable() {
        let (mut src, counters) = source(1, true);
        let err = src.schema().unwrap_err();
        assert!(matches!(err, IntakeError::SchemaComputation { .. }));
        assert!(src.cached_schema().is_none());
        assert_eq!(src.state(), SourceState::Created);

        src.close();
        assert!(src.is_closed());
        assert_eq!(counters.releases.load(Ordering::SeqCst), 1);
    }
}
