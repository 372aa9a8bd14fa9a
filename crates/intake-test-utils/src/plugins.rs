// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic plugins for tests.
//!
//! `CountingPlugin` sources report every backend call through a shared
//! [`SourceProbe`], which makes "computed at most once" and "released on
//! close" observable from the outside.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use intake_core::{
    Container, DataSource, Frame, IntakeError, OpenOptions, PartitionData, Plugin, Result, Schema,
    SourceDriver, split_options,
};
use serde::Deserialize;
use serde_json::json;

/// Call counters shared by every source opened from one plugin.
#[derive(Debug, Default)]
pub struct SourceProbe {
    opens: AtomicUsize,
    schema_loads: AtomicUsize,
    partition_reads: AtomicUsize,
    releases: AtomicUsize,
}

impl SourceProbe {
    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn schema_loads(&self) -> usize {
        self.schema_loads.load(Ordering::SeqCst)
    }

    pub fn partition_reads(&self) -> usize {
        self.partition_reads.load(Ordering::SeqCst)
    }

    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }
}

/// Backend options understood by [`CountingPlugin`].
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CountingOptions {
    #[serde(default = "default_npartitions")]
    npartitions: usize,
    #[serde(default)]
    fail_schema: bool,
}

fn default_npartitions() -> usize {
    1
}

/// A plugin whose sources produce one row per partition and count backend calls.
#[derive(Debug, Clone)]
pub struct CountingPlugin {
    name: String,
    container: Container,
    probe: Arc<SourceProbe>,
}

impl CountingPlugin {
    /// Create a dataframe-producing plugin registered as `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            container: Container::Dataframe,
            probe: Arc::new(SourceProbe::default()),
        }
    }

    pub fn with_container(mut self, container: Container) -> Self {
        self.container = container;
        self
    }

    /// Counters shared with every source this plugin opens.
    pub fn probe(&self) -> Arc<SourceProbe> {
        Arc::clone(&self.probe)
    }
}

impl Plugin for CountingPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn container(&self) -> Container {
        self.container
    }

    fn partition_access(&self) -> bool {
        true
    }

    fn open(&self, location: &str, options: OpenOptions) -> Result<DataSource> {
        let (base, backend) = split_options(options)?;
        let opts: CountingOptions = backend.parse(&self.name)?;
        self.probe.opens.fetch_add(1, Ordering::SeqCst);
        let driver = CountingDriver {
            location: location.to_string(),
            container: self.container,
            npartitions: opts.npartitions,
            fail_schema: opts.fail_schema,
            probe: Arc::clone(&self.probe),
        };
        Ok(DataSource::new(&self.name, self.container, base.metadata, driver))
    }
}

struct CountingDriver {
    location: String,
    container: Container,
    npartitions: usize,
    fail_schema: bool,
    probe: Arc<SourceProbe>,
}

impl SourceDriver for CountingDriver {
    fn load_schema(&mut self) -> Result<Schema> {
        self.probe.schema_loads.fetch_add(1, Ordering::SeqCst);
        if self.fail_schema {
            return Err(IntakeError::schema(format!("cannot reach {}", self.location)));
        }
        Ok(Schema::new(json!({"partition": "int64"}), vec![None, Some(1)])
            .with_npartitions(self.npartitions)
            .with_extra("location", json!(self.location)))
    }

    fn read_partition(&mut self, index: usize, _schema: &Schema) -> Result<PartitionData> {
        self.probe.partition_reads.fetch_add(1, Ordering::SeqCst);
        Ok(match self.container {
            Container::Dataframe => PartitionData::Frame(Frame {
                columns: vec!["partition".to_string()],
                rows: vec![vec![json!(index)]],
            }),
            Container::Array => PartitionData::Array(vec![json!(index)]),
            Container::Object => PartitionData::Object(json!({ "partition": index })),
        })
    }

    fn release(&mut self) {
        self.probe.releases.fetch_add(1, Ordering::SeqCst);
    }
}

/// A plugin that opens fine but whose sources can never compute a schema.
#[derive(Debug, Clone)]
pub struct FailingPlugin {
    name: String,
}

impl FailingPlugin {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Plugin for FailingPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 0, 1)
    }

    fn container(&self) -> Container {
        Container::Object
    }

    fn partition_access(&self) -> bool {
        false
    }

    fn open(&self, location: &str, options: OpenOptions) -> Result<DataSource> {
        let (base, _backend) = split_options(options)?;
        let driver = FailingDriver {
            location: location.to_string(),
        };
        Ok(DataSource::new(&self.name, Container::Object, base.metadata, driver))
    }
}

struct FailingDriver {
    location: String,
}

impl SourceDriver for FailingDriver {
    fn load_schema(&mut self) -> Result<Schema> {
        Err(IntakeError::schema(format!("backend for {} is down", self.location)))
    }

    fn read_partition(&mut self, index: usize, _schema: &Schema) -> Result<PartitionData> {
        Err(IntakeError::partition_read(index, "backend is down"))
    }
}
