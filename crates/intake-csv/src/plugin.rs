// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `csv` plugin.

use intake_core::{Container, DataSource, OpenOptions, Plugin, Result, split_options};

use crate::options::CsvOptions;
use crate::source::CsvDriver;

/// Registry name of the CSV plugin.
pub const PLUGIN_NAME: &str = "csv";

/// Opens CSV files (or glob patterns of them) as dataframe sources.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvPlugin;

impl Plugin for CsvPlugin {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn container(&self) -> Container {
        Container::Dataframe
    }

    fn partition_access(&self) -> bool {
        true
    }

    fn open(&self, location: &str, options: OpenOptions) -> Result<DataSource> {
        let (base, backend) = split_options(options)?;
        let csv_options: CsvOptions = backend.parse(PLUGIN_NAME)?;
        let delimiter = csv_options.validate()?;
        let driver = CsvDriver::new(location, csv_options, delimiter, base.storage_options);
        Ok(DataSource::new(
            PLUGIN_NAME,
            Container::Dataframe,
            base.metadata,
            driver,
        ))
    }
}
