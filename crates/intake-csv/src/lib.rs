// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! CSV driver plugin.
//!
//! Exposes the `intake_csv` extension module, which defines one plugin,
//! `csv`, producing partitioned dataframe sources from local CSV files.
//!
//! Backend options: `delimiter`, `has_header`, `blocksize`, `infer_rows`,
//! `columns`. See [`CsvOptions`].

pub mod blocks;
pub mod infer;
pub mod options;
pub mod plugin;
pub mod source;

use intake_plugin::{ExtensionModule, PluginDeclaration};

pub use options::CsvOptions;
pub use plugin::{CsvPlugin, PLUGIN_NAME};
pub use source::CsvDriver;

/// Extension module identifier scanned by discovery.
pub const MODULE_NAME: &str = "intake_csv";

/// The extension module to link into a host's search path.
pub fn extension() -> ExtensionModule {
    ExtensionModule::with_declarations(
        MODULE_NAME,
        vec![PluginDeclaration::of::<CsvPlugin>(MODULE_NAME)],
    )
}
