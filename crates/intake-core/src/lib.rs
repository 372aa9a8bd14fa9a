// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Intake data catalog.
//!
//! This crate defines what every backend plugs into: the [`Plugin`] factory
//! trait, the [`SourceDriver`] backend trait, the [`DataSource`] lifecycle
//! wrapper with its compute-once [`Schema`], partition content types, option
//! splitting, and the shared [`IntakeError`].

pub mod error;
pub mod options;
pub mod partition;
pub mod schema;
pub mod source;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{IntakeError, Result};
pub use options::{BackendOptions, BaseOptions, OpenOptions, split_options};
pub use partition::{Frame, PartitionData};
pub use schema::Schema;
pub use source::DataSource;
pub use traits::{Plugin, SourceDriver};
pub use types::{Container, Metadata, SourceState};
