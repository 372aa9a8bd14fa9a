// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Intake integration tests.
//!
//! Provides deterministic plugins and on-disk fixtures so registry, source,
//! and catalog behaviour can be tested without real backends.
//!
//! # Components
//!
//! - [`CountingPlugin`] - plugin whose sources count every backend call
//! - [`FailingPlugin`] - plugin whose sources always fail schema computation
//! - [`Fixtures`] - temp directory holding CSV and catalog files

pub mod fixtures;
pub mod plugins;

pub use fixtures::Fixtures;
pub use plugins::{CountingPlugin, FailingPlugin, SourceProbe};
