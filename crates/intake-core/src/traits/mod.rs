// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Extension traits implemented by backends.
//!
//! A backend provides a [`Plugin`] (the factory registered under a driver
//! name) and a [`SourceDriver`] (the per-source backend wrapped by
//! [`DataSource`](crate::DataSource)).

pub mod driver;
pub mod plugin;

pub use driver::SourceDriver;
pub use plugin::Plugin;
