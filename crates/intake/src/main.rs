// SPDX-FileCopyrightText: 2026 Intake Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Intake - command-line client for data catalogs.

mod commands;
mod extensions;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{CommandFactory, Parser, Subcommand};
use intake_config::IntakeConfig;
use intake_core::Result;
use intake_plugin::PluginRegistry;

/// Intake catalog CLI.
#[derive(Parser, Debug)]
#[command(name = "intake", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the entries of a catalog.
    List {
        /// Catalog URI.
        uri: String,
        /// Print every attribute of every entry.
        #[arg(long)]
        full: bool,
    },
    /// Describe a catalog entry.
    Describe {
        /// Catalog URI.
        uri: String,
        /// Entry name.
        name: String,
    },
    /// Check whether a catalog entry exists.
    Exists {
        /// Catalog URI.
        uri: String,
        /// Entry name.
        name: String,
    },
    /// Read a catalog entry and print its data.
    Get {
        /// Catalog URI.
        uri: String,
        /// Entry name.
        name: String,
    },
    /// Print the schema of a catalog entry.
    Discover {
        /// Catalog URI.
        uri: String,
        /// Entry name.
        name: String,
    },
    /// List discovered plugins.
    Plugins {
        /// Only show plugins whose name or module contains this text.
        query: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        eprintln!("{}", Cli::command().render_usage());
        return ExitCode::FAILURE;
    };

    let loaded = match &cli.config {
        Some(path) => intake_config::load_and_validate_path(path),
        None => intake_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            eprint!("{}", intake_config::render_errors(&errors));
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging.level);

    let registry = Arc::new(PluginRegistry::discover(
        &extensions::search_path(&config.discovery),
        &config.discovery.prefix,
    ));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match run(command, registry, &config, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("intake: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    command: Commands,
    registry: Arc<PluginRegistry>,
    config: &IntakeConfig,
    out: &mut impl std::io::Write,
) -> Result<()> {
    let open = |uri: &str| commands::open_catalog(uri, Arc::clone(&registry), &config.catalog);

    match command {
        Commands::List { uri, full } => commands::list(&open(&uri)?, full, out),
        Commands::Describe { uri, name } => commands::describe(&open(&uri)?, &name, out),
        Commands::Exists { uri, name } => commands::exists(&open(&uri)?, &name, out),
        Commands::Get { uri, name } => commands::get(&open(&uri)?, &name, out),
        Commands::Discover { uri, name } => commands::discover(&open(&uri)?, &name, out),
        Commands::Plugins { query } => commands::plugins(&registry, query.as_deref(), out),
    }
}

/// Crates whose events follow `logging.level`.
const LOG_TARGETS: &[&str] = &[
    "intake",
    "intake_core",
    "intake_plugin",
    "intake_catalog",
    "intake_config",
    "intake_csv",
];

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn default_directives(log_level: &str) -> String {
    let level = log_level.to_ascii_lowercase();
    let mut directives: Vec<String> = LOG_TARGETS.iter().map(|t| format!("{t}={level}")).collect();
    directives.push("warn".to_string());
    directives.join(",")
}
