//! plugcfg CLI - inspect and convert per-plugin configuration files.
//!
//! Operates on the same `<root>/configs/plugins/<plugin>/` layout the host
//! loads from. The root comes from `--root`, `PLUGCFG_ROOT`, or the location
//! of the installed executable, in that order.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use plugcfg_config::{ConfigFormat, ConfigRoot};
use plugcfg_telemetry::{LogConfig, LogFormat};

mod commands;

use commands::{convert, paths, show};

/// plugcfg - per-plugin configuration files
#[derive(Parser)]
#[command(name = "plugcfg")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format: pretty, compact (default), json or full
    #[arg(long, global = true, default_value = "compact")]
    log_format: LogFormat,

    /// Config root directory (parent of `configs/`)
    #[arg(long, global = true, env = plugcfg_config::layout::ROOT_ENV_VAR)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the candidate config paths for a plugin
    Paths {
        /// Plugin name
        plugin: String,
    },

    /// Print the config file a plugin would load
    Show {
        /// Plugin name
        plugin: String,

        /// Print as json or toml instead of the file's own format
        #[arg(long = "as")]
        as_format: Option<ConfigFormat>,
    },

    /// Rewrite a plugin's config file in another format
    Convert {
        /// Plugin name
        plugin: String,

        /// Target format: json or toml
        #[arg(long)]
        to: ConfigFormat,

        /// Overwrite an existing target file
        #[arg(long)]
        force: bool,

        /// Delete the source file after converting
        #[arg(long)]
        remove_source: bool,

        /// System name recorded in the provenance comment
        #[arg(long, default_value = plugcfg_config::loader::DEFAULT_SYSTEM_NAME)]
        system_name: String,
    },
}

/// Warnings only, unless `--verbose` turns on debug output for plugcfg itself.
fn log_config(cli: &Cli) -> LogConfig {
    let config = LogConfig::new("warn")
        .with_format(cli.log_format)
        .with_ansi(std::io::stderr().is_terminal());
    if cli.verbose {
        config
            .with_directive("plugcfg=debug")
            .with_directive("plugcfg_config=debug")
    } else {
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = plugcfg_telemetry::setup_logging(&log_config(&cli)) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let root = match cli.root {
        Some(path) => ConfigRoot::new(path),
        None => ConfigRoot::discover().context("could not determine the config root; pass --root")?,
    };
    tracing::debug!(root = %root.path().display(), "using config root");

    match cli.command {
        Commands::Paths { plugin } => paths::run_paths(&root, &plugin),
        Commands::Show { plugin, as_format } => show::run_show(&root, &plugin, as_format)?,
        Commands::Convert {
            plugin,
            to,
            force,
            remove_source,
            system_name,
        } => convert::run_convert(
            &root,
            &plugin,
            &convert::ConvertOptions {
                to,
                force,
                remove_source,
                system_name,
            },
        )?,
    }

    Ok(())
}
