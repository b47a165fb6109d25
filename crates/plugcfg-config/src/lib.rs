#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Per-plugin configuration files for a plugin host.
//!
//! Each plugin gets its own directory under `<root>/configs/plugins/` and
//! one config file in either TOML or JSON. [`ConfigLoader`] finds that file,
//! decodes it into the plugin's config type, and when nothing exists yet
//! seeds it from a bundled example or writes out a default.
//!
//! # Usage
//!
//! ```rust,no_run
//! use plugcfg_config::{ConfigLoader, ConfigRoot, PluginConfig};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Default, Serialize, Deserialize)]
//! struct EconomyConfig {
//!     starting_balance: u64,
//! }
//!
//! impl PluginConfig for EconomyConfig {}
//!
//! let loader = ConfigLoader::new(ConfigRoot::discover().unwrap());
//! let economy: EconomyConfig = loader.load("Economy").unwrap().into_inner();
//! println!("starting balance: {}", economy.starting_balance);
//! ```
//!
//! # Lookup order
//!
//! 1. `<plugin>.toml`, then `<plugin>.json` (a malformed file here is an error)
//! 2. `<plugin>.example.toml`, then `<plugin>.example.json`, copied into place
//! 3. A default value, written to `<plugin>.json`
//!
//! # Design
//!
//! The root directory is an explicit [`ConfigRoot`] value computed once at
//! startup rather than process-global state. This crate only depends on
//! `serde`, `serde_json`, `toml`, `chrono`, `thiserror`, and `tracing`.

/// Encoding, decoding and provenance headers.
pub mod codec;
/// Configuration error types.
pub mod error;
/// Supported file formats.
pub mod format;
/// Root discovery and per-plugin path resolution.
pub mod layout;
/// The fallback loading pipeline.
pub mod loader;

// Re-export primary types at the crate root.
pub use codec::Provenance;
pub use error::{ConfigError, ConfigResult};
pub use format::ConfigFormat;
pub use layout::{ConfigFile, ConfigLocation, ConfigRoot};
pub use loader::{ConfigLoader, ConfigSource, PluginConfig, ResolvedPluginConfig};

/// Load `plugin_name` from `root` with default loader settings.
///
/// See [`ConfigLoader::load`] for the full algorithm.
///
/// # Errors
///
/// Returns a [`ConfigError`] if an existing real config file is malformed
/// or unreadable.
pub fn load<T: PluginConfig>(root: &ConfigRoot, plugin_name: &str) -> ConfigResult<T> {
    ConfigLoader::new(root.clone())
        .load(plugin_name)
        .map(ResolvedPluginConfig::into_inner)
}
