//! Plugin config resolution with fallback tiers.
//!
//! Implements `ConfigLoader::load()`:
//! 1. Resolve the plugin's candidate paths
//! 2. Decode the first real config that exists (`.toml`, then `.json`)
//! 3. Otherwise copy the first usable example file into place and decode it
//! 4. Otherwise write a freshly generated default and return it
//!
//! Only step 2 can fail the call. Failures in steps 3 and 4 are logged and
//! the loader moves on, so callers always get a usable config.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, warn};

use crate::codec::{self, Provenance};
use crate::error::{ConfigError, ConfigResult};
use crate::format::ConfigFormat;
use crate::layout::{ConfigFile, ConfigLocation, ConfigRoot};

/// System name written into provenance comments unless overridden.
pub const DEFAULT_SYSTEM_NAME: &str = "plugcfg";

/// A configuration shape a plugin can be loaded into.
///
/// Implement it for each plugin's config struct:
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use plugcfg_config::PluginConfig;
///
/// #[derive(Default, Serialize, Deserialize)]
/// struct EconomyConfig {
///     starting_balance: u64,
/// }
///
/// impl PluginConfig for EconomyConfig {}
/// ```
pub trait PluginConfig: Serialize + DeserializeOwned + Default {
    /// Value written out when the plugin has no config file yet.
    #[must_use]
    fn default_config() -> Self {
        Self::default()
    }
}

/// Which fallback tier produced a loaded config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// An existing real config file.
    Existing {
        /// File that was decoded.
        path: PathBuf,
    },
    /// An example file copied into place as the real config.
    CopiedExample {
        /// Example file that was copied.
        example: PathBuf,
        /// Newly created real config.
        path: PathBuf,
    },
    /// A generated default written to disk.
    Generated {
        /// File that was written.
        path: PathBuf,
    },
    /// A default that could not be written; it only exists in memory.
    InMemoryDefault,
}

impl ConfigSource {
    /// The real config file backing this config, if any.
    #[must_use]
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Existing { path }
            | Self::CopiedExample { path, .. }
            | Self::Generated { path } => Some(path),
            Self::InMemoryDefault => None,
        }
    }
}

/// A loaded plugin config together with where it came from.
#[derive(Debug, Clone)]
pub struct ResolvedPluginConfig<T> {
    /// The decoded (or default) configuration.
    pub config: T,
    /// Tier that produced the configuration.
    pub source: ConfigSource,
    /// Paths that were considered.
    pub location: ConfigLocation,
}

impl<T> ResolvedPluginConfig<T> {
    /// Discard the metadata and keep the config.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.config
    }
}

/// Loads plugin configs relative to a fixed [`ConfigRoot`].
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    root: ConfigRoot,
    system_name: String,
    default_format: ConfigFormat,
}

impl ConfigLoader {
    /// Create a loader for `root`.
    #[must_use]
    pub fn new(root: ConfigRoot) -> Self {
        Self {
            root,
            system_name: DEFAULT_SYSTEM_NAME.to_owned(),
            default_format: ConfigFormat::Json,
        }
    }

    /// Set the system name recorded in provenance comments.
    #[must_use]
    pub fn with_system_name(mut self, name: impl Into<String>) -> Self {
        self.system_name = name.into();
        self
    }

    /// Set the format used when generating a default file (JSON by default).
    #[must_use]
    pub fn with_default_format(mut self, format: ConfigFormat) -> Self {
        self.default_format = format;
        self
    }

    /// The root this loader resolves against.
    #[must_use]
    pub fn root(&self) -> &ConfigRoot {
        &self.root
    }

    /// System name recorded in provenance comments.
    #[must_use]
    pub fn system_name(&self) -> &str {
        &self.system_name
    }

    /// Candidate paths for `plugin_name`.
    #[must_use]
    pub fn locate(&self, plugin_name: &str) -> ConfigLocation {
        self.root.locate(plugin_name)
    }

    /// Load the config for `plugin_name`, falling back to an example file
    /// and then to a generated default.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] only if an existing real config file cannot
    /// be read or parsed. That includes [`ConfigError::TooLarge`] for files
    /// over [`codec::MAX_CONFIG_FILE_SIZE`] (1 MiB). Failures while copying
    /// examples or writing the default are logged and absorbed.
    pub fn load<T: PluginConfig>(&self, plugin_name: &str) -> ConfigResult<ResolvedPluginConfig<T>> {
        let location = self.root.locate(plugin_name);

        if let Some((config, path)) = load_existing::<T>(&location)? {
            return Ok(ResolvedPluginConfig {
                config,
                source: ConfigSource::Existing { path },
                location,
            });
        }

        if let Some((config, example, path)) = load_from_example::<T>(&location) {
            return Ok(ResolvedPluginConfig {
                config,
                source: ConfigSource::CopiedExample { example, path },
                location,
            });
        }

        let config = T::default_config();
        let source = match self.write_default(&location, &config) {
            Ok(path) => {
                info!(
                    plugin = plugin_name,
                    path = %path.display(),
                    "generated default configuration"
                );
                ConfigSource::Generated { path }
            },
            Err(e) => {
                error!(
                    plugin = plugin_name,
                    error = %e,
                    "failed to generate configuration"
                );
                ConfigSource::InMemoryDefault
            },
        };

        Ok(ResolvedPluginConfig {
            config,
            source,
            location,
        })
    }

    fn write_default<T: Serialize>(
        &self,
        location: &ConfigLocation,
        config: &T,
    ) -> ConfigResult<PathBuf> {
        let dir = location.dir();
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::WriteError {
            path: dir.display().to_string(),
            source,
        })?;

        let target = location.real_file(self.default_format);
        let provenance = Provenance::now(&self.system_name, location.plugin());
        let output = codec::encode(config, self.default_format, &provenance)?;

        std::fs::write(&target.path, output).map_err(|source| ConfigError::WriteError {
            path: target.path.display().to_string(),
            source,
        })?;
        Ok(target.path.clone())
    }
}

fn load_existing<T: PluginConfig>(location: &ConfigLocation) -> ConfigResult<Option<(T, PathBuf)>> {
    for candidate in location.real_files() {
        if !candidate.exists() {
            debug!(path = %candidate.path.display(), "config file not found, skipping");
            continue;
        }
        let config = codec::decode_file::<T>(&candidate.path)?;
        debug!(
            plugin = location.plugin(),
            path = %candidate.path.display(),
            "loaded plugin config"
        );
        return Ok(Some((config, candidate.path.clone())));
    }
    Ok(None)
}

fn load_from_example<T: PluginConfig>(location: &ConfigLocation) -> Option<(T, PathBuf, PathBuf)> {
    for (example, real) in location.example_pairs() {
        if !example.exists() {
            continue;
        }

        info!(
            plugin = location.plugin(),
            example = %example.path.display(),
            "copying example configuration"
        );
        let copied = copy_example(example, real);
        match copied.and_then(|()| codec::decode_file::<T>(&real.path)) {
            Ok(config) => return Some((config, example.path.clone(), real.path.clone())),
            Err(e) => {
                error!(
                    plugin = location.plugin(),
                    example = %example.path.display(),
                    error = %e,
                    "failed to copy example configuration"
                );
                if !matches!(e, ConfigError::CopyError { .. }) {
                    discard_copy(real);
                }
            },
        }
    }
    None
}

/// Remove a copied example that could not be completed or decoded, so it
/// does not become a broken real config on the next load.
fn discard_copy(real: &ConfigFile) {
    if let Err(e) = std::fs::remove_file(&real.path) {
        warn!(
            path = %real.path.display(),
            error = %e,
            "failed to remove unusable example copy"
        );
    }
}

/// Copy `example` to `real`, refusing to replace an existing file.
fn copy_example(example: &ConfigFile, real: &ConfigFile) -> ConfigResult<()> {
    let copy_err = |source: io::Error| ConfigError::CopyError {
        from: example.path.display().to_string(),
        to: real.path.display().to_string(),
        source,
    };

    let mut src = File::open(&example.path).map_err(copy_err)?;
    let mut dest = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&real.path)
        .map_err(copy_err)?;
    if let Err(source) = io::copy(&mut src, &mut dest) {
        // The destination is ours; do not leave a truncated real config.
        drop(dest);
        discard_copy(real);
        return Err(copy_err(source));
    }
    Ok(())
}
