//! Config root discovery and per-plugin path resolution.
//!
//! Every plugin owns one directory:
//!
//! ```text
//! <root>/configs/plugins/<plugin>/<plugin>.toml
//! <root>/configs/plugins/<plugin>/<plugin>.json
//! <root>/configs/plugins/<plugin>/<plugin>.example.toml
//! <root>/configs/plugins/<plugin>/<plugin>.example.json
//! ```
//!
//! Nothing here touches the filesystem except [`ConfigRoot::from_executable`]
//! and [`ConfigRoot::discover`], which are meant to run once at startup.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{ConfigError, ConfigResult};
use crate::format::ConfigFormat;

/// Environment variable that overrides root discovery.
pub const ROOT_ENV_VAR: &str = "PLUGCFG_ROOT";

/// Suffix appended to the plugin name for bundled example files.
const EXAMPLE_SUFFIX: &str = ".example";

/// Root directory under which all plugin configs live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigRoot {
    path: PathBuf,
}

impl ConfigRoot {
    /// Use an explicit root directory.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Derive the root from the running executable.
    ///
    /// The executable is expected to sit in an install directory one level
    /// below the root, so the root is the parent of that directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoRootDir`] if the executable path cannot be
    /// determined or has no grandparent directory.
    pub fn from_executable() -> ConfigResult<Self> {
        let exe = std::env::current_exe().map_err(|_| ConfigError::NoRootDir)?;
        Self::from_executable_path(&exe)
    }

    fn from_executable_path(exe: &Path) -> ConfigResult<Self> {
        exe.parent()
            .and_then(Path::parent)
            .filter(|p| !p.as_os_str().is_empty())
            .map(Self::new)
            .ok_or(ConfigError::NoRootDir)
    }

    /// Use `PLUGCFG_ROOT` when set, otherwise [`Self::from_executable`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoRootDir`] if neither source yields a root.
    pub fn discover() -> ConfigResult<Self> {
        Self::discover_from(std::env::var(ROOT_ENV_VAR).ok())
    }

    /// [`Self::discover`] with the `PLUGCFG_ROOT` value passed in.
    ///
    /// A missing, empty or whitespace-only value falls back to
    /// [`Self::from_executable`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoRootDir`] if neither source yields a root.
    pub fn discover_from(env_value: Option<String>) -> ConfigResult<Self> {
        match env_value {
            Some(value) if !value.trim().is_empty() => {
                let root = Self::new(value);
                if !root.path.is_dir() {
                    warn!(
                        path = %root.path.display(),
                        "{ROOT_ENV_VAR} does not point at an existing directory"
                    );
                }
                Ok(root)
            },
            _ => Self::from_executable(),
        }
    }

    /// The root directory itself.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `<root>/configs/plugins`.
    #[must_use]
    pub fn plugins_dir(&self) -> PathBuf {
        self.path.join("configs").join("plugins")
    }

    /// Compute every candidate path for `plugin_name`.
    ///
    /// The name is used verbatim as a path segment.
    #[must_use]
    pub fn locate(&self, plugin_name: &str) -> ConfigLocation {
        let dir = self.plugins_dir().join(plugin_name);
        let example_name = format!("{plugin_name}{EXAMPLE_SUFFIX}");

        let real_files = ConfigFormat::PRIORITY.map(|format| ConfigFile {
            format,
            path: dir.join(format!("{plugin_name}.{}", format.extension())),
        });
        let example_files = ConfigFormat::PRIORITY.map(|format| ConfigFile {
            format,
            path: dir.join(format!("{example_name}.{}", format.extension())),
        });

        ConfigLocation {
            plugin: plugin_name.to_owned(),
            dir,
            real_files,
            example_files,
        }
    }
}

/// A candidate config file and the format implied by its extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    /// Format of the file.
    pub format: ConfigFormat,
    /// Full path to the file.
    pub path: PathBuf,
}

impl ConfigFile {
    /// Whether the file currently exists on disk.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

/// Resolved paths for one plugin. Recomputed on every load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    plugin: String,
    dir: PathBuf,
    real_files: [ConfigFile; 2],
    example_files: [ConfigFile; 2],
}

impl ConfigLocation {
    /// Plugin name this location was computed for.
    #[must_use]
    pub fn plugin(&self) -> &str {
        &self.plugin
    }

    /// `<root>/configs/plugins/<plugin>`.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Real config candidates in lookup order.
    #[must_use]
    pub fn real_files(&self) -> &[ConfigFile] {
        &self.real_files
    }

    /// Example candidates in lookup order.
    #[must_use]
    pub fn example_files(&self) -> &[ConfigFile] {
        &self.example_files
    }

    /// Real config path for a given format.
    #[must_use]
    pub fn real_file(&self, format: ConfigFormat) -> &ConfigFile {
        let idx = ConfigFormat::PRIORITY
            .iter()
            .position(|f| *f == format)
            .unwrap_or_default();
        &self.real_files[idx]
    }

    /// Example and real candidates paired by format, in lookup order.
    pub fn example_pairs(&self) -> impl Iterator<Item = (&ConfigFile, &ConfigFile)> {
        self.example_files.iter().zip(self.real_files.iter())
    }

    /// First real config that exists on disk.
    #[must_use]
    pub fn existing_real_file(&self) -> Option<&ConfigFile> {
        self.real_files.iter().find(|f| f.exists())
    }

    /// First example file that exists on disk.
    #[must_use]
    pub fn existing_example_file(&self) -> Option<&ConfigFile> {
        self.example_files.iter().find(|f| f.exists())
    }
}
