//! Test harness helpers.

use std::path::{Path, PathBuf};

use plugcfg_config::{ConfigFormat, ConfigLoader, ConfigLocation, ConfigRoot};
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

/// Set up test logging with the given filter.
///
/// Installs a global subscriber that writes through the test harness, so
/// output only shows for failing tests. Later calls are no-ops.
///
/// # Example
///
/// ```rust,ignore
/// use plugcfg_test::setup_test_logging;
///
/// #[test]
/// fn converts_economy() {
///     setup_test_logging("plugcfg_config=debug");
///     // ... test code
/// }
/// ```
pub fn setup_test_logging(filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_test_writer()
        .try_init();
}

/// A temporary config root, removed when dropped.
#[derive(Debug)]
pub struct TestRoot {
    /// Backing temporary directory.
    pub dir: TempDir,
}

impl TestRoot {
    /// Create an empty root.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::with_prefix("plugcfg-").expect("Failed to create temp directory"),
        }
    }

    /// Path of the root directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The root as a [`ConfigRoot`].
    #[must_use]
    pub fn root(&self) -> ConfigRoot {
        ConfigRoot::new(self.dir.path())
    }

    /// A loader with default settings for this root.
    #[must_use]
    pub fn loader(&self) -> ConfigLoader {
        ConfigLoader::new(self.root())
    }

    /// Candidate paths for `plugin`.
    #[must_use]
    pub fn location(&self, plugin: &str) -> ConfigLocation {
        self.root().locate(plugin)
    }

    /// Real config path for `plugin` in `format`.
    #[must_use]
    pub fn real_path(&self, plugin: &str, format: ConfigFormat) -> PathBuf {
        self.location(plugin).real_file(format).path.clone()
    }

    /// Write the real config file for `plugin`.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_real(&self, plugin: &str, format: ConfigFormat, content: &str) -> PathBuf {
        let path = self.real_path(plugin, format);
        write_file(&path, content);
        path
    }

    /// Write the example file for `plugin`.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_example(&self, plugin: &str, format: ConfigFormat, content: &str) -> PathBuf {
        let path = self
            .location(plugin)
            .example_files()
            .iter()
            .find(|f| f.format == format)
            .map(|f| f.path.clone())
            .expect("every format has an example candidate");
        write_file(&path, content);
        path
    }

    /// Write an arbitrary file inside the plugin's directory.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_plugin_file(&self, plugin: &str, file_name: &str, content: &str) -> PathBuf {
        let path = self.location(plugin).dir().join(file_name);
        write_file(&path, content);
        path
    }

    /// Read the real config file for `plugin`, if present.
    #[must_use]
    pub fn read_real(&self, plugin: &str, format: ConfigFormat) -> Option<String> {
        std::fs::read_to_string(self.real_path(plugin, format)).ok()
    }
}

impl Default for TestRoot {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}
