//! Supported configuration file formats.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{ConfigError, ConfigResult};

/// Textual format of a plugin configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    /// JSON, with `//` and `/* */` comments tolerated on read.
    Json,
    /// TOML.
    Toml,
}

impl ConfigFormat {
    /// Lookup order for candidate files. TOML is always tried first.
    pub const PRIORITY: [Self; 2] = [Self::Toml, Self::Json];

    /// File extension without the leading dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }

    /// Token that starts a single-line comment.
    #[must_use]
    pub fn comment_token(self) -> &'static str {
        match self {
            Self::Json => "//",
            Self::Toml => "#",
        }
    }

    /// Resolve the format from an extension such as `"toml"`.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Resolve the format of a file from its extension.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] for any extension other
    /// than `.toml` or `.json`, including a missing one.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| ConfigError::UnsupportedFormat {
                path: path.display().to_string(),
            })
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ConfigFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(&s.to_ascii_lowercase())
            .ok_or_else(|| format!("unknown config format '{s}' (expected 'json' or 'toml')"))
    }
}
