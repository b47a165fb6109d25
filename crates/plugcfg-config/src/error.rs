use std::io;
use thiserror::Error;

/// Configuration error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file extension is neither `.toml` nor `.json`.
    #[error("Unsupported configuration file format: {path}")]
    UnsupportedFormat {
        /// Path whose extension was not recognized.
        path: String,
    },

    /// Failed to read a configuration file.
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// Path to the config file that could not be read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A configuration file exceeds the size limit.
    #[error("Config file at {path} is {size} bytes, exceeding the {limit} byte limit")]
    TooLarge {
        /// Path to the oversized file.
        path: String,
        /// Actual file size in bytes.
        size: u64,
        /// Maximum accepted size in bytes.
        limit: u64,
    },

    /// Failed to parse TOML configuration.
    #[error("Failed to parse config file at {path}: {source}")]
    TomlParse {
        /// Path to the config file that failed to parse.
        path: String,
        /// Underlying TOML parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to parse JSON configuration.
    #[error("Failed to parse config file at {path}: {source}")]
    JsonParse {
        /// Path to the config file that failed to parse.
        path: String,
        /// Underlying JSON parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to serialize a value as TOML.
    #[error("Failed to serialize config as TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Failed to serialize a value as JSON.
    #[error("Failed to serialize config as JSON: {0}")]
    JsonSerialize(#[source] serde_json::Error),

    /// Failed to copy an example file into place.
    #[error("Failed to copy {from} to {to}: {source}")]
    CopyError {
        /// Example file being copied.
        from: String,
        /// Destination real config path.
        to: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to create a directory or write a generated file.
    #[error("Failed to write config at {path}: {source}")]
    WriteError {
        /// Path that could not be created or written.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Could not determine the configuration root directory.
    #[error("Could not determine configuration root directory")]
    NoRootDir,
}

impl ConfigError {
    /// Whether this error came from parsing the contents of a file.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::TomlParse { .. } | Self::JsonParse { .. })
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
