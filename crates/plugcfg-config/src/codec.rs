//! Reading and writing plugin configs in either supported format.
//!
//! Generated files start with a single provenance comment line followed
//! directly by the pretty-printed body:
//!
//! ```text
//! // This configuration was automatically generated by plugcfg for plugin 'Economy', at 2024/03/09 02:05:07
//! {
//!   "starting_balance": 500
//! }
//! ```

use std::path::Path;

use chrono::{DateTime, Local};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ConfigError, ConfigResult};
use crate::format::ConfigFormat;

/// Maximum accepted config file size (1 MiB).
pub const MAX_CONFIG_FILE_SIZE: u64 = 1_048_576;

/// `YYYY/MM/DD hh:mm:ss`, 12-hour clock without an AM/PM marker.
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %I:%M:%S";

/// Who generated a config file, for which plugin, and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    /// Name of the generating system.
    pub system: String,
    /// Plugin the file belongs to.
    pub plugin: String,
    /// Local generation time.
    pub generated_at: DateTime<Local>,
}

impl Provenance {
    /// Provenance stamped with the current local time.
    #[must_use]
    pub fn now(system: impl Into<String>, plugin: impl Into<String>) -> Self {
        Self::at(system, plugin, Local::now())
    }

    /// Provenance with an explicit timestamp.
    #[must_use]
    pub fn at(
        system: impl Into<String>,
        plugin: impl Into<String>,
        generated_at: DateTime<Local>,
    ) -> Self {
        Self {
            system: system.into(),
            plugin: plugin.into(),
            generated_at,
        }
    }

    /// The header comment line for `format`, without a trailing newline.
    #[must_use]
    pub fn comment_line(&self, format: ConfigFormat) -> String {
        format!(
            "{} This configuration was automatically generated by {} for plugin '{}', at {}",
            format.comment_token(),
            self.system,
            self.plugin,
            self.generated_at.format(TIMESTAMP_FORMAT),
        )
    }
}

/// Serialize `value` in `format`, prefixed with the provenance comment.
///
/// # Errors
///
/// Returns [`ConfigError::JsonSerialize`] or [`ConfigError::TomlSerialize`]
/// if the value cannot be represented in the target format.
pub fn encode<T>(value: &T, format: ConfigFormat, provenance: &Provenance) -> ConfigResult<String>
where
    T: Serialize + ?Sized,
{
    let body = match format {
        ConfigFormat::Json => {
            serde_json::to_string_pretty(value).map_err(ConfigError::JsonSerialize)?
        },
        ConfigFormat::Toml => toml::to_string_pretty(value)?,
    };

    let mut output = provenance.comment_line(format);
    output.push('\n');
    output.push_str(&body);
    Ok(output)
}

/// Deserialize `text` as `format`.
///
/// `origin` labels the text in error messages, normally the file path.
/// A leading UTF-8 byte order mark is ignored.
///
/// # Errors
///
/// Returns [`ConfigError::TomlParse`] or [`ConfigError::JsonParse`] when the
/// markup is malformed or does not match the shape of `T`.
pub fn decode_str<T: DeserializeOwned>(
    text: &str,
    format: ConfigFormat,
    origin: &str,
) -> ConfigResult<T> {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    match format {
        ConfigFormat::Toml => toml::from_str(text).map_err(|source| ConfigError::TomlParse {
            path: origin.to_owned(),
            source,
        }),
        ConfigFormat::Json => serde_json::from_str(&strip_json_comments(text)).map_err(|source| {
            ConfigError::JsonParse {
                path: origin.to_owned(),
                source,
            }
        }),
    }
}

/// Read and deserialize a config file, choosing the format by extension.
///
/// # Errors
///
/// Returns [`ConfigError::UnsupportedFormat`] for unknown extensions,
/// [`ConfigError::ReadError`] / [`ConfigError::TooLarge`] if the file cannot
/// be read, and a parse error if decoding fails.
pub fn decode_file<T: DeserializeOwned>(path: &Path) -> ConfigResult<T> {
    let format = ConfigFormat::from_path(path)?;
    let content = read_config(path)?;
    decode_str(&content, format, &path.display().to_string())
}

fn read_config(path: &Path) -> ConfigResult<String> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.display().to_string(),
        source,
    })?;

    // Check size after reading to avoid TOCTOU between stat and read.
    let size = u64::try_from(content.len()).unwrap_or(u64::MAX);
    if size > MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::TooLarge {
            path: path.display().to_string(),
            size,
            limit: MAX_CONFIG_FILE_SIZE,
        });
    }

    Ok(content)
}

/// Remove `//` and `/* */` comments that appear outside string literals.
///
/// Newlines inside comments are kept so parse errors still report the
/// original line numbers.
#[must_use]
pub fn strip_json_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_string = false;
    let mut escape_next = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if escape_next {
                escape_next = false;
            } else if c == '\\' {
                escape_next = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            },
            '/' if chars.peek() == Some(&'/') => {
                for next in chars.by_ref() {
                    if next == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            },
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut body = String::new();
                let mut closed = false;
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if prev == '*' && next == '/' {
                        closed = true;
                        break;
                    }
                    body.push(next);
                    prev = next;
                }

                if closed {
                    out.push(' ');
                    out.extend(body.chars().filter(|ch| *ch == '\n'));
                } else {
                    // Unterminated: keep it so the JSON parser rejects it.
                    out.push_str("/*");
                    out.push_str(&body);
                }
            },
            _ => out.push(c),
        }
    }

    out
}
