//! `plugcfg show` - print the config file a plugin would load.

use anyhow::{Context, Result};
use colored::Colorize;
use plugcfg_config::{ConfigFile, ConfigFormat, ConfigLocation, ConfigRoot, codec};

/// Print the winning real config (or example) for `plugin`. Never writes.
pub(crate) fn run_show(root: &ConfigRoot, plugin: &str, as_format: Option<ConfigFormat>) -> Result<()> {
    let (file, text) = render_show(&root.locate(plugin), as_format)?;
    eprintln!("{} {}", "Source:".cyan(), file.path.display());
    print!("{text}");
    Ok(())
}

pub(crate) fn render_show(
    location: &ConfigLocation,
    as_format: Option<ConfigFormat>,
) -> Result<(ConfigFile, String)> {
    let file = location
        .existing_real_file()
        .or_else(|| location.existing_example_file())
        .cloned()
        .with_context(|| {
            format!(
                "no config or example file found for plugin '{}' in {}",
                location.plugin(),
                location.dir().display()
            )
        })?;

    let document: serde_json::Value = codec::decode_file(&file.path)?;
    let text = render_document(&document, as_format.unwrap_or(file.format))?;
    Ok((file, text))
}

/// Pretty-print a generic document without a provenance line.
pub(crate) fn render_document(document: &serde_json::Value, format: ConfigFormat) -> Result<String> {
    let mut text = match format {
        ConfigFormat::Json => serde_json::to_string_pretty(document)?,
        ConfigFormat::Toml => toml::to_string_pretty(document)
            .context("document cannot be represented as TOML")?,
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}
