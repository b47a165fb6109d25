//! `plugcfg convert` - rewrite a plugin's config in the other format.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use colored::Colorize;
use plugcfg_config::{ConfigFormat, ConfigLocation, ConfigRoot, Provenance, codec};
use tracing::info;

/// Flags for `plugcfg convert`.
pub(crate) struct ConvertOptions {
    pub(crate) to: ConfigFormat,
    pub(crate) force: bool,
    pub(crate) remove_source: bool,
    pub(crate) system_name: String,
}

/// What a conversion did.
#[derive(Debug)]
pub(crate) struct ConvertOutcome {
    pub(crate) source: PathBuf,
    pub(crate) target: PathBuf,
    pub(crate) removed_source: bool,
    /// The source still exists and is looked up before the target.
    pub(crate) source_shadows_target: bool,
}

pub(crate) fn run_convert(root: &ConfigRoot, plugin: &str, options: &ConvertOptions) -> Result<()> {
    let outcome = convert(&root.locate(plugin), options)?;

    println!(
        "{} {} -> {}",
        "Converted".green(),
        outcome.source.display(),
        outcome.target.display()
    );
    if outcome.removed_source {
        println!("  Removed {}", outcome.source.display());
    } else if outcome.source_shadows_target {
        println!(
            "  {}",
            "Note: the source file is still loaded first; pass --remove-source to switch.".yellow()
        );
    }
    Ok(())
}

pub(crate) fn convert(location: &ConfigLocation, options: &ConvertOptions) -> Result<ConvertOutcome> {
    let source = location.existing_real_file().cloned().with_context(|| {
        format!(
            "plugin '{}' has no config file to convert in {}",
            location.plugin(),
            location.dir().display()
        )
    })?;
    let target = location.real_file(options.to).clone();

    if source.format == options.to {
        bail!("{} is already {}", source.path.display(), options.to);
    }
    if target.exists() && !options.force {
        bail!(
            "{} already exists; pass --force to overwrite it",
            target.path.display()
        );
    }

    let document: serde_json::Value = codec::decode_file(&source.path)?;
    let provenance = Provenance::now(options.system_name.clone(), location.plugin());
    let text = codec::encode(&document, options.to, &provenance)?;
    std::fs::write(&target.path, text)
        .with_context(|| format!("failed to write {}", target.path.display()))?;
    info!(
        plugin = location.plugin(),
        from = %source.path.display(),
        to = %target.path.display(),
        "converted plugin config"
    );

    let removed_source = if options.remove_source {
        std::fs::remove_file(&source.path)
            .with_context(|| format!("failed to remove {}", source.path.display()))?;
        true
    } else {
        false
    };

    let rank = |format: ConfigFormat| ConfigFormat::PRIORITY.iter().position(|f| *f == format);
    let source_shadows_target = !removed_source && rank(source.format) < rank(options.to);

    Ok(ConvertOutcome {
        source: source.path,
        target: target.path,
        removed_source,
        source_shadows_target,
    })
}
