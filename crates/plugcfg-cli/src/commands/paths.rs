//! `plugcfg paths` - show where a plugin's config is looked up.

use std::fmt::Write as _;

use colored::Colorize;
use plugcfg_config::{ConfigFile, ConfigLocation, ConfigRoot};

/// Print every candidate path for `plugin` in lookup order.
pub(crate) fn run_paths(root: &ConfigRoot, plugin: &str) {
    print!("{}", render_paths(&root.locate(plugin)));
}

pub(crate) fn render_paths(location: &ConfigLocation) -> String {
    let selected = location
        .existing_real_file()
        .or_else(|| location.existing_example_file());

    let mut out = String::new();
    let _ = writeln!(out, "{}", format!("Plugin: {}", location.plugin()).cyan().bold());

    let dir_state = if location.dir().is_dir() {
        "exists".green()
    } else {
        "missing".dimmed()
    };
    let _ = writeln!(out, "  Directory: {} ({dir_state})", location.dir().display());

    let _ = writeln!(out, "\n{}", "Config files (lookup order):".cyan());
    for file in location.real_files() {
        let _ = writeln!(out, "{}", describe(file, selected));
    }

    let _ = writeln!(out, "\n{}", "Example files (lookup order):".cyan());
    for file in location.example_files() {
        let _ = writeln!(out, "{}", describe(file, selected));
    }

    if selected.is_none() {
        let _ = writeln!(
            out,
            "\n  No config file yet; a default will be generated on first load."
        );
    }

    out
}

fn describe(file: &ConfigFile, selected: Option<&ConfigFile>) -> String {
    let state = if selected == Some(file) {
        "selected".green().bold()
    } else if file.exists() {
        "exists".yellow()
    } else {
        "missing".dimmed()
    };
    format!("  [{state}] {}", file.path.display())
}
