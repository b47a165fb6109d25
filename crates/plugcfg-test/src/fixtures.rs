//! Sample plugin config shapes and matching file contents.

use plugcfg_config::PluginConfig;
use serde::{Deserialize, Serialize};

/// Config for a sample "Economy" plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconomyConfig {
    /// Currency display name.
    pub currency: String,
    /// Balance given to new players.
    pub starting_balance: u64,
    /// Whether balances may go negative.
    pub allow_debt: bool,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            currency: "credits".to_string(),
            starting_balance: 800,
            allow_debt: false,
        }
    }
}

impl PluginConfig for EconomyConfig {}

/// Config for a sample "Welcome" plugin with a nested table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeConfig {
    /// Message shown on join.
    pub message: String,
    /// Seconds to wait before showing the message.
    pub delay_secs: u32,
    /// Per-map overrides.
    pub maps: Vec<String>,
    /// Message colors.
    pub colors: WelcomeColors,
}

/// Nested color section of [`WelcomeConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeColors {
    /// Title color.
    pub title: String,
    /// Body color.
    pub body: String,
}

impl Default for WelcomeConfig {
    fn default() -> Self {
        Self {
            message: "Welcome to the server!".to_string(),
            delay_secs: 3,
            maps: vec!["de_dust2".to_string(), "de_inferno".to_string()],
            colors: WelcomeColors {
                title: "green".to_string(),
                body: "white".to_string(),
            },
        }
    }
}

impl PluginConfig for WelcomeConfig {}

/// A config whose default uses [`PluginConfig::default_config`] rather than
/// `Default`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeededConfig {
    /// Seed value.
    pub seed: u32,
}

impl PluginConfig for SeededConfig {
    fn default_config() -> Self {
        Self { seed: 42 }
    }
}

/// JSON text for an [`EconomyConfig`] with the given currency.
#[must_use]
pub fn economy_json(currency: &str) -> String {
    format!(
        "// Economy settings\n{{\n  \"currency\": \"{currency}\",\n  \"starting_balance\": 100,\n  \"allow_debt\": true\n}}\n"
    )
}

/// TOML text for an [`EconomyConfig`] with the given currency.
#[must_use]
pub fn economy_toml(currency: &str) -> String {
    format!(
        "# Economy settings\ncurrency = \"{currency}\"\nstarting_balance = 100\nallow_debt = true\n"
    )
}
