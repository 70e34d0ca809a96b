//! Configuration parsing for the deckcode runner.
//!
//! Settings come from an optional JSON file. Every field is optional; command
//! line flags override whatever the file sets.
//!
//! # Example config
//!
//! ```json
//! {
//!   "DeckCode": { "module_name": "deckcode", "log_path": "/tmp/log", "log_level": "info" },
//!   "output": { "pretty": true, "include_names": false }
//! }
//! ```

use serde::Deserialize;

/// Default module name, also used as the log file prefix.
pub const DEFAULT_MODULE_NAME: &str = "deckcode";
/// Default tracing filter when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Top-level application config, deserialized from a JSON file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Module metadata (name, log path, level).
    #[serde(rename = "DeckCode", default)]
    pub deck_code: Option<ModuleMeta>,

    /// JSON output options.
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

/// Module metadata block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModuleMeta {
    pub module_name: Option<String>,
    pub log_path: Option<String>,
    pub log_level: Option<String>,
}

/// Controls how the runner renders its JSON responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON (default: compact).
    pub pretty: Option<bool>,
    /// Annotate encoded decks with card names.
    pub include_names: Option<bool>,
}

impl AppConfig {
    /// Returns the module name, defaulting to [`DEFAULT_MODULE_NAME`].
    pub fn module_name(&self) -> String {
        self.deck_code
            .as_ref()
            .and_then(|m| m.module_name.clone())
            .unwrap_or_else(|| DEFAULT_MODULE_NAME.to_string())
    }

    /// Returns the log directory, if file logging is configured.
    pub fn log_path(&self) -> Option<String> {
        self.deck_code.as_ref().and_then(|m| m.log_path.clone())
    }

    /// Returns the configured log level, defaulting to [`DEFAULT_LOG_LEVEL`].
    pub fn log_level(&self) -> String {
        self.deck_code
            .as_ref()
            .and_then(|m| m.log_level.clone())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
    }

    pub fn pretty(&self) -> bool {
        self.output.as_ref().and_then(|o| o.pretty).unwrap_or(false)
    }

    pub fn include_names(&self) -> bool {
        self.output.as_ref().and_then(|o| o.include_names).unwrap_or(false)
    }
}

/// Parse a JSON config document.
pub fn parse_config(content: &str) -> anyhow::Result<AppConfig> {
    let config: AppConfig = serde_json::from_str(content)?;
    Ok(config)
}

/// Load and parse a JSON config file.
pub fn load_config(path: &std::path::Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}
