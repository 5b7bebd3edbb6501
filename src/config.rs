use anyhow::Context;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// What happens to input focus when the draft is submitted with Enter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitBehavior {
    /// The input stays focused (keyboard/pointer targets)
    #[default]
    KeepFocus,
    /// The input blurs on submit, like an on-screen keyboard's action key.
    /// A successful add still refocuses it after the next paint.
    Blur,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub placeholder: String,
    pub submit_behavior: SubmitBehavior,
    /// Event polling timeout in milliseconds
    pub tick_rate_ms: u64,
    /// Log filter used when RUST_LOG is not set
    pub log_level: String,
    /// Show each entry's creation time next to it
    pub show_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Names".to_string(),
            placeholder: "New name...".to_string(),
            submit_behavior: SubmitBehavior::default(),
            tick_rate_ms: 100,
            log_level: "info".to_string(),
            show_timestamps: true,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".name-list-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn log_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("name-list.log"))
    }

    /// Load the config file, falling back to defaults when there is none
    pub fn load() -> anyhow::Result<Config> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Config> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_json(&contents)
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_json(contents: &str) -> anyhow::Result<Config> {
        Ok(serde_json::from_str(contents)?)
    }
}
