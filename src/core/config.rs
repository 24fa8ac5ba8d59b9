//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.backstack/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BackstackConfig {
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NavigationConfig {
    /// Transition gate window, in milliseconds.
    pub transition_lock_ms: Option<u64>,
    /// Back double-press window, in milliseconds.
    pub double_press_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub animations: Option<bool>,
    /// "home", "library" or "settings".
    pub start_screen: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TRANSITION_LOCK_MS: u64 = 400;
pub const DEFAULT_DOUBLE_PRESS_MS: u64 = 1000;
pub const DEFAULT_START_SCREEN: &str = "home";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub lock_window: Duration,
    pub double_press_window: Duration,
    pub animations: bool,
    pub start_screen: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.backstack/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".backstack").join("config.toml"))
}

/// Load config from `~/.backstack/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `BackstackConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<BackstackConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(BackstackConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(BackstackConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: BackstackConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Backstack Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [navigation]
# transition_lock_ms = 400    # Guarded pushes are dropped within this window
# double_press_ms = 1000      # Back presses this close together count as a double press

# [ui]
# animations = true           # Or set BACKSTACK_ANIMATIONS=false
# start_screen = "home"       # "home", "library" or "settings"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars
/// → CLI.
///
/// `cli_start` and `cli_animations` come from CLI flags (None = not
/// specified).
pub fn resolve(
    config: &BackstackConfig,
    cli_start: Option<&str>,
    cli_animations: Option<bool>,
) -> ResolvedConfig {
    // Lock window: env → config → default
    let lock_ms = env_u64("BACKSTACK_LOCK_MS")
        .or(config.navigation.transition_lock_ms)
        .unwrap_or(DEFAULT_TRANSITION_LOCK_MS);

    // Double-press window: env → config → default
    let double_press_ms = env_u64("BACKSTACK_DOUBLE_PRESS_MS")
        .or(config.navigation.double_press_ms)
        .unwrap_or(DEFAULT_DOUBLE_PRESS_MS);

    // Animations: CLI → env → config → default
    let animations = cli_animations
        .or_else(|| env_bool("BACKSTACK_ANIMATIONS"))
        .or(config.ui.animations)
        .unwrap_or(true);

    // Start screen: CLI → env → config → default
    let start_screen = cli_start
        .map(|s| s.to_string())
        .or_else(|| std::env::var("BACKSTACK_START").ok())
        .or_else(|| config.ui.start_screen.clone())
        .unwrap_or_else(|| DEFAULT_START_SCREEN.to_string());

    ResolvedConfig {
        lock_window: Duration::from_millis(lock_ms),
        double_press_window: Duration::from_millis(double_press_ms),
        animations,
        start_screen,
    }
}

fn env_u64(name: &str) -> Option<u64> {
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {name}={raw}: not a number");
            None
        }
    }
}

fn env_bool(name: &str) -> Option<bool> {
    let raw = std::env::var(name).ok()?;
    match raw.as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => {
            warn!("Ignoring {name}={raw}: not a boolean");
            None
        }
    }
}
