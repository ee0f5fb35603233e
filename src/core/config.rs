//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.backstack/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::StackOrder;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BackstackConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_destination: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub stack_order: Option<StackOrder>,
    pub show_count: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_START_DESTINATION: &str = crate::core::route::ROUTE_A;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_destination: String,
    pub stack_order: StackOrder,
    pub show_count: bool,
    pub log_level: LevelFilter,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with(&BackstackConfig::default(), &CliOverrides::default(), |_| None)
    }
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub start: Option<String>,
    pub stack_order: Option<StackOrder>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

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
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(BackstackConfig::default())
        }
    }
}

/// Load config from an explicit path, generating a default file if missing.
pub fn load_config_from(path: &Path) -> Result<BackstackConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(BackstackConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: BackstackConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Backstack Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_destination = "A"            # "A", "B" or "C" (or BACKSTACK_START)
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"

# [display]
# stack_order = "top-first"          # "top-first" or "bottom-first" (or BACKSTACK_STACK_ORDER)
# show_count = true                  # show the "Backstack count" header
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &BackstackConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading env vars through `env`.
pub fn resolve_with(
    config: &BackstackConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Start destination: CLI → env → config → default
    let start_destination = cli
        .start
        .clone()
        .or_else(|| env("BACKSTACK_START"))
        .or_else(|| config.general.start_destination.clone())
        .unwrap_or_else(|| DEFAULT_START_DESTINATION.to_string());

    // Stack order: CLI → env → config → default. Bad env values are skipped.
    let stack_order = cli
        .stack_order
        .or_else(|| {
            env("BACKSTACK_STACK_ORDER").and_then(|raw| match raw.parse() {
                Ok(order) => Some(order),
                Err(e) => {
                    warn!("Ignoring BACKSTACK_STACK_ORDER: {}", e);
                    None
                }
            })
        })
        .or(config.display.stack_order)
        .unwrap_or_default();

    let log_level = match config.general.log_level.as_deref() {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("Unknown log_level {:?}, using {}", raw, DEFAULT_LOG_LEVEL);
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    ResolvedConfig {
        start_destination,
        stack_order,
        show_count: config.display.show_count.unwrap_or(true),
        log_level,
    }
}
