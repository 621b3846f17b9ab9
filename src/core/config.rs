//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars.
//!
//! Config lives at `~/.addytui/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::gateway::DEFAULT_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AddyConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub token: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Color name (`"green"`) or hex (`"#00ff00"`) for enabled aliases.
    pub active_color: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "addytui.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const DEFAULT_ACTIVE_COLOR: &str = "#00ff00";

pub const TOKEN_ENV: &str = "ADDYTUI_TOKEN";
pub const BASE_URL_ENV: &str = "ADDYTUI_BASE_URL";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Empty when unset; the service then rejects every call.
    pub token: String,
    pub base_url: String,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub active_color: String,
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

/// Returns the path to `~/.addytui/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".addytui").join("config.toml"))
}

/// Load config from `~/.addytui/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `AddyConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<AddyConfig, ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine home directory, using default config");
        return Ok(AddyConfig::default());
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<AddyConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(AddyConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: AddyConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    // Keep the token out of the log.
    debug!(
        "Config: base_url={:?} theme={:?} general={:?}",
        config.api.base_url, config.theme, config.general
    );
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r##"# addytui Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars.

# [general]
# log_level = "debug"               # "off", "error", "warn", "info", "debug", "trace"
# log_file = "addytui.log"          # Relative to the working directory

# [api]
# token = "..."                     # Or set ADDYTUI_TOKEN env var
# base_url = "https://app.addy.io"  # Or set ADDYTUI_BASE_URL env var

# [theme]
# active_color = "#00ff00"          # Color name or hex for enabled aliases
"##;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars.
pub fn resolve(config: &AddyConfig) -> ResolvedConfig {
    // Token: env → config → empty
    let token = std::env::var(TOKEN_ENV)
        .ok()
        .or_else(|| config.api.token.clone())
        .unwrap_or_default();

    // Base URL: env → config → default
    let base_url = std::env::var(BASE_URL_ENV)
        .ok()
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let log_level = match config.general.log_level.as_deref() {
        Some(level) => LevelFilter::from_str(level).unwrap_or_else(|_| {
            warn!("Unknown log level {:?}, using {}", level, DEFAULT_LOG_LEVEL);
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    ResolvedConfig {
        token,
        base_url,
        log_level,
        log_file: PathBuf::from(
            config
                .general
                .log_file
                .as_deref()
                .unwrap_or(DEFAULT_LOG_FILE),
        ),
        active_color: config
            .theme
            .active_color
            .clone()
            .unwrap_or_else(|| DEFAULT_ACTIVE_COLOR.to_string()),
    }
}
