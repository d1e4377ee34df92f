//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.holocron/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::{Category, CategoryError};
use crate::catalog::swapi::DEFAULT_BASE_URL;
use crate::core::state::Theme;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HolocronConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_category: Option<String>,
    pub theme: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Values from the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub category: Option<String>,
    pub theme: Option<String>,
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub category: Category,
    pub theme: Theme,
    pub base_url: String,
    pub timeout: Duration,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    InvalidCategory(CategoryError),
    InvalidTheme(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::InvalidCategory(e) => write!(f, "config error: {e}"),
            ConfigError::InvalidTheme(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.holocron/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".holocron").join("config.toml"))
}

/// Load config from `~/.holocron/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `HolocronConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<HolocronConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(HolocronConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(HolocronConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<HolocronConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: HolocronConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Holocron Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_category = "people"        # "people", "planets" or "starships"
# theme = "light"                    # "light" or "dark"

# [api]
# base_url = "https://swapi.dev/api" # Or set HOLOCRON_BASE_URL env var
# timeout_secs = 15
"#;

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

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// Category and theme names are parsed strictly; an unknown value is an error,
/// never a silent fallback.
pub fn resolve(config: &HolocronConfig, cli: &CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    // Category: CLI → env → config → default
    let category = cli
        .category
        .clone()
        .or_else(|| std::env::var("HOLOCRON_CATEGORY").ok())
        .or_else(|| config.general.default_category.clone())
        .map(|name| name.parse::<Category>())
        .transpose()
        .map_err(ConfigError::InvalidCategory)?
        .unwrap_or_default();

    // Theme: CLI → env → config → default
    let theme = cli
        .theme
        .clone()
        .or_else(|| std::env::var("HOLOCRON_THEME").ok())
        .or_else(|| config.general.theme.clone())
        .map(|name| name.parse::<Theme>())
        .transpose()
        .map_err(ConfigError::InvalidTheme)?
        .unwrap_or_default();

    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| std::env::var("HOLOCRON_BASE_URL").ok())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let timeout = Duration::from_secs(config.api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));

    Ok(ResolvedConfig {
        category,
        theme,
        base_url,
        timeout,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = HolocronConfig::default();
        assert!(config.general.default_category.is_none());
        assert!(config.api.base_url.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = HolocronConfig::default();
        let resolved = resolve(&config, &CliOverrides::default()).unwrap();
        assert_eq!(resolved.category, Category::People);
        assert_eq!(resolved.theme, Theme::Light);
        assert_eq!(resolved.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = HolocronConfig {
            general: GeneralConfig {
                default_category: Some("starships".to_string()),
                theme: Some("dark".to_string()),
            },
            api: ApiConfig {
                base_url: None,
                timeout_secs: Some(3),
            },
        };
        let resolved = resolve(&config, &CliOverrides::default()).unwrap();
        assert_eq!(resolved.category, Category::Starships);
        assert_eq!(resolved.theme, Theme::Dark);
        assert_eq!(resolved.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = HolocronConfig {
            general: GeneralConfig {
                default_category: Some("starships".to_string()),
                ..Default::default()
            },
            api: ApiConfig {
                base_url: Some("http://config.invalid/api".to_string()),
                ..Default::default()
            },
        };
        let cli = CliOverrides {
            category: Some("planets".to_string()),
            theme: None,
            base_url: Some("http://cli.invalid/api".to_string()),
        };
        let resolved = resolve(&config, &cli).unwrap();
        assert_eq!(resolved.category, Category::Planets);
        assert_eq!(resolved.base_url, "http://cli.invalid/api");
    }

    #[test]
    fn test_resolve_rejects_unknown_category() {
        let cli = CliOverrides {
            category: Some("vehicles".to_string()),
            ..Default::default()
        };
        let result = resolve(&HolocronConfig::default(), &cli);
        assert!(matches!(result, Err(ConfigError::InvalidCategory(_))));
    }

    #[test]
    fn test_resolve_rejects_unknown_theme() {
        let cli = CliOverrides {
            theme: Some("sepia".to_string()),
            ..Default::default()
        };
        let result = resolve(&HolocronConfig::default(), &cli);
        assert!(matches!(result, Err(ConfigError::InvalidTheme(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
default_category = "planets"
theme = "dark"

[api]
base_url = "http://localhost:8000/api"
timeout_secs = 5
"#;
        let config: HolocronConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_category.as_deref(), Some("planets"));
        assert_eq!(config.general.theme.as_deref(), Some("dark"));
        assert_eq!(config.api.base_url.as_deref(), Some("http://localhost:8000/api"));
        assert_eq!(config.api.timeout_secs, Some(5));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[general]
theme = "dark"
"#;
        let config: HolocronConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.theme.as_deref(), Some("dark"));
        assert!(config.general.default_category.is_none());
        assert!(config.api.timeout_secs.is_none());
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let dir = std::env::temp_dir().join(format!("holocron-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[general\ntheme = ").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("holocron-definitely-missing").join("config.toml");
        assert!(matches!(load_config_from(&path), Err(ConfigError::Io(_))));
    }
}
