//! Shell settings loaded from a TOML file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

/// File the hostname is read from when none is configured.
pub const HOSTNAME_FILE: &str = "/etc/hostname";

/// Hostname used when neither the config nor [`HOSTNAME_FILE`] provides one.
pub const DEFAULT_HOSTNAME: &str = "NODESH";

/// Environment variable that forces debug mode on (`1`/`true`) or off.
pub const DEBUG_ENV: &str = "NODESH_DEBUG";

/// Top-level shell settings (`nodesh.toml`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Name shown in the prompt. Resolved from [`HOSTNAME_FILE`] if unset.
    pub hostname: Option<String>,
    /// Print the underlying error detail next to usage and failure messages.
    pub debug: bool,
    /// Print the welcome banner on startup.
    pub banner: bool,
    /// Running configuration (JSON) replayed before the first prompt.
    pub startup_config: Option<PathBuf>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            hostname: None,
            debug: false,
            banner: true,
            startup_config: None,
        }
    }
}

impl ShellConfig {
    /// Parse settings from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load settings from `path`, falling back to defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&text)?;
        if let Some(startup) = config.startup_config.take() {
            // Relative startup paths are relative to the settings file.
            config.startup_config = Some(match path.parent() {
                Some(dir) if startup.is_relative() => dir.join(startup),
                _ => startup,
            });
        }
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) {
        if let Ok(value) = std::env::var(DEBUG_ENV) {
            self.debug = parse_flag(&value);
        }
    }

    /// The configured hostname, or the one from [`HOSTNAME_FILE`].
    pub fn resolved_hostname(&self) -> String {
        match &self.hostname {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => read_hostname(Path::new(HOSTNAME_FILE)),
        }
    }
}

/// First line of `path`, or [`DEFAULT_HOSTNAME`] if it is missing or blank.
pub fn read_hostname(path: &Path) -> String {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|text| text.lines().next().map(|l| l.trim().to_string()))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_HOSTNAME.to_string())
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = ShellConfig::default();
        assert!(c.hostname.is_none());
        assert!(!c.debug);
        assert!(c.banner);
        assert!(c.startup_config.is_none());
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(ShellConfig::from_toml("").unwrap(), ShellConfig::default());
    }

    #[test]
    fn parse_all_fields() {
        let toml = r#"
            hostname = "edge-1"
            debug = true
            banner = false
            startup_config = "running.json"
        "#;
        let c = ShellConfig::from_toml(toml).unwrap();
        assert_eq!(c.hostname.as_deref(), Some("edge-1"));
        assert!(c.debug);
        assert!(!c.banner);
        assert_eq!(c.startup_config, Some(PathBuf::from("running.json")));
    }

    #[test]
    fn wrong_type_is_error() {
        assert!(ShellConfig::from_toml("debug = \"maybe\"").is_err());
    }

    #[test]
    fn missing_file_is_default() {
        let c = ShellConfig::load(Path::new("/nonexistent/nodesh.toml")).unwrap();
        assert_eq!(c, ShellConfig::default());
    }

    #[test]
    fn configured_hostname_wins() {
        let c = ShellConfig {
            hostname: Some(" core-sw ".into()),
            ..ShellConfig::default()
        };
        assert_eq!(c.resolved_hostname(), "core-sw");
    }

    #[test]
    fn missing_hostname_file_falls_back() {
        assert_eq!(
            read_hostname(Path::new("/nonexistent/hostname")),
            DEFAULT_HOSTNAME
        );
    }

    #[test]
    fn flag_parsing() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" on "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("off"));
        assert!(!parse_flag(""));
    }
}
