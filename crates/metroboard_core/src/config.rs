//! Runtime configuration resolved from optional environment overrides.
//!
//! # Responsibility
//! - Resolve the persistence file path and logging settings.
//! - Keep defaults equal to the plain, argument-free launch.
//!
//! # Invariants
//! - Blank override values are ignored.
//! - `log_dir` is always absolute.

use crate::logging::{default_log_level, normalize_level};
use crate::store::json_file::DEFAULT_SETTINGS_FILE_NAME;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Overrides the record file location.
pub const SETTINGS_PATH_ENV: &str = "METROBOARD_SETTINGS_PATH";
/// Overrides the rolling log directory (absolute path).
pub const LOG_DIR_ENV: &str = "METROBOARD_LOG_DIR";
/// Overrides the log level (`trace|debug|info|warn|error`).
pub const LOG_LEVEL_ENV: &str = "METROBOARD_LOG_LEVEL";

const DEFAULT_LOG_DIR_NAME: &str = "metroboard-logs";

/// Configuration errors for rejected overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(String),
    RelativeLogDir(PathBuf),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(message) => write!(f, "{LOG_LEVEL_ENV}: {message}"),
            Self::RelativeLogDir(path) => write!(
                f,
                "{LOG_DIR_ENV} must be an absolute path, got `{}`",
                path.display()
            ),
        }
    }
}

impl Error for ConfigError {}

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub settings_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: &'static str,
}

impl AppConfig {
    /// Resolves configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let settings_path = read(SETTINGS_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE_NAME));

        let log_dir = match read(LOG_DIR_ENV) {
            Some(raw) if Path::new(&raw).is_absolute() => PathBuf::from(raw),
            Some(raw) => return Err(ConfigError::RelativeLogDir(PathBuf::from(raw))),
            None => std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME),
        };

        let log_level = match read(LOG_LEVEL_ENV) {
            Some(raw) => normalize_level(&raw).map_err(ConfigError::InvalidLogLevel)?,
            None => default_log_level(),
        };

        Ok(Self {
            settings_path,
            log_dir,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError, LOG_DIR_ENV, LOG_LEVEL_ENV, SETTINGS_PATH_ENV};
    use crate::logging::default_log_level;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn resolve(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_match_plain_launch() {
        let config = resolve(&[]).unwrap();
        assert_eq!(config.settings_path, PathBuf::from("settings.json"));
        assert!(config.log_dir.is_absolute());
        assert_eq!(config.log_level, default_log_level());
    }

    #[test]
    fn blank_overrides_are_ignored() {
        let config = resolve(&[(SETTINGS_PATH_ENV, "  "), (LOG_LEVEL_ENV, "")]).unwrap();
        assert_eq!(config.settings_path, PathBuf::from("settings.json"));
        assert_eq!(config.log_level, default_log_level());
    }

    #[test]
    fn overrides_are_trimmed_and_normalized() {
        let config = resolve(&[
            (SETTINGS_PATH_ENV, " boards/line1.json "),
            (LOG_LEVEL_ENV, "WARNING"),
        ])
        .unwrap();
        assert_eq!(config.settings_path, PathBuf::from("boards/line1.json"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn relative_log_dir_is_rejected() {
        let error = resolve(&[(LOG_DIR_ENV, "logs")]).unwrap_err();
        assert_eq!(error, ConfigError::RelativeLogDir(PathBuf::from("logs")));
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let error = resolve(&[(LOG_LEVEL_ENV, "verbose")]).unwrap_err();
        assert!(matches!(error, ConfigError::InvalidLogLevel(_)));
    }
}
