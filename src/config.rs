use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Default delay before Buddy stops wagging
pub const DEFAULT_INTRO_SECS: u64 = 3;

/// Default tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the config directory")]
    NoConfigDir,
    #[error("config file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// User preferences. Task data is never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Start in dark mode
    pub dark_mode: bool,
    /// Seconds the wagging intro animation is shown
    pub intro_secs: u64,
    /// Event loop tick in milliseconds
    pub tick_ms: u64,
    /// Render the date picker with Monday as the first column
    pub week_starts_monday: bool,
    /// Where to write logs; defaults to the cache directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

/// A config together with the file it came from (`None` when defaults were used)
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: Option<PathBuf>,
}

impl LoadedConfig {
    /// Record where the config came from; call once logging is up
    pub fn log_source(&self) {
        match &self.source {
            Some(path) => info!(path = %path.display(), "loaded config"),
            None => debug!("no config file; using defaults"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dark_mode: false,
            intro_secs: DEFAULT_INTRO_SECS,
            tick_ms: DEFAULT_TICK_MS,
            week_starts_monday: false,
            log_file: None,
        }
    }
}

impl Config {
    /// Load config from an explicit path, or from the default location.
    ///
    /// A missing default file means defaults; a missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
        let path = match explicit {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                p.to_path_buf()
            }
            None => {
                let p = default_config_path()?;
                if !p.exists() {
                    return Ok(LoadedConfig {
                        config: Self::default(),
                        source: None,
                    });
                }
                p
            }
        };

        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        Ok(LoadedConfig {
            config,
            source: Some(path),
        })
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    /// Intro delay; values chrono cannot represent fall back to the default
    pub fn intro_duration(&self) -> chrono::Duration {
        i64::try_from(self.intro_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .unwrap_or_else(|| {
                warn!(intro_secs = self.intro_secs, "intro_secs out of range; using default");
                default_intro_duration()
            })
    }

    /// Log file path, falling back to `<cache_dir>/focusplan/focusplan.log`
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            dirs::cache_dir().map(|d| d.join("focusplan").join("focusplan.log"))
        })
    }
}

pub fn default_intro_duration() -> chrono::Duration {
    chrono::Duration::seconds(DEFAULT_INTRO_SECS as i64)
}

/// `<config_dir>/focusplan/config.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(dir.join("focusplan").join("config.toml"))
}

/// Parse a `--date` argument
pub fn parse_date(value: &str) -> Result<chrono::NaiveDate, ConfigError> {
    chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ConfigError::InvalidDate(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert!(!cfg.dark_mode);
        assert_eq!(cfg.intro_secs, 3);
        assert_eq!(cfg.tick_duration(), Duration::from_millis(250));
        assert_eq!(cfg.intro_duration(), chrono::Duration::seconds(3));
    }

    #[test]
    fn test_huge_intro_secs_falls_back_to_default() {
        for secs in [u64::MAX, 9_000_000_000_000_000_000, 10_000_000_000_000_000] {
            let cfg = Config {
                intro_secs: secs,
                ..Config::default()
            };
            assert_eq!(cfg.intro_duration(), chrono::Duration::seconds(3), "intro_secs = {secs}");
        }

        let cfg = Config::from_toml("intro_secs = 10000000000000").unwrap();
        assert_eq!(cfg.intro_duration(), chrono::Duration::seconds(10_000_000_000_000));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let cfg = Config::from_toml("dark_mode = true\n").unwrap();
        assert_eq!(
            cfg,
            Config {
                dark_mode: true,
                ..Config::default()
            }
        );
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "intro_secs = 5").unwrap();
        writeln!(file, "week_starts_monday = true").unwrap();

        let loaded = Config::load(Some(file.path())).unwrap();
        assert_eq!(loaded.source.as_deref(), Some(file.path()));
        let cfg = loaded.config;
        assert_eq!(cfg.intro_secs, 5);
        assert!(cfg.week_starts_monday);
        assert!(!cfg.dark_mode);
    }

    #[test]
    fn test_load_missing_explicit_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = Config::load(Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_file_errors() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "tick_ms = \"fast\"").unwrap();
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_toml_output_parses_back() {
        let cfg = Config {
            dark_mode: true,
            tick_ms: 100,
            ..Config::default()
        };
        let text = cfg.to_toml().unwrap();
        assert!(text.contains("dark_mode = true"));
        assert_eq!(Config::from_toml(&text).unwrap(), cfg);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-06-01").unwrap(),
            chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
        assert!(matches!(parse_date("06/01/2024"), Err(ConfigError::InvalidDate(_))));
    }
}
