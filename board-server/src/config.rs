//! Board configuration - TOML file plus environment overrides
//!
//! Loaded from `~/.board/config.toml` unless a path is given. Every section
//! is optional. Environment variables override the file:
//! - `DATABASE_URL`: PostgreSQL connection string
//! - `BOARD_BIND`: address the server binds to

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::db::{ListOrder, DEFAULT_MAX_CONNECTIONS};

/// Configuration loading error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid value for {key}: '{value}'")]
    InvalidEnv { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
    pub board: BoardSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: SocketAddr,
    pub cors_permissive: bool,
    pub request_timeout_secs: u64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3030)),
            cors_permissive: false,
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    /// No URL means the in-memory store
    pub url: Option<String>,
    pub max_connections: u32,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSection {
    pub list_order: ListOrder,
}

impl BoardConfig {
    /// Default config location: `~/.board/config.toml`
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".board")
            .join("config.toml")
    }

    /// Load config from `path`, or from the default location.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => {
                let default = Self::default_path();
                if default.exists() {
                    Self::from_file(&default)?
                } else {
                    tracing::debug!(path = %default.display(), "No config file, using defaults");
                    Self::default()
                }
            }
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Apply environment overrides, reading variables through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL").filter(|u| !u.is_empty()) {
            self.database.url = Some(url);
        }

        if let Some(bind) = lookup("BOARD_BIND") {
            self.server.bind = bind.parse().map_err(|_| ConfigError::InvalidEnv {
                key: "BOARD_BIND",
                value: bind,
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.server.bind.port(), 3030);
        assert!(!config.server.cors_permissive);
        assert_eq!(config.server.request_timeout_secs, 30);
        assert!(config.database.url.is_none());
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.board.list_order, ListOrder::NewestFirst);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[database]
url = "postgres://localhost/board"

[board]
list_order = "oldest_first"
"#
        )
        .unwrap();

        let config = BoardConfig::from_file(file.path()).unwrap();
        assert_eq!(
            config.database.url.as_deref(),
            Some("postgres://localhost/board")
        );
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.board.list_order, ListOrder::OldestFirst);
        assert_eq!(config.server, ServerSection::default());
    }

    #[test]
    fn bad_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[board]\nlist_order = \"sideways\"").unwrap();

        let err = BoardConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn explicit_missing_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = BoardConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn env_overrides_file() {
        let env: HashMap<&str, &str> = [
            ("DATABASE_URL", "postgres://db/board"),
            ("BOARD_BIND", "0.0.0.0:8080"),
        ]
        .into_iter()
        .collect();

        let mut config = BoardConfig::default();
        config
            .apply_env(|k| env.get(k).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.database.url.as_deref(), Some("postgres://db/board"));
        assert_eq!(config.server.bind.port(), 8080);
    }

    #[test]
    fn invalid_bind_env_is_rejected() {
        let mut config = BoardConfig::default();
        let err = config
            .apply_env(|k| (k == "BOARD_BIND").then(|| "not-an-addr".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { key: "BOARD_BIND", .. }));
    }

    #[test]
    fn round_trips_through_toml() {
        let config = BoardConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(toml::from_str::<BoardConfig>(&text).unwrap(), config);
    }
}
