//! Environment-driven server configuration.

use anyhow::{bail, Context, Result};
use facalloc_core::db::{open_db, open_db_in_memory, DbResult};
use facalloc_core::default_log_level;
use rusqlite::Connection;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

const DEFAULT_DATABASE_URL: &str = "sqlite:///allocation.db";
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_LOG_DIR: &str = "logs";

/// Where the SQLite database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    File(PathBuf),
    Memory,
}

impl DatabaseLocation {
    /// Opens and migrates the database.
    pub fn open(&self) -> DbResult<Connection> {
        match self {
            Self::File(path) => open_db(path),
            Self::Memory => open_db_in_memory(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub database: DatabaseLocation,
    pub log_level: String,
    /// Always absolute.
    pub log_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to resolve working directory")?;
        Self::from_lookup(|key| std::env::var(key).ok(), &cwd)
    }

    /// Builds config from a key lookup, resolving relative log paths against `cwd`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>, cwd: &Path) -> Result<Self> {
        let listen_addr = lookup("FACALLOC_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_addr
            .parse()
            .with_context(|| format!("invalid FACALLOC_LISTEN_ADDR `{listen_addr}`"))?;

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let database = parse_database_url(&database_url)?;

        let log_level =
            lookup("FACALLOC_LOG_LEVEL").unwrap_or_else(|| default_log_level().to_string());

        let log_dir = PathBuf::from(
            lookup("FACALLOC_LOG_DIR").unwrap_or_else(|| DEFAULT_LOG_DIR.to_string()),
        );
        let log_dir = if log_dir.is_absolute() {
            log_dir
        } else {
            cwd.join(log_dir)
        };

        Ok(Self {
            listen_addr,
            database,
            log_level,
            log_dir,
        })
    }
}

/// Parses a SQLAlchemy-style SQLite URL.
///
/// `sqlite:///name.db` is relative to the working directory,
/// `sqlite:////abs/name.db` is absolute, and `sqlite://` or
/// `sqlite://:memory:` select an in-memory database.
pub fn parse_database_url(url: &str) -> Result<DatabaseLocation> {
    let url = url.trim();
    let Some(rest) = url.strip_prefix("sqlite://") else {
        bail!("unsupported DATABASE_URL `{url}`; only sqlite:// URLs are supported");
    };

    let path = rest.strip_prefix('/').unwrap_or(rest);
    if path.is_empty() || path == ":memory:" {
        return Ok(DatabaseLocation::Memory);
    }
    if rest == path {
        bail!("invalid DATABASE_URL `{url}`; expected sqlite:///<path>");
    }

    Ok(DatabaseLocation::File(PathBuf::from(path)))
}

#[cfg(test)]
mod tests {
    use super::{parse_database_url, Config, DatabaseLocation};
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned(), Path::new("/srv/facalloc"))
    }

    #[test]
    fn defaults_use_local_sqlite_file_and_port_5000() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.listen_addr.to_string(), "0.0.0.0:5000");
        assert_eq!(
            config.database,
            DatabaseLocation::File(PathBuf::from("allocation.db"))
        );
        assert_eq!(config.log_dir, PathBuf::from("/srv/facalloc/logs"));
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = config_from(&[
            ("FACALLOC_LISTEN_ADDR", "127.0.0.1:8080"),
            ("DATABASE_URL", "sqlite:////var/lib/facalloc/db.sqlite"),
            ("FACALLOC_LOG_LEVEL", "warn"),
            ("FACALLOC_LOG_DIR", "/var/log/facalloc"),
        ])
        .unwrap();

        assert_eq!(config.listen_addr.port(), 8080);
        assert_eq!(
            config.database,
            DatabaseLocation::File(PathBuf::from("/var/lib/facalloc/db.sqlite"))
        );
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, PathBuf::from("/var/log/facalloc"));
    }

    #[test]
    fn invalid_listen_addr_is_rejected() {
        let err = config_from(&[("FACALLOC_LISTEN_ADDR", "not an addr")]).unwrap_err();
        assert!(err.to_string().contains("FACALLOC_LISTEN_ADDR"));
    }

    #[test]
    fn database_url_variants() {
        assert_eq!(
            parse_database_url("sqlite://").unwrap(),
            DatabaseLocation::Memory
        );
        assert_eq!(
            parse_database_url("sqlite://:memory:").unwrap(),
            DatabaseLocation::Memory
        );
        assert_eq!(
            parse_database_url("sqlite:///data/app.db").unwrap(),
            DatabaseLocation::File(PathBuf::from("data/app.db"))
        );
        assert!(parse_database_url("postgres://localhost/app").is_err());
        assert!(parse_database_url("sqlite://host/app.db").is_err());
    }
}
