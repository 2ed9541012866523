use std::{fs, fs::OpenOptions, path::Path};

use anyhow::{bail, Context};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://departments.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
}

impl AppConfig {
    /// Reads `DATABASE_URL` and `DATABASE_MAX_CONNECTIONS`, after loading `.env` if present.
    pub fn from_env() -> anyhow::Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_values(
            std::env::var("DATABASE_URL").ok(),
            std::env::var("DATABASE_MAX_CONNECTIONS").ok(),
        )
    }

    pub fn from_values(database_url: Option<String>, max_connections: Option<String>) -> anyhow::Result<Self> {
        let database_url = database_url.unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let max_connections = match max_connections {
            None => DEFAULT_MAX_CONNECTIONS,
            Some(raw) => {
                let n: u32 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("DATABASE_MAX_CONNECTIONS={raw:?} is not a number"))?;
                if n == 0 {
                    bail!("DATABASE_MAX_CONNECTIONS must be at least 1");
                }
                n
            }
        };
        Ok(Self { database_url, max_connections })
    }

    pub fn is_in_memory(&self) -> bool { self.database_url.starts_with("sqlite::memory:") }
}

/// Creates the SQLite file (and its parent directory) for file-backed URLs.
pub fn prepare_sqlite_file(database_url: &str) -> anyhow::Result<()> {
    if database_url.starts_with("sqlite::memory:") { return Ok(()); }
    let Some(path) = database_url.strip_prefix("sqlite://") else { return Ok(()) };
    let path = path.split('?').next().unwrap_or(path);
    // Windows absolute paths arrive as /C:/...
    let path = if cfg!(windows) && path.len() >= 3 && path.as_bytes()[0] == b'/' && path.as_bytes()[2] == b':' {
        &path[1..]
    } else {
        path
    };
    let p = Path::new(path);
    if let Some(parent) = p.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    if !p.exists() {
        OpenOptions::new().create(true).append(true).open(p).with_context(|| format!("creating {}", p.display()))?;
    }
    Ok(())
}
