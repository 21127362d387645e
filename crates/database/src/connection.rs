//! SQLite pool construction and session setup.

use anyhow::{Context, Result};
use marketplace_config::DatabaseConfig;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tokio::fs;
use tracing::info;

// Applied once at startup. SQLite leaves foreign key enforcement off
// unless asked, and WAL lets readers proceed while a write is in flight.
// The busy timeout retries a locked database for up to five seconds
// before surfacing an error.
const SESSION_PRAGMAS: &[&str] = &[
    "PRAGMA foreign_keys = ON",
    "PRAGMA journal_mode = WAL",
    "PRAGMA busy_timeout = 5000",
];

/// Open the SQLite pool behind `config.url`, creating the database file
/// on first run.
pub async fn prepare_database(config: &DatabaseConfig) -> Result<SqlitePool> {
    if let Some(path) = sqlite_file_path(&config.url) {
        create_sqlite_file(path).await?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
        .with_context(|| format!("failed to open database at {}", config.url))?;

    for pragma in SESSION_PRAGMAS {
        sqlx::query(pragma)
            .execute(&pool)
            .await
            .with_context(|| format!("failed to apply {pragma}"))?;
    }

    info!(url = %config.url, "database ready");
    Ok(pool)
}

/// Extract the on-disk path from a `sqlite://` url. Non-sqlite urls and
/// in-memory databases have no file to create.
fn sqlite_file_path(url: &str) -> Option<&Path> {
    let path = url.strip_prefix("sqlite://")?;
    (path != ":memory:").then_some(Path::new(path))
}

async fn create_sqlite_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create database directory {}", parent.display()))?;
    }

    if fs::metadata(path).await.is_err() {
        fs::OpenOptions::new()
            .create(true)
            .write(true)
            .open(path)
            .await
            .with_context(|| format!("failed to create database file {}", path.display()))?;
    }

    Ok(())
}
