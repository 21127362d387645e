use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

const DEFAULT_CONFIG_FILES: &[&str] = &[
    "marketplace.toml",
    "config/marketplace.toml",
    "crates/config/marketplace.toml",
    "../marketplace.toml",
    "../config/marketplace.toml",
    "../crates/config/marketplace.toml",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reject configurations that cannot produce a working server.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.auth.token_secret.trim().is_empty() {
            anyhow::bail!(
                "auth.token_secret is not set; provide it via a config file or MARKETPLACE__AUTH__TOKEN_SECRET"
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub address: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://marketplace.db".to_string(),
            max_connections: 10,
        }
    }
}

/// Token signing settings. The secret has no default on purpose: [`load`]
/// fails unless it is supplied through a config file or the environment.
///
/// ```
/// use marketplace_config::AuthConfig;
///
/// let auth = AuthConfig::default();
/// assert_eq!(auth.token_ttl_seconds, 604_800);
/// assert!(auth.token_secret.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub token_secret: String,
    #[serde(default = "AuthConfig::default_token_ttl")]
    pub token_ttl_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: String::new(),
            token_ttl_seconds: Self::default_token_ttl(),
        }
    }
}

impl AuthConfig {
    const fn default_token_ttl() -> u64 {
        604_800
    }
}

/// Load the application configuration by combining defaults, files, and environment overrides.
pub fn load() -> anyhow::Result<AppConfig> {
    let defaults = AppConfig::default();

    let db_max = defaults.database.max_connections as i64;
    let token_ttl = defaults.auth.token_ttl_seconds;
    let token_ttl_i64 = if token_ttl > i64::MAX as u64 {
        i64::MAX
    } else {
        token_ttl as i64
    };

    let mut builder = config::Config::builder();
    builder = builder
        .set_default("http.address", defaults.http.address.clone())
        .unwrap()
        .set_default("http.port", i64::from(defaults.http.port))
        .unwrap()
        .set_default("database.url", defaults.database.url.clone())
        .unwrap()
        .set_default("database.max_connections", db_max)
        .unwrap()
        .set_default("auth.token_secret", defaults.auth.token_secret.clone())
        .unwrap()
        .set_default("auth.token_ttl_seconds", token_ttl_i64)
        .unwrap();

    match locate_config_file() {
        Some(path) => {
            debug!(path = %path.display(), "applying configuration file");
            builder = builder.add_source(config::File::from(path));
        }
        None => debug!("no configuration file found, using defaults and environment overrides"),
    }

    builder = builder.add_source(config::Environment::with_prefix("MARKETPLACE").separator("__"));

    let cfg = builder.build().context("unable to build configuration")?;

    let mut config = cfg
        .try_deserialize::<AppConfig>()
        .context("invalid configuration")?;

    if config.auth.token_ttl_seconds > i64::MAX as u64 {
        config.auth.token_ttl_seconds = i64::MAX as u64;
    }

    config.validate()?;

    // The token secret stays out of the logs.
    debug!(http = ?config.http, database = ?config.database, "loaded backend configuration");
    Ok(config)
}

/// An explicit `MARKETPLACE_CONFIG` path is returned even when the file does
/// not exist, so a typo fails the load instead of silently falling back to
/// defaults.
fn locate_config_file() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("MARKETPLACE_CONFIG") {
        return Some(PathBuf::from(path));
    }

    let cwd = std::env::current_dir().ok()?;
    DEFAULT_CONFIG_FILES
        .iter()
        .map(|candidate| cwd.join(candidate))
        .find(|candidate| candidate.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = AppConfig::default();

        assert_eq!(config.http.address, "127.0.0.1");
        assert_eq!(config.http.port, 5000);
        assert_eq!(config.database.url, "sqlite://marketplace.db");
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.auth.token_ttl_seconds, 604_800);
    }

    #[test]
    fn validate_rejects_missing_token_secret() {
        let config = AppConfig::default();

        let error = config.validate().expect_err("empty secret should fail");
        assert!(error.to_string().contains("token_secret"));
    }

    #[test]
    fn validate_rejects_blank_token_secret() {
        let mut config = AppConfig::default();
        config.auth.token_secret = "   ".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_accepts_configured_secret() {
        let mut config = AppConfig::default();
        config.auth.token_secret = "super-secret".to_string();

        assert!(config.validate().is_ok());
    }
}
