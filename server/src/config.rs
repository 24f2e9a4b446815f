//! Environment-driven server configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` loads `.env` via `dotenvy`, then builds a `ServerConfig` once at
//! startup. Parsing goes through a lookup closure so tests never touch the
//! process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::services::auth::GitHubConfig;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Startup configuration shared by the pool, router, and auth cookies.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub cookie_secure: bool,
    /// `None` disables the OAuth routes (they answer 503).
    pub github: Option<GitHubConfig>,
}

/// Parse a permissive boolean (`1/true/yes/on`, `0/false/no/off`).
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

impl ServerConfig {
    /// Load from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing or a numeric/boolean
    /// variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?;
        let github = GitHubConfig::from_lookup(&lookup);

        // Without an explicit flag, secure cookies follow the OAuth callback scheme.
        let cookie_secure = match lookup("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { key: "COOKIE_SECURE", value: raw })?,
            None => github.as_ref().is_some_and(|gh| gh.redirect_uri.starts_with("https://")),
        };

        Ok(Self { database_url, port, db_max_connections, cookie_secure, github })
    }
}
