//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! dashboard keeps no in-memory domain data; sessions live in Postgres.

use sqlx::PgPool;

use crate::config::ServerConfig;
use crate::services::auth::GitHubConfig;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; `PgPool` is internally reference counted.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub github: Option<GitHubConfig>,
    pub cookie_secure: bool,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool, config: &ServerConfig) -> Self {
        Self { pool, github: config.github.clone(), cookie_secure: config.cookie_secure }
    }
}
