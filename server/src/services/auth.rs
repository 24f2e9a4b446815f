//! GitHub OAuth sign-in: code exchange, profile fetch, user upsert.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use sqlx::{PgPool, Row};
use uuid::Uuid;

const AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";
const TOKEN_URL: &str = "https://github.com/login/oauth/access_token";
const USER_URL: &str = "https://api.github.com/user";
const USER_AGENT: &str = "dashboard";

/// GitHub OAuth app credentials.
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl GitHubConfig {
    /// Read `GITHUB_CLIENT_ID`, `GITHUB_CLIENT_SECRET`, `GITHUB_REDIRECT_URI`.
    /// Returns `None` if any are missing or blank.
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Option<Self> {
        let get = |key: &str| lookup(key).filter(|v: &String| !v.trim().is_empty());
        Some(Self {
            client_id: get("GITHUB_CLIENT_ID")?,
            client_secret: get("GITHUB_CLIENT_SECRET")?,
            redirect_uri: get("GITHUB_REDIRECT_URI")?,
        })
    }

    /// Build the GitHub authorization URL carrying the CSRF `state`. Every
    /// parameter is form-encoded, so a `redirect_uri` with its own query
    /// string survives intact.
    pub fn authorize_url(&self, state: &str) -> Result<String, AuthError> {
        reqwest::Url::parse_with_params(
            AUTHORIZE_URL,
            &[
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("scope", "read:user"),
                ("state", state),
            ],
        )
        .map(String::from)
        .map_err(|e| AuthError::AuthorizeUrl(e.to_string()))
    }
}

#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct GitHubUser {
    pub id: i64,
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

impl GitHubUser {
    /// Profile name when set, otherwise the login handle.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.login)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid authorize url: {0}")]
    AuthorizeUrl(String),
    #[error("github token exchange failed: {0}")]
    TokenExchange(String),
    #[error("github api error: {0}")]
    GitHubApi(String),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

impl AuthError {
    /// Upstream failures are the provider's fault; database failures are ours.
    #[must_use]
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::TokenExchange(_) | Self::GitHubApi(_))
    }
}

fn parse_token_response(body: &str) -> Result<String, AuthError> {
    serde_json::from_str::<TokenResponse>(body)
        .map(|t| t.access_token)
        .map_err(|_| AuthError::TokenExchange(format!("unexpected response: {body}")))
}

/// Exchange an OAuth code for an access token.
pub async fn exchange_code(config: &GitHubConfig, code: &str) -> Result<String, AuthError> {
    let body = reqwest::Client::new()
        .post(TOKEN_URL)
        .header("Accept", "application/json")
        .json(&serde_json::json!({
            "client_id": config.client_id,
            "client_secret": config.client_secret,
            "code": code,
            "redirect_uri": config.redirect_uri,
        }))
        .send()
        .await
        .map_err(|e| AuthError::TokenExchange(e.to_string()))?
        .text()
        .await
        .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

    parse_token_response(&body)
}

/// Fetch the authenticated GitHub user's profile.
pub async fn fetch_github_user(access_token: &str) -> Result<GitHubUser, AuthError> {
    let resp = reqwest::Client::new()
        .get(USER_URL)
        .header("Authorization", format!("Bearer {access_token}"))
        .header("User-Agent", USER_AGENT)
        .send()
        .await
        .map_err(|e| AuthError::GitHubApi(e.to_string()))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(AuthError::GitHubApi(format!("{status}: {body}")));
    }

    resp.json::<GitHubUser>()
        .await
        .map_err(|e| AuthError::GitHubApi(e.to_string()))
}

/// Insert or refresh the user for a GitHub profile. Returns the user's UUID.
pub async fn upsert_user(pool: &PgPool, gh: &GitHubUser) -> Result<Uuid, AuthError> {
    let row = sqlx::query(
        r"INSERT INTO users (github_id, name, avatar_url)
          VALUES ($1, $2, $3)
          ON CONFLICT (github_id) DO UPDATE SET name = EXCLUDED.name, avatar_url = EXCLUDED.avatar_url
          RETURNING id",
    )
    .bind(gh.id)
    .bind(gh.display_name())
    .bind(&gh.avatar_url)
    .fetch_one(pool)
    .await?;
    Ok(row.get("id"))
}
