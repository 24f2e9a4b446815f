//! Browser session storage.
//!
//! ARCHITECTURE
//! ============
//! A session is an opaque random token stored in an HttpOnly cookie and in the
//! `sessions` table. Expiry is enforced in SQL (`expires_at > now()`), so an
//! expired row behaves exactly like a missing one.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt::Write;

use rand::Rng;
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Token length in random bytes (hex doubles it).
pub const TOKEN_BYTES: usize = 32;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        let _ = write!(s, "{b:02x}");
        s
    })
}

/// Generate a cryptographically random hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; TOKEN_BYTES] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Whether `token` has the shape [`generate_token`] produces.
///
/// Lets the auth extractor reject garbage cookies without a database hit.
#[must_use]
pub fn is_well_formed_token(token: &str) -> bool {
    token.len() == TOKEN_BYTES * 2 && token.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

/// User row returned from session validation; also the `/api/auth/me` body.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SessionUser {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Avatar image URL, if available.
    pub avatar_url: Option<String>,
    /// How the user signed in (`"github"` or `"session"`).
    pub auth_method: String,
}

/// Create a session for the given user, returning the token.
pub async fn create_session(pool: &PgPool, user_id: Uuid) -> Result<String, sqlx::Error> {
    let token = generate_token();
    sqlx::query("INSERT INTO sessions (token, user_id) VALUES ($1, $2)")
        .bind(&token)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(token)
}

/// Resolve a live session token to its user.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<SessionUser>, sqlx::Error> {
    let row = sqlx::query(
        r"SELECT
              u.id,
              u.name,
              u.avatar_url,
              CASE WHEN u.github_id IS NOT NULL THEN 'github' ELSE 'session' END AS auth_method
          FROM sessions s
          JOIN users u ON u.id = s.user_id
          WHERE s.token = $1 AND s.expires_at > now()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| SessionUser {
        id: r.get("id"),
        name: r.get("name"),
        avatar_url: r.get("avatar_url"),
        auth_method: r.get("auth_method"),
    }))
}

/// Delete a session by token. Deleting an unknown token is not an error.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}
