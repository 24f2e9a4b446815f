//! Auth routes: GitHub OAuth sign-in, current user, logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::extract::{FromRef, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use crate::services::{auth as auth_svc, session};
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";
pub(crate) const OAUTH_STATE_COOKIE_NAME: &str = "oauth_state";

/// Where a successful sign-in lands.
const AFTER_SIGN_IN: &str = "/app";

fn base_cookie(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

pub(crate) fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    base_cookie(COOKIE_NAME, token, secure)
}

pub(crate) fn oauth_state_cookie(state: String, secure: bool) -> Cookie<'static> {
    let mut cookie = base_cookie(OAUTH_STATE_COOKIE_NAME, state, secure);
    cookie.set_max_age(Duration::minutes(10));
    cookie
}

pub(crate) fn expired_cookie(name: &'static str, secure: bool) -> Cookie<'static> {
    let mut cookie = base_cookie(name, String::new(), secure);
    cookie.set_max_age(Duration::ZERO);
    cookie
}

/// CSRF check for the OAuth callback.
pub(crate) fn oauth_state_matches(expected: Option<&str>, received: Option<&str>) -> bool {
    match (expected, received) {
        (Some(expected), Some(received)) => !expected.is_empty() && expected == received,
        _ => false,
    }
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if !session::is_well_formed_token(token) {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "session lookup failed");
                StatusCode::INTERNAL_SERVER_ERROR
            })?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /auth/github` — set the CSRF state cookie and redirect to GitHub.
pub async fn github_redirect(State(state): State<AppState>) -> Response {
    let Some(config) = &state.github else {
        return (StatusCode::SERVICE_UNAVAILABLE, "GitHub OAuth not configured").into_response();
    };

    let oauth_state = session::generate_token();
    let url = match config.authorize_url(&oauth_state) {
        Ok(url) => url,
        Err(e) => {
            tracing::error!(error = %e, "github authorize url");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    let jar = CookieJar::new().add(oauth_state_cookie(oauth_state, state.cookie_secure));
    (jar, Redirect::temporary(&url)).into_response()
}

#[derive(Deserialize)]
pub struct CallbackQuery {
    code: String,
    state: Option<String>,
}

/// `GET /auth/github/callback` — verify state, sign the user in, set the
/// session cookie, and redirect into the dashboard.
pub async fn github_callback(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<CallbackQuery>,
) -> Response {
    let Some(config) = &state.github else {
        return (StatusCode::SERVICE_UNAVAILABLE, "GitHub OAuth not configured").into_response();
    };
    if params.state.is_none() {
        return (StatusCode::BAD_REQUEST, "missing oauth state").into_response();
    }
    let expected = jar.get(OAUTH_STATE_COOKIE_NAME).map(Cookie::value);
    if !oauth_state_matches(expected, params.state.as_deref()) {
        tracing::warn!("oauth callback state mismatch");
        return (StatusCode::UNAUTHORIZED, "invalid oauth state").into_response();
    }

    let token = match sign_in(&state, config, &params.code).await {
        Ok(token) => token,
        Err(e) if e.is_upstream() => {
            tracing::error!(error = %e, "github sign-in failed");
            return (StatusCode::BAD_GATEWAY, "GitHub sign-in failed").into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "sign-in persistence failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create session").into_response();
        }
    };

    let jar = jar
        .add(session_cookie(token, state.cookie_secure))
        .add(expired_cookie(OAUTH_STATE_COOKIE_NAME, state.cookie_secure));
    (jar, Redirect::temporary(AFTER_SIGN_IN)).into_response()
}

async fn sign_in(state: &AppState, config: &auth_svc::GitHubConfig, code: &str) -> Result<String, auth_svc::AuthError> {
    let access_token = auth_svc::exchange_code(config, code).await?;
    let gh_user = auth_svc::fetch_github_user(&access_token).await?;
    let user_id = auth_svc::upsert_user(&state.pool, &gh_user).await?;
    let token = session::create_session(&state.pool, user_id).await?;
    tracing::info!(%user_id, login = %gh_user.login, "user signed in");
    Ok(token)
}

/// `GET /api/auth/me` — return current user.
pub async fn me(auth: AuthUser) -> Json<session::SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout` — delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    if let Err(e) = session::delete_session(&state.pool, &auth.token).await {
        tracing::warn!(error = %e, "session delete failed");
    }
    tracing::info!(user_id = %auth.user.id, "user signed out");

    let jar = CookieJar::new().add(expired_cookie(COOKIE_NAME, state.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}
