//! REST API helpers for the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since these endpoints are only
//! meaningful in the browser, where the session cookie lives.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of panics so a failed auth fetch
//! degrades to the signed-out state without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;

/// Current-user endpoint served by the `server` crate.
pub const ME_ENDPOINT: &str = "/api/auth/me";

/// Session teardown endpoint served by the `server` crate.
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

#[cfg(any(test, feature = "hydrate"))]
fn unexpected_status_message(endpoint: &str, status: u16) -> String {
    format!("{endpoint} returned {status}")
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get(ME_ENDPOINT).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("current user request failed: {e}");
                return None;
            }
        };
        if !resp.ok() {
            log::debug!("{}", unexpected_status_message(ME_ENDPOINT, resp.status()));
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        match gloo_net::http::Request::post(LOGOUT_ENDPOINT).send().await {
            Ok(resp) if !resp.ok() => {
                log::warn!("{}", unexpected_status_message(LOGOUT_ENDPOINT, resp.status()));
            }
            Ok(_) => {}
            Err(e) => log::warn!("logout request failed: {e}"),
        }
    }
}
