//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The redirect is a UX guard only. Every `/api` handler on the server still
//! validates the session cookie on its own.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Route signed-out visitors are sent to.
pub const LOGIN_PATH: &str = "/app/login";

/// Whether auth has finished loading and found no user.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Send the visitor to [`LOGIN_PATH`] (replacing the history entry) when
/// `state` says there is no session. Returns whether it navigated.
pub fn redirect_unauth(state: &AuthState, navigate: &impl Fn(&str, NavigateOptions)) -> bool {
    if !should_redirect_unauth(state) {
        return false;
    }
    #[cfg(feature = "hydrate")]
    log::debug!("no session, redirecting to {LOGIN_PATH}");
    navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
    true
}

/// Redirect to [`LOGIN_PATH`] whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        auth.with(|state| redirect_unauth(state, &navigate));
    });
}
