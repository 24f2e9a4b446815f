//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by `AuthProvider`, which provides it as `RwSignal<AuthState>` to the
//! dashboard subtree. The sidebar and pages read it for identity-dependent
//! rendering; the redirect guard reads it to bounce signed-out visitors.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

/// Coarse auth phase, exposed on the DOM as the auth scope's `data-auth`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    Loading,
    Authenticated,
    Anonymous,
}

impl AuthPhase {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Authenticated => "authenticated",
            Self::Anonymous => "anonymous",
        }
    }
}

impl AuthState {
    /// State before the current-user lookup has finished.
    #[must_use]
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    /// State after the lookup finished, with or without a user.
    #[must_use]
    pub fn resolved(user: Option<User>) -> Self {
        Self { user, loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn phase(&self) -> AuthPhase {
        if self.user.is_some() {
            AuthPhase::Authenticated
        } else if self.loading {
            AuthPhase::Loading
        } else {
            AuthPhase::Anonymous
        }
    }

    /// Name to show in chrome such as the sidebar footer.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match (&self.user, self.loading) {
            (Some(user), _) => &user.name,
            (None, true) => "Loading...",
            (None, false) => "Signed out",
        }
    }
}
