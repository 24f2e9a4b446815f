//! Authentication scope for the dashboard subtree.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthProvider` owns the `RwSignal<AuthState>` context. Descendants read it
//! with `expect_context` and never fetch the user themselves. In the browser
//! the provider resolves the session once via `/api/auth/me` and installs the
//! signed-out redirect; during SSR the scope stays in its loading state so the
//! hydrated markup matches.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Provide the auth context to `children` and wrap them in the scope element.
///
/// Nesting is idempotent: if an ancestor already provided the context, the
/// existing signal is reused and no second lookup is started.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = if let Some(existing) = use_context::<RwSignal<AuthState>>() {
        existing
    } else {
        let auth = RwSignal::new(AuthState::pending());
        provide_context(auth);

        #[cfg(feature = "hydrate")]
        {
            load_current_user(auth);
            crate::util::auth::install_unauth_redirect(auth, leptos_router::hooks::use_navigate());
        }

        auth
    };

    let phase = move || auth.with(|state| state.phase().as_str());

    view! {
        <div class="auth-scope" data-auth=phase>
            {children()}
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn load_current_user(auth: RwSignal<AuthState>) {
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        match &user {
            Some(u) => log::info!("session resolved for {}", u.name),
            None => log::info!("no active session"),
        }
        auth.set(AuthState::resolved(user));
    });
}
