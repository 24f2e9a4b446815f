//! Dashboard landing page.

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Greeting line for the overview header.
#[must_use]
pub fn greeting(state: &AuthState) -> String {
    match &state.user {
        Some(user) => format!("Welcome back, {}", user.name),
        None => "Welcome".to_owned(),
    }
}

/// Overview page, rendered into the shell's content region.
#[component]
pub fn OverviewPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <section class="overview-page">
            <header class="overview-page__header">
                <h1>"Overview"</h1>
                <p class="overview-page__greeting">{move || auth.with(greeting)}</p>
            </header>
        </section>
    }
}
