//! Account settings page showing the signed-in user's session details.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::auth::AuthState;

/// Label/value rows for the account card.
#[must_use]
pub fn account_rows(user: &User) -> Vec<(&'static str, String)> {
    vec![
        ("Name", user.name.clone()),
        ("User ID", user.id.clone()),
        ("Signed in with", sign_in_method_label(&user.auth_method).to_owned()),
    ]
}

fn sign_in_method_label(method: &str) -> &str {
    match method {
        "github" => "GitHub",
        "session" => "Session",
        other => other,
    }
}

/// Settings page, rendered into the shell's content region.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let rows = move || {
        auth.with(|state| state.user.as_ref().map(account_rows)).map(|rows| {
            rows.into_iter()
                .map(|(label, value)| {
                    view! {
                        <dt class="settings-page__label">{label}</dt>
                        <dd class="settings-page__value">{value}</dd>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="settings-page">
            <h1>"Settings"</h1>
            <dl class="settings-page__account">{rows}</dl>
        </section>
    }
}
