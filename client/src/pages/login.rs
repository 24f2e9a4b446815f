//! Login page with GitHub OAuth redirect button.

use leptos::prelude::*;

/// Server endpoint that starts the OAuth flow.
pub const GITHUB_SIGN_IN_PATH: &str = "/auth/github";

/// Login page. Rendered outside `DashboardShell`, so it never triggers the
/// signed-out redirect itself.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <h1>"Dashboard"</h1>
            <p>"Sign in to continue"</p>
            <a href=GITHUB_SIGN_IN_PATH rel="external" class="login-button">
                "Sign in with GitHub"
            </a>
        </div>
    }
}
