//! Fixed left sidebar with dashboard navigation and the signed-in user.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;

use crate::components::dashboard_shell::sidebar_style;
use crate::net::types::User;
use crate::state::auth::AuthState;

/// Root of every dashboard route.
pub const APP_BASE: &str = "/app";

/// Navigation entry definition.
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Overview", href: "/app", icon: "\u{25A6}" },
    NavItem { label: "Settings", href: "/app/settings", icon: "\u{2699}" },
];

/// Current router path, provided by the route-level layout.
///
/// Optional: without it the sidebar renders with no highlighted item.
#[derive(Clone, Copy)]
pub struct ActivePath(pub Signal<String>);

/// Whether the nav item at `href` should be highlighted for `current`.
///
/// The dashboard root only matches itself; other items also match their
/// nested routes on a path-segment boundary.
#[must_use]
pub fn is_active(href: &str, current: &str) -> bool {
    let href = href.trim_end_matches('/');
    let current = current.trim_end_matches('/');
    if href == APP_BASE {
        return current == href;
    }
    current == href || current.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

/// Fixed-width navigation panel.
///
/// Reads `RwSignal<AuthState>` from context, so it must render inside an
/// `AuthProvider`.
#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let active = use_context::<ActivePath>();

    let links = NAV_ITEMS
        .iter()
        .map(|item| {
            let href = item.href;
            let is_current = move || active.is_some_and(|path| path.0.with(|p| is_active(href, p)));

            view! {
                <a
                    class="sidebar__link"
                    class:sidebar__link--active=is_current
                    aria-current=move || is_current().then_some("page")
                    href=href
                >
                    <span class="sidebar__icon" aria-hidden="true">{item.icon}</span>
                    <span class="sidebar__label">{item.label}</span>
                </a>
            }
        })
        .collect::<Vec<_>>();

    let avatar = move || {
        auth.with(|state| match state.user.as_ref() {
            Some(User { avatar_url: Some(url), .. }) => {
                view! { <img class="sidebar__avatar" src=url.clone() alt=""/> }.into_any()
            }
            Some(user) => {
                view! { <span class="sidebar__avatar" aria-hidden="true">{user.initials()}</span> }
                    .into_any()
            }
            None => view! { <span class="sidebar__avatar sidebar__avatar--empty"></span> }.into_any(),
        })
    };
    let name = move || auth.with(|state| state.display_name().to_owned());
    let signed_in = move || auth.with(AuthState::is_authenticated);
    let on_sign_out = move |_| sign_out(auth);

    view! {
        <aside class="sidebar" style=sidebar_style()>
            <div class="sidebar__brand">"Dashboard"</div>
            <nav class="sidebar__nav" aria-label="Main">
                {links}
            </nav>
            <div class="sidebar__footer">
                {avatar}
                <span class="sidebar__user">{name}</span>
                <Show when=signed_in>
                    <button class="btn sidebar__sign-out" on:click=on_sign_out>
                        "Sign out"
                    </button>
                </Show>
            </div>
        </aside>
    }
}

/// End the session server-side, then drop the user so the redirect guard fires.
fn sign_out(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::net::api::logout().await;
        auth.set(AuthState::resolved(None));
    });

    #[cfg(not(feature = "hydrate"))]
    auth.set(AuthState::resolved(None));
}
