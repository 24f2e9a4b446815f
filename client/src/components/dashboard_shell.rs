//! Page chrome shared by every dashboard route.
//!
//! ```text
//! AuthProvider (.auth-scope)
//! └── .dashboard-shell
//!     ├── Sidebar    fixed, SIDEBAR_WIDTH_PX wide
//!     └── <main>     margin-left = SIDEBAR_WIDTH_PX, children verbatim
//! ```
//!
//! The shell holds no state and runs no effects. Geometry is derived from a
//! single width constant so the sidebar and content region cannot overlap.

#[cfg(test)]
#[path = "dashboard_shell_test.rs"]
mod dashboard_shell_test;

use leptos::prelude::*;

use crate::components::auth_provider::AuthProvider;
use crate::components::sidebar::Sidebar;

/// Fixed sidebar width in CSS pixels.
pub const SIDEBAR_WIDTH_PX: u32 = 256;

/// Horizontal offset of the content region.
#[must_use]
pub const fn content_offset_px() -> u32 {
    SIDEBAR_WIDTH_PX
}

/// Inline style pinning the sidebar to the left edge of the viewport.
#[must_use]
pub fn sidebar_style() -> String {
    format!("position: fixed; top: 0px; bottom: 0px; left: 0px; width: {SIDEBAR_WIDTH_PX}px")
}

/// Inline style placing the content region beside the sidebar.
#[must_use]
pub fn content_style() -> String {
    format!("margin-left: {}px; min-height: 100vh", content_offset_px())
}

/// Dashboard layout: auth scope, sidebar, and a content region for `children`.
#[component]
pub fn DashboardShell(#[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <AuthProvider>
            <div class="dashboard-shell">
                <Sidebar/>
                <main class="dashboard-shell__content" style=content_style()>
                    {children.map(|children| children())}
                </main>
            </div>
        </AuthProvider>
    }
}
