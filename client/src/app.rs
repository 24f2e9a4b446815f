//! Root application component with routing and the dashboard layout route.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Outlet, ParentRoute, Route, Router, Routes},
    hooks::use_location,
};

use crate::components::dashboard_shell::DashboardShell;
use crate::components::sidebar::ActivePath;
use crate::pages::{login::LoginPage, overview::OverviewPage, settings::SettingsPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Everything under `/app` except the login page renders inside
/// `DashboardShell` through [`DashboardLayout`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/dashboard.css"/>
        <Title text="Dashboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=(StaticSegment("app"), StaticSegment("login")) view=LoginPage/>
                <ParentRoute path=StaticSegment("app") view=DashboardLayout>
                    <Route path=StaticSegment("") view=OverviewPage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Layout route: exposes the current path to the sidebar and renders the
/// matched child route into the shell's content region.
#[component]
pub fn DashboardLayout() -> impl IntoView {
    let location = use_location();
    provide_context(ActivePath(location.pathname.into()));

    view! {
        <DashboardShell>
            <Outlet/>
        </DashboardShell>
    }
}
