//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the auth API and OAuth endpoints, then merges Leptos SSR rendering of
//! the dashboard under `/app` into a single Axum router. Static WASM/CSS
//! assets come from the Leptos site root at `/pkg`.

pub mod auth;


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API and OAuth routes, independent of the Leptos build output.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(redirect_root_to_app))
        .route("/login", get(redirect_login_to_app))
        .route("/auth/github", get(auth::github_redirect))
        .route("/auth/github/callback", get(auth::github_callback))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn redirect_root_to_app() -> Redirect {
    Redirect::temporary("/app")
}

async fn redirect_login_to_app() -> Redirect {
    Redirect::temporary("/app/login")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Full application: API routes + Leptos SSR at `/app` + `/pkg` assets.
pub fn app(state: AppState, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
