mod config;
mod db;
mod routes;
mod services;
mod state;

use leptos::prelude::get_configuration;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    if config.github.is_none() {
        tracing::warn!("GitHub OAuth not configured; sign-in disabled");
    }

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("database init failed");

    let leptos_options = get_configuration(None)
        .expect("leptos configuration")
        .leptos_options;

    let port = config.port;
    let state = state::AppState::new(pool, &config);
    let app = routes::app(state, leptos_options);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "dashboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
