mod config;
mod error;
mod handlers;
mod state;

use anyhow::Context;
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use handlers::{api, fragments};
use state::AppState;

fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/status", get(api::derived_status))
        .route("/api/status/{vocabulary}/{status}", get(api::status_presentation))
        .route("/api/registries", get(api::registries))
        .route("/fragments/status", get(fragments::status_fragment))
        .route("/fragments/status/{vocabulary}/{status}", get(fragments::resolved_fragment))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "media_status_server=info,media_status=info,tower_http=debug".into()
            })
        )
        .init();

    let config = Config::from_env()?;
    let registry = config.load_registry().await?;
    let app = router(AppState::new(registry));

    let addr = config.bind_addr();
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
