//! policyscan web server
//!
//! Run with: cargo run -p policyscan-web --bin policyscan

use tracing::info;
use tracing_subscriber::EnvFilter;

use policyscan_web::config::Config;
use policyscan_web::router::build_router;
use policyscan_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("policyscan=debug,info")),
        )
        .init();

    let config = Config::load()?;
    let state = AppState::from_config(&config)?;
    info!(
        upstream = state.service.upstream_configured(),
        history = state.service.history().backend_name(),
        "Starting policyscan"
    );

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
