use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use starwars_api::{
    config::AppConfig,
    db::{connection, seed},
    logging::init_tracing,
    routes::router,
    state::AppState,
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("server failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env().expect("failed to load config");
    init_tracing(&cfg.log_level);

    let db = connection::connect(&cfg).await?;
    seed::seed_reference_data(&db).await?;

    let state = AppState::new(cfg, db);

    let app = Router::new()
        .merge(router(Arc::clone(&state)))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", state.config.host.as_str(), state.config.port)
        .parse()
        .expect("invalid host/port");
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
