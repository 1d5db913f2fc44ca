use std::net::SocketAddr;

use anyhow::Context;
use axum::{Router, middleware, routing::get};
use nb_api::{ApiConfig, ApiState};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine, the variables may come from the environment
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env().context("invalid configuration")?;

    nb_api::tracing::init_tracing(&config.env);

    let metrics_handle = nb_api::metrics::init_metrics()?;
    tracing::info!("Prometheus metrics exporter initialized");

    let pool = nb_db::create_pool(&config.database_url, config.db_max_connections).await?;
    nb_db::ensure_db_and_migrate(&config.database_url, &pool)
        .await
        .context("failed to migrate database")?;
    tracing::info!("Database migrated");

    let state = ApiState::new(&config, pool);

    let cors = match config.parsed_allowed_origins() {
        Some(origins) => nb_api::middleware::cors::create_cors_layer(origins),
        None => {
            tracing::warn!("ALLOWED_ORIGINS is not set, CORS is permissive");
            CorsLayer::very_permissive()
        }
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Kept out of the API router so it is never rate limited or authenticated
    let metrics_app = Router::new()
        .route("/metrics", get(nb_api::metrics::metrics_handler))
        .with_state(metrics_handle);

    let app = nb_api::router::router()
        .merge(metrics_app)
        .with_state(state)
        .layer(cors)
        .layer(trace_layer)
        .layer(middleware::from_fn(nb_api::metrics::track_metrics))
        .layer(middleware::from_fn(
            nb_api::middleware::request_id::request_id_middleware,
        ));

    let app = nb_api::middleware::security_headers::apply_security_headers(app, config.env.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(environment = ?config.env, "Server listening on http://{addr}");

    // The rate limiter keys on the peer address
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received");
}
