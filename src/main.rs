use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trader_admin=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let port = config.port;
    tracing::info!(backend = %config.backend_origin, max_upload_bytes = config.max_upload_bytes, "proxy configured");

    let state = state::AppState::new(config).expect("http client init failed");
    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "admin console listening");
    axum::serve(listener, app).await.expect("server failed");
}
