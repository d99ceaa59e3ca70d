use proxy_service::{app, config::Config, models::upstream::HttpUpstream, Backend};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("proxy_service=info,tower_http=info")
        .init();

    let config = Config::load()?;

    info!("Relaying /api/prompts to {}", config.upstream_url);
    let backend: Backend = Arc::new(HttpUpstream::new(config.upstream_url.clone()));

    let addr = config.bind_addr();
    info!("Proxy server running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(backend)).await?;

    Ok(())
}
