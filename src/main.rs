use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chat_relay::chat::ChatService;
use chat_relay::chat_db::ChatDbClient;
use chat_relay::config::AppConfig;
use chat_relay::llm::http::build_http_client;
use chat_relay::routes::configure_routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads .env first so RUST_LOG can live there too
    let mut config = AppConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,chat_relay=debug")),
        )
        .with_target(false)
        .init();

    let catalog = Arc::new(config.load_catalog()?);
    info!(models = catalog.len(), "model catalog loaded");

    let store = ChatDbClient::new(config.chat_db_config()?).await?;
    store.ping().await?;
    info!(url = %config.database_url, "chat store opened");

    let http_client = build_http_client(config.upstream_timeout)?;
    let service = Arc::new(ChatService::new(
        catalog,
        Arc::new(store),
        http_client,
        config.provider_settings(),
    ));

    let routes = configure_routes(service);

    info!("Starting server on http://{}", config.bind_addr);
    warp::serve(routes).run(config.bind_addr).await;

    Ok(())
}
