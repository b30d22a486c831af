use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use products_management::modules::products::adapters::outbound::product_repository_in_memory::InMemoryProductRepository;
use products_management::shell::config::AppConfig;
use products_management::shell::graphql::GRAPHQL_PATH;
use products_management::shell::http;
use products_management::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    fmt().with_env_filter(EnvFilter::try_new(&config.log_filter)?).init();

    // One store for the lifetime of the process
    let repository = Arc::new(InMemoryProductRepository::new());
    let state = AppState::new(repository);
    let app = http::app(state, &config);

    let addr = config.socket_addr();
    tracing::info!("REST endpoint: http://{}/api/v1/products", addr);
    tracing::info!("GraphQL endpoint: http://{}{}", addr, GRAPHQL_PATH);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
