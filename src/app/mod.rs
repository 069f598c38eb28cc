pub mod routes;

use crate::adapters::build_providers;
use crate::core::race::CepResolver;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use reqwest::Client;
use std::net::SocketAddr;

pub use routes::router;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// 依設定建立協調器
pub fn build_resolver<C: ConfigProvider + ?Sized>(config: &C) -> Result<CepResolver> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    let providers = build_providers(config.providers(), &client);

    tracing::debug!(
        "Configured {} providers with a {:?} deadline",
        providers.len(),
        config.timeout()
    );

    Ok(CepResolver::new(providers, config.timeout()))
}

pub async fn serve(resolver: CepResolver, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        "🌐 Listening on http://{} (providers: {}, deadline: {:?})",
        listener.local_addr()?,
        resolver.provider_names().join(", "),
        resolver.timeout()
    );

    axum::serve(listener, router(resolver))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
