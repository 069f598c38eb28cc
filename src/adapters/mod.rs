// Adapters layer: concrete CEP lookup services over HTTP.

pub mod brasil_api;
pub mod http;
pub mod via_cep;

use self::brasil_api::BrasilApiResponse;
use self::http::JsonProvider;
use self::via_cep::ViaCepResponse;
use crate::config::{ProviderConfig, ProviderKind};
use crate::domain::ports::CepProvider;
use reqwest::Client;
use std::sync::Arc;

/// 依設定建立服務清單，停用的服務會被略過。所有服務共用同一個連線池。
pub fn build_providers(configs: &[ProviderConfig], client: &Client) -> Vec<Arc<dyn CepProvider>> {
    configs
        .iter()
        .filter(|config| config.enabled)
        .map(|config| build_provider(config, client.clone()))
        .collect()
}

fn build_provider(config: &ProviderConfig, client: Client) -> Arc<dyn CepProvider> {
    match config.kind {
        ProviderKind::BrasilApi => Arc::new(
            JsonProvider::<BrasilApiResponse>::new(&config.name, &config.endpoint, client)
                .with_headers(config.headers.clone()),
        ),
        ProviderKind::ViaCep => Arc::new(
            JsonProvider::<ViaCepResponse>::new(&config.name, &config.endpoint, client)
                .with_headers(config.headers.clone()),
        ),
    }
}
