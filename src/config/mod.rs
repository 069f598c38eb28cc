pub mod cli;
pub mod toml_config;

pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::adapters::{brasil_api, via_cep};
use crate::utils::error::{CepError, Result};
use crate::utils::validation::{
    validate_endpoint_template, validate_non_empty_string, validate_range, validate_unique_names,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;
pub const MAX_TIMEOUT_MS: u64 = 60_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    BrasilApi,
    ViaCep,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub name: String,
    pub kind: ProviderKind,
    /// 必須包含 `{cep}` 佔位符
    pub endpoint: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

fn enabled_by_default() -> bool {
    true
}

impl ProviderConfig {
    pub fn new(name: &str, kind: ProviderKind, endpoint: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            endpoint: endpoint.to_string(),
            enabled: true,
            headers: HashMap::new(),
        }
    }

    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(
                brasil_api::DEFAULT_NAME,
                ProviderKind::BrasilApi,
                brasil_api::DEFAULT_ENDPOINT,
            ),
            Self::new(
                via_cep::DEFAULT_NAME,
                ProviderKind::ViaCep,
                via_cep::DEFAULT_ENDPOINT,
            ),
        ]
    }
}

pub(crate) fn validate_timeout_ms(field_name: &str, timeout_ms: u64) -> Result<()> {
    validate_range(field_name, timeout_ms, 1, MAX_TIMEOUT_MS)
}

pub(crate) fn validate_providers(providers: &[ProviderConfig]) -> Result<()> {
    if !providers.iter().any(|p| p.enabled) {
        return Err(CepError::InvalidConfigValueError {
            field: "providers".to_string(),
            value: providers.len().to_string(),
            reason: "At least one provider must be enabled".to_string(),
        });
    }

    for (index, provider) in providers.iter().enumerate() {
        validate_non_empty_string(&format!("providers[{}].name", index), &provider.name)?;
        validate_endpoint_template(&format!("providers[{}].endpoint", index), &provider.endpoint)?;
    }

    validate_unique_names("providers.name", providers.iter().map(|p| p.name.as_str()))
}
