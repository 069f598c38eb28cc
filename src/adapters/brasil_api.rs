use crate::adapters::http::{null_as_empty, ProviderResponse};
use crate::domain::model::Address;
use serde::Deserialize;

pub const DEFAULT_NAME: &str = "BrasilAPI";
pub const DEFAULT_ENDPOINT: &str = "https://brasilapi.com.br/api/cep/v1/{cep}";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BrasilApiResponse {
    #[serde(deserialize_with = "null_as_empty")]
    pub cep: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub state: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub neighborhood: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub street: String,
}

impl ProviderResponse for BrasilApiResponse {
    fn into_address(self, service: &str) -> Address {
        Address {
            cep: self.cep,
            state: self.state,
            city: self.city,
            neighborhood: self.neighborhood,
            street: self.street,
            source_service: service.to_string(),
        }
    }
}
