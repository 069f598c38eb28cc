use crate::adapters::http::{null_as_empty, ProviderResponse};
use crate::domain::model::Address;
use serde::Deserialize;

pub const DEFAULT_NAME: &str = "Viacep";
pub const DEFAULT_ENDPOINT: &str = "https://viacep.com.br/ws/{cep}/json/";

/// ViaCEP 回應。未知 CEP 時回傳 `{"erro": true}`，所有欄位預設為空字串。
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ViaCepResponse {
    #[serde(deserialize_with = "null_as_empty")]
    pub cep: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub logradouro: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub bairro: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub localidade: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub uf: String,
}

impl ProviderResponse for ViaCepResponse {
    fn into_address(self, service: &str) -> Address {
        Address {
            cep: self.cep,
            state: self.uf,
            city: self.localidade,
            neighborhood: self.bairro,
            street: self.logradouro,
            source_service: service.to_string(),
        }
    }
}
