use crate::domain::model::{Address, Cep};
use crate::domain::ports::CepProvider;
use crate::utils::error::Result;
use crate::utils::validation::CEP_PLACEHOLDER;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use std::collections::HashMap;
use std::marker::PhantomData;

/// 各服務的回應格式，負責把自己的欄位對應到標準地址
pub trait ProviderResponse: DeserializeOwned + Send + 'static {
    fn into_address(self, service: &str) -> Address;
}

/// 欄位為 `null` 時視同空字串，與欄位缺漏相同
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// 通用的 JSON 查詢服務：只有 URL 模板與回應型別不同
pub struct JsonProvider<R: ProviderResponse> {
    name: String,
    endpoint_template: String,
    headers: HashMap<String, String>,
    client: Client,
    _response: PhantomData<fn() -> R>,
}

impl<R: ProviderResponse> JsonProvider<R> {
    pub fn new(
        name: impl Into<String>,
        endpoint_template: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            name: name.into(),
            endpoint_template: endpoint_template.into(),
            headers: HashMap::new(),
            client,
            _response: PhantomData,
        }
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    pub fn endpoint_for(&self, cep: &Cep) -> String {
        self.endpoint_template.replace(CEP_PLACEHOLDER, cep.as_str())
    }
}

#[async_trait]
impl<R: ProviderResponse> CepProvider for JsonProvider<R> {
    fn name(&self) -> &str {
        &self.name
    }

    async fn lookup(&self, cep: &Cep) -> Result<Address> {
        let mut request = self.client.get(self.endpoint_for(cep));

        // 添加自定義標頭
        for (key, value) in &self.headers {
            request = request.header(key, value);
        }

        let response = request.send().await?;

        // 4xx 仍照常解析：未知 CEP 時服務會回傳空欄位
        if response.status().is_server_error() {
            response.error_for_status_ref()?;
        }

        let body = response.bytes().await?;
        let raw: R = serde_json::from_slice(&body)?;
        Ok(raw.into_address(&self.name))
    }
}
