use crate::config::ProviderConfig;
use crate::domain::model::{Address, Cep};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::Duration;

/// 單一外部 CEP 查詢服務。新增服務只需實作此 trait，協調器不需修改。
#[async_trait]
pub trait CepProvider: Send + Sync {
    /// 寫入 `Address::source_service` 的固定名稱
    fn name(&self) -> &str;

    async fn lookup(&self, cep: &Cep) -> Result<Address>;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> Result<SocketAddr>;
    fn timeout(&self) -> Duration;
    fn providers(&self) -> &[ProviderConfig];
}
