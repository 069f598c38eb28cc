use crate::core::normalizer::normalize;
use crate::domain::model::{Address, Cep};
use crate::domain::ports::CepProvider;
use crate::utils::error::{CepError, Result};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinSet;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// 同時向所有服務查詢，採用第一個成功的結果，整體受單一期限限制。
///
/// 協調器本身不保存任何跨請求的狀態，可以安全地在多個請求間共用。
#[derive(Clone)]
pub struct CepResolver {
    providers: Vec<Arc<dyn CepProvider>>,
    timeout: Duration,
}

impl CepResolver {
    pub fn new(providers: Vec<Arc<dyn CepProvider>>, timeout: Duration) -> Self {
        Self { providers, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// 正規化原始輸入後再查詢。輸入錯誤時不會呼叫任何服務。
    pub async fn lookup(&self, raw: &str) -> Result<Address> {
        let cep = normalize(raw)?;
        tracing::info!("Requesting address for cep: {}", cep);
        self.resolve(&cep).await
    }

    pub async fn resolve(&self, cep: &Cep) -> Result<Address> {
        let attempted = self.providers.len();
        if attempted == 0 {
            return Err(CepError::AllProvidersFailed { attempted });
        }

        let started = Instant::now();
        let mut tasks = JoinSet::new();
        for provider in &self.providers {
            let provider = Arc::clone(provider);
            let cep = cep.clone();
            tracing::debug!("Dispatching lookup for {} to {}", cep, provider.name());
            tasks.spawn(async move {
                let result = provider.lookup(&cep).await;
                (provider.name().to_string(), result)
            });
        }

        let race = async {
            while let Some(joined) = tasks.join_next().await {
                match joined {
                    Ok((_, Ok(address))) => return Ok(address),
                    Ok((name, Err(e))) => {
                        tracing::warn!(
                            "Provider {} failed ({:?}): {}",
                            name,
                            e.category(),
                            e
                        );
                    }
                    Err(join_error) => {
                        tracing::warn!("Provider task ended abnormally: {}", join_error);
                    }
                }
            }
            Err(CepError::AllProvidersFailed { attempted })
        };

        // 回傳時 JoinSet 被 drop，尚未完成的查詢會一併 abort
        let outcome = match tokio::time::timeout(self.timeout, race).await {
            Ok(outcome) => outcome,
            Err(_) => Err(CepError::Timeout),
        };

        match &outcome {
            Ok(address) if address.is_not_found() => {
                tracing::warn!(
                    "Address not found by service {} for cep {}",
                    address.source_service,
                    cep
                );
            }
            Ok(address) => {
                tracing::info!(
                    cep = %address.cep,
                    state = %address.state,
                    city = %address.city,
                    neighborhood = %address.neighborhood,
                    street = %address.street,
                    service = %address.source_service,
                    "Resolved in {:?}",
                    started.elapsed()
                );
            }
            Err(CepError::Timeout) => {
                tracing::warn!("No provider answered for {} within {:?}", cep, self.timeout);
            }
            Err(e) => tracing::warn!("Lookup for {} failed: {}", cep, e),
        }

        outcome
    }
}
