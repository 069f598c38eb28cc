use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use cep_race::app::router;
use cep_race::{Address, Cep, CepProvider, CepResolver, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

struct DelayedProvider {
    name: &'static str,
    delay: Duration,
    calls: Arc<AtomicUsize>,
}

impl DelayedProvider {
    fn new(name: &'static str, delay_ms: u64) -> Self {
        Self {
            name,
            delay: Duration::from_millis(delay_ms),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl CepProvider for DelayedProvider {
    fn name(&self) -> &str {
        self.name
    }

    async fn lookup(&self, cep: &Cep) -> Result<Address> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        Ok(Address {
            cep: cep.to_string(),
            state: "SP".to_string(),
            city: "São Paulo".to_string(),
            neighborhood: "Sé".to_string(),
            street: "Praça da Sé".to_string(),
            source_service: self.name.to_string(),
        })
    }
}

async fn call(resolver: CepResolver, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = router(resolver)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

fn race_of(a: DelayedProvider, b: DelayedProvider, timeout_ms: u64) -> CepResolver {
    CepResolver::new(
        vec![
            Arc::new(a) as Arc<dyn CepProvider>,
            Arc::new(b) as Arc<dyn CepProvider>,
        ],
        Duration::from_millis(timeout_ms),
    )
}

#[tokio::test]
async fn test_scenario_fast_provider_answers() {
    let resolver = race_of(
        DelayedProvider::new("A", 50),
        DelayedProvider::new("B", 500),
        1000,
    );

    let (status, content_type, body) = call(resolver, "/?cep=01001-000").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    let address: Address = serde_json::from_str(&body).unwrap();
    assert_eq!(address.cep, "01001000");
    assert_eq!(address.street, "Praça da Sé");
    assert_eq!(address.source_service, "A");
}

#[tokio::test]
async fn test_scenario_empty_cep() {
    let a = DelayedProvider::new("A", 0);
    let b = DelayedProvider::new("B", 0);
    let calls = (Arc::clone(&a.calls), Arc::clone(&b.calls));
    let resolver = race_of(a, b, 1000);

    let (status, _, body) = call(resolver.clone(), "/?cep=").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Cep não informado");

    // 沒有 cep 參數時視同空白
    let (status, _, body) = call(resolver, "/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Cep não informado");

    assert_eq!(calls.0.load(Ordering::SeqCst), 0);
    assert_eq!(calls.1.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_scenario_short_cep() {
    let resolver = race_of(DelayedProvider::new("A", 0), DelayedProvider::new("B", 0), 1000);

    let (status, content_type, body) = call(resolver.clone(), "/?cep=123").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(content_type.unwrap().starts_with("text/plain"));
    assert_eq!(body, "Cep inválido, deve conter 8 caracteres");

    let (status, _, body) = call(resolver, "/?cep=123456789").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Cep inválido, deve conter 8 caracteres");
}

#[tokio::test]
async fn test_scenario_timeout() {
    let resolver = race_of(
        DelayedProvider::new("A", 1500),
        DelayedProvider::new("B", 1500),
        100,
    );

    let (status, _, body) = call(resolver, "/?cep=01001000").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Tempo limite excedido");
}

#[tokio::test]
async fn test_repeated_cep_parameter_uses_first_value() {
    let a = DelayedProvider::new("A", 0);
    let b = DelayedProvider::new("B", 0);
    let calls = (Arc::clone(&a.calls), Arc::clone(&b.calls));
    let resolver = race_of(a, b, 1000);

    let (status, content_type, body) = call(resolver.clone(), "/?cep=&cep=123").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(content_type.unwrap().starts_with("text/plain"));
    assert_eq!(body, "Cep não informado");
    assert_eq!(calls.0.load(Ordering::SeqCst), 0);
    assert_eq!(calls.1.load(Ordering::SeqCst), 0);

    let (status, _, body) = call(resolver, "/?cep=01001-000&cep=123").await;
    assert_eq!(status, StatusCode::OK);
    let address: Address = serde_json::from_str(&body).unwrap();
    assert_eq!(address.cep, "01001000");
}

#[tokio::test]
async fn test_only_root_route_is_served() {
    let resolver = race_of(DelayedProvider::new("A", 0), DelayedProvider::new("B", 0), 1000);
    let (status, _, _) = call(resolver, "/health").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
