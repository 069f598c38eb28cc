//! HTTP routes
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/?cep=<raw>` | GET | Resolve a CEP to an address |

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::trace::TraceLayer;

use crate::core::race::CepResolver;
use crate::domain::model::Address;
use crate::utils::error::CepError;

pub fn router(resolver: CepResolver) -> Router {
    Router::new()
        .route("/", get(lookup_cep))
        .layer(TraceLayer::new_for_http())
        .with_state(resolver)
}

/// 取第一個 `cep` 參數；沒有時為空字串。查詢字串本身不會造成請求被拒絕。
pub fn cep_param(query: Option<&str>) -> String {
    query
        .and_then(|query| {
            url::form_urlencoded::parse(query.as_bytes())
                .find(|(key, _)| key == "cep")
                .map(|(_, value)| value.into_owned())
        })
        .unwrap_or_default()
}

async fn lookup_cep(
    State(resolver): State<CepResolver>,
    RawQuery(query): RawQuery,
) -> Result<Json<Address>, CepError> {
    let address = resolver.lookup(&cep_param(query.as_deref())).await?;
    Ok(Json(address))
}

// 所有錯誤都回傳 500 與簡短文字，維持既有 API 行為
impl IntoResponse for CepError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.user_message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cep_param_takes_first_value() {
        assert_eq!(cep_param(Some("cep=01001-000")), "01001-000");
        assert_eq!(cep_param(Some("cep=&cep=01001000")), "");
        assert_eq!(cep_param(Some("other=1&cep=01001000&cep=2")), "01001000");
    }

    #[test]
    fn test_cep_param_missing_or_malformed() {
        assert_eq!(cep_param(None), "");
        assert_eq!(cep_param(Some("")), "");
        assert_eq!(cep_param(Some("other=1")), "");
        assert_eq!(cep_param(Some("cep=01001%2D000")), "01001-000");
        assert_eq!(cep_param(Some("cep=%ZZ01001000")), "%ZZ01001000");
    }
}
