use crate::core::normalizer::CEP_LENGTH;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 已正規化的 CEP：恰好 8 個 ASCII 數字。
///
/// 只能透過 [`crate::core::normalizer::normalize`] 建立。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cep(String);

impl Cep {
    pub(crate) fn from_digits(digits: String) -> Self {
        debug_assert!(
            digits.len() == CEP_LENGTH && digits.bytes().all(|b| b.is_ascii_digit())
        );
        Self(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Cep {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// 所有服務共用的標準地址格式。欄位可以是空字串（服務沒有該資料）。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    pub cep: String,
    pub state: String,
    pub city: String,
    pub neighborhood: String,
    pub street: String,
    /// 產生此地址的服務名稱，僅供診斷
    #[serde(rename = "service")]
    pub source_service: String,
}

impl Address {
    /// 服務對未知 CEP 仍回傳成功，只是欄位為空
    pub fn is_not_found(&self) -> bool {
        self.street.is_empty()
    }
}
