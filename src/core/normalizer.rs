use crate::domain::model::Cep;
use crate::utils::error::{CepError, Result};

pub const CEP_LENGTH: usize = 8;

/// 移除所有非數字字元並檢查長度。不做任何存在性檢查，交給外部服務判斷。
pub fn normalize(raw: &str) -> Result<Cep> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    if digits.is_empty() {
        return Err(CepError::EmptyInput);
    }

    if digits.len() != CEP_LENGTH {
        return Err(CepError::InvalidLength {
            length: digits.len(),
        });
    }

    Ok(Cep::from_digits(digits))
}
