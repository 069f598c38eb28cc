use thiserror::Error;

#[derive(Error, Debug)]
pub enum CepError {
    #[error("CEP is empty after normalization")]
    EmptyInput,

    #[error("CEP must have 8 digits, got {length}")]
    InvalidLength { length: usize },

    #[error("Provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Provider response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("No provider answered before the deadline")]
    Timeout,

    #[error("All {attempted} providers failed")]
    AllProvidersFailed { attempted: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Provider,
    Deadline,
    Configuration,
    System,
}

impl CepError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CepError::EmptyInput | CepError::InvalidLength { .. } => ErrorCategory::Input,
            CepError::Transport(_) | CepError::Decode(_) | CepError::AllProvidersFailed { .. } => {
                ErrorCategory::Provider
            }
            CepError::Timeout => ErrorCategory::Deadline,
            CepError::ConfigError { .. } | CepError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            CepError::IoError(_) => ErrorCategory::System,
        }
    }

    /// 回傳給 API 使用者的簡短訊息，不包含內部細節
    pub fn user_message(&self) -> &'static str {
        match self {
            CepError::EmptyInput => "Cep não informado",
            CepError::InvalidLength { .. } => "Cep inválido, deve conter 8 caracteres",
            CepError::Timeout => "Tempo limite excedido",
            CepError::AllProvidersFailed { .. } => "Nenhum serviço de CEP retornou o endereço",
            _ => "Erro interno",
        }
    }
}

pub type Result<T> = std::result::Result<T, CepError>;
