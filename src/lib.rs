pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{CliConfig, ProviderConfig, ProviderKind, TomlConfig};
pub use core::{normalizer::normalize, race::CepResolver};
pub use domain::model::{Address, Cep};
pub use domain::ports::{CepProvider, ConfigProvider};
pub use utils::error::{CepError, Result};
