pub mod normalizer;
pub mod race;

pub use crate::domain::model::{Address, Cep};
pub use crate::domain::ports::{CepProvider, ConfigProvider};
pub use crate::utils::error::Result;
