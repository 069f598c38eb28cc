use crate::config::{
    validate_providers, validate_timeout_ms, ProviderConfig, DEFAULT_HOST, DEFAULT_PORT,
    DEFAULT_TIMEOUT_MS,
};
use crate::core::ConfigProvider;
use crate::utils::error::{CepError, Result};
use crate::utils::validation::{validate_range, Validate};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "cep-race")]
#[command(about = "Resolves Brazilian postal codes by racing several lookup services")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS, help = "Deadline for the whole race")]
    pub timeout_ms: u64,

    #[arg(long, help = "TOML file with server, race and provider settings")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(skip = ProviderConfig::defaults())]
    pub providers: Vec<ProviderConfig>,
}

pub(crate) fn parse_bind_address(host: &str, port: u16) -> Result<SocketAddr> {
    format!("{}:{}", host, port)
        .parse()
        .map_err(|e| CepError::InvalidConfigValueError {
            field: "host".to_string(),
            value: host.to_string(),
            reason: format!("Invalid listen address: {}", e),
        })
}

impl ConfigProvider for CliConfig {
    fn bind_address(&self) -> Result<SocketAddr> {
        parse_bind_address(&self.host, self.port)
    }

    fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    fn providers(&self) -> &[ProviderConfig] {
        &self.providers
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.bind_address()?;
        validate_range("port", self.port, 1, u16::MAX)?;
        validate_timeout_ms("timeout_ms", self.timeout_ms)?;
        validate_providers(&self.providers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["cep-race"]);

        assert_eq!(config.bind_address().unwrap(), "0.0.0.0:8081".parse().unwrap());
        assert_eq!(config.timeout(), Duration::from_secs(1));
        assert_eq!(config.providers().len(), 2);
        assert!(config.config.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::parse_from([
            "cep-race",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--timeout-ms",
            "250",
            "--verbose",
        ]);

        assert_eq!(config.bind_address().unwrap(), "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.timeout(), Duration::from_millis(250));
        assert!(config.verbose);
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let zero_timeout = CliConfig::parse_from(["cep-race", "--timeout-ms", "0"]);
        assert!(zero_timeout.validate().is_err());

        let bad_host = CliConfig::parse_from(["cep-race", "--host", "not a host"]);
        assert!(bad_host.validate().is_err());

        let zero_port = CliConfig::parse_from(["cep-race", "--port", "0"]);
        assert!(zero_port.validate().is_err());
    }
}
