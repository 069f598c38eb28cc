use anyhow::Context;
use cep_race::utils::{logger, validation::Validate};
use cep_race::{app, CliConfig, ConfigProvider, TomlConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_logger(cli.verbose, cli.json_logs);

    tracing::info!("Starting cep-race");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 指定設定檔時以檔案為準，否則使用命令列參數
    let settings: Box<dyn ConfigProvider> = match &cli.config {
        Some(path) => {
            let file_config = TomlConfig::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?;
            file_config.validate().context("invalid configuration file")?;
            Box::new(file_config)
        }
        None => {
            cli.validate().context("invalid command line options")?;
            Box::new(cli.clone())
        }
    };

    let resolver = app::build_resolver(settings.as_ref())?;
    app::serve(resolver, settings.bind_address()?).await?;

    Ok(())
}
