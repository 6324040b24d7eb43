use anyhow::Context;
use pethub::domain::config::ApiConfig;
use pethub::domain::constants::DEFAULT_CONFIG_FILE;
use pethub::kernel::config::load_config;
use pethub_logger::{LevelFilter, Logger};
use pethub_server::Server;

#[pethub_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let cfg: ApiConfig =
        load_config(Some(DEFAULT_CONFIG_FILE)).context("Critical: Configuration is malformed")?;

    let level: LevelFilter = cfg
        .log
        .level
        .parse()
        .with_context(|| format!("Invalid log level '{}'", cfg.log.level))?;

    let mut logger = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level).json(cfg.log.json);
    if let Some(filter) = &cfg.log.filter {
        logger = logger.env_filter(filter.as_str());
    }
    if let Some(dir) = &cfg.log.dir {
        logger = logger.path(dir);
    }
    let _log = logger.init()?;

    Server::builder().config(cfg).build()?.run().await
}
