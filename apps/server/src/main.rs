use anyhow::Context;
use vacc::domain::config::ApiConfig;
use vacc::kernel::config::load_config;
use vacc_logger::Logger;
use vacc_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg: ApiConfig =
        load_config(Some("server")).context("Critical: Configuration is malformed")?;

    let _log = Logger::from_config(env!("CARGO_PKG_NAME"), &cfg.logging)?.init()?;

    Server::builder().config(cfg).build()?.run().await
}
