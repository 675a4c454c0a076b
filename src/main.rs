use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use docvet::config::{Args, Config};
use docvet::console;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_args(Args::parse())?;

    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_level.as_str()))
        .init();

    console::run(config).await
}
