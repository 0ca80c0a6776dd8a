mod config;
mod driver;
mod error;
mod fetch;
mod parsers;
mod pool;
mod table;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("schedscrape=info")),
        )
        .init();

    let config = Config::parse();
    driver::run(&config).await
}
