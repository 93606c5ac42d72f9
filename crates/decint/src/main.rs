//! decint: line-oriented big-integer calculator.

mod app;
mod config;

use anyhow::Result;

fn main() -> Result<()> {
    let config = config::AppConfig::parse();

    let default_level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    app::run(&config)
}
