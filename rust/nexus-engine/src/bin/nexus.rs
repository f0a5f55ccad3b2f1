#[macro_use]
extern crate tracing;

use clap::Parser;
use nexus_engine::{
    check,
    cli::{Cli, Command},
    Engine, EngineConfig, EngineError,
};
use tracing_subscriber::{fmt::Layer, layer::SubscriberExt, EnvFilter, Registry};

#[tokio::main]
pub async fn main() -> Result<(), EngineError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = Registry::default()
        .with(filter)
        .with(Layer::default().pretty());
    tracing::subscriber::set_global_default(subscriber)?;

    match Cli::parse().command {
        Command::Refresh(args) => {
            let config = EngineConfig::from(args);
            if config.offline {
                info!("Offline run; using the built-in catalog only");
            }
            Engine::new(config)?.refresh().await?;
        }
        Command::Check { path } => {
            let report = check(&path)?;
            println!("{report}");
        }
    }

    Ok(())
}
