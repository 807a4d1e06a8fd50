use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use lyrebird_shared::TomlSettingsStore;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

mod audiostation;
mod subsonic;

/// Browse a Subsonic or AudioStation music server from the command line.
#[derive(Parser)]
#[command(name = "lyrebird", version)]
struct Args {
    /// The settings file server credentials are stored in.
    #[arg(long, default_value = TomlSettingsStore::FILENAME)]
    settings: PathBuf,

    #[command(subcommand)]
    server: Server,
}

#[derive(Subcommand)]
enum Server {
    /// Talk to a Subsonic-compatible server.
    Subsonic {
        #[command(subcommand)]
        command: subsonic::Command,
    },
    /// Talk to a Synology AudioStation server.
    Audiostation {
        #[command(subcommand)]
        command: audiostation::Command,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lyrebird=info")),
        )
        .init();

    let args = Args::parse();
    let store = TomlSettingsStore::open(&args.settings)
        .with_context(|| format!("Failed to open settings at {:?}", args.settings))?;
    tracing::debug!("using settings from {}", store.path().display());

    match args.server {
        Server::Subsonic { command } => subsonic::run(Box::new(store), command).await,
        Server::Audiostation { command } => audiostation::run(Box::new(store), command).await,
    }
}

/// Print a value to stdout as pretty JSON.
fn print(value: &impl Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
