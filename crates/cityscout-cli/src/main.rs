use std::path::PathBuf;

use clap::Parser;
use cityscout_core::{Config, Relay};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cityscout")]
#[command(version, about = "City lookup relay: location, weather, parks, movies and businesses", long_about = None)]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true, env = "CITYSCOUT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run the HTTP relay
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,
    },
    /// Geocode one place through the cache and print the record
    Location {
        /// Place name, passed through verbatim
        city: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; real environment variables still win. Loaded
    // before logging so it can carry RUST_LOG, reported once logging is up.
    let env_file = dotenvy::dotenv();

    // Initialize logging - helps when things go sideways
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cityscout=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(e) = env_file_problem(env_file) {
        tracing::warn!("Ignoring .env file: {}", e);
    }

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            cityscout_web::serve(&config).await?;
        }
        Commands::Location { city } => {
            tracing::info!("Looking up location: {}", city);
            let relay = Relay::from_config(&config)?;
            let record = relay.location.lookup(&city).await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }

    Ok(())
}

/// A missing .env is normal; anything else about it deserves a warning
fn env_file_problem(result: dotenvy::Result<PathBuf>) -> Option<dotenvy::Error> {
    match result {
        Ok(_) => None,
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => Some(e),
    }
}
