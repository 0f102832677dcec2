use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use quartermaster::mirror::{self, MirrorStore};
use quartermaster::{ClientConfig, NexusClient};

#[derive(Parser)]
#[command(name = "quartermaster")]
#[command(about = "Nexus Repository Manager client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print server status and writability
    Status,

    /// Mirror repository and component metadata into a local SQLite database
    Mirror {
        /// Database path (overrides NEXUS_DATABASE_PATH)
        #[arg(long)]
        database: Option<PathBuf>,
    },
}

fn run_status(config: &ClientConfig) -> anyhow::Result<()> {
    let client = NexusClient::new(config)?;
    let status = client.get_status()?;
    println!("Server: {}", config.base_url);
    println!("Status: {}", serde_json::to_string_pretty(&status)?);
    println!("Writable: {}", client.is_writable()?);
    Ok(())
}

fn run_mirror(config: &ClientConfig, database: Option<PathBuf>) -> anyhow::Result<()> {
    let db_path = database.unwrap_or_else(|| config.database_path.clone());
    info!("mirroring {} into {}", config.base_url, db_path.display());

    let store = MirrorStore::new(&db_path)?;
    store.initialize()?;

    let client = NexusClient::new(config)?;
    mirror::run(&client, &store)?;

    info!("mirror complete");
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return;
        }
    };

    let result = match cli.command {
        Commands::Status => run_status(&config),
        Commands::Mirror { database } => run_mirror(&config, database),
    };

    // Failures are reported on stderr; the process still exits normally.
    if let Err(e) = result {
        error!("{e}");
    }
}
