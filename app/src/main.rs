#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use command::{
    AnalyzeInput, AnalyzeStrategy, CommandStrategy, InfoInput, InfoStrategy, InitStrategy,
    ParseInput, ParseStrategy, ServeInput, ServeStrategy, VersionStrategy,
};
use lexa_config::Config;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "lexa")]
#[command(about = "Catalog of analyzed strings", long_about = None)]
struct Cli {
    /// Config file (defaults to ~/lexa/config.json)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Address to bind, overrides the config file
        #[arg(long)]
        host: Option<String>,

        /// Port to bind, overrides the config file
        #[arg(short = 'p', long)]
        port: Option<u16>,
    },
    /// Initialize configuration
    Init,
    /// Show the effective configuration
    Info,
    /// Analyze a string and print its properties
    Analyze {
        /// The string to analyze
        value: String,
    },
    /// Show how a free-text query translates into filters
    Parse {
        /// The query, e.g. "single word palindromes"
        query: String,
    },
    /// Show version
    Version,
}

fn init_logging(default_level: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn warn_if_config_missing(path: Option<&Path>) {
    if let Ok(path) = Config::resolve_path(path) {
        if !path.exists() {
            tracing::warn!("Config file not found at {}, using defaults", path.display());
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load_or_default(cli.config.as_deref());
    let level = config
        .as_ref()
        .map_or("info", |config| config.logging.level.as_str());
    init_logging(level)?;

    match cli.command {
        Commands::Serve { host, port } => {
            warn_if_config_missing(cli.config.as_deref());
            ServeStrategy
                .execute(ServeInput {
                    config: config?,
                    host,
                    port,
                })
                .await
        }
        Commands::Init => InitStrategy.execute(cli.config).await,
        Commands::Info => {
            InfoStrategy
                .execute(InfoInput {
                    config_path: cli.config,
                })
                .await
        }
        Commands::Analyze { value } => AnalyzeStrategy.execute(AnalyzeInput { value }).await,
        Commands::Parse { query } => ParseStrategy.execute(ParseInput { query }).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
