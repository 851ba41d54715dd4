//! DocFeed: bulk document feeder for a search-index HTTP API
//!
//! Reads a JSON array from a local file and submits each element as a
//! document to an indexing server, one request at a time.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use docfeed::config::Config;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "docfeed")]
#[command(about = "Bulk document feeder for a search-index HTTP API")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "docfeed.toml")]
    config: PathBuf,

    /// Server base URL (overrides the configured one)
    #[arg(short, long)]
    server: Option<String>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send every record of a JSON array file to the index
    Feed {
        /// Path to a file containing a top-level JSON array
        file: PathBuf,

        /// Target index name
        #[arg(short, long)]
        index: Option<String>,
    },

    /// Create a new index on the server
    CreateIndex {
        /// Index name
        name: String,

        /// Make term matching in the new index case sensitive
        #[arg(long)]
        case_sensitive: bool,
    },

    /// List the indices known to the server
    Indices,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging; diagnostics go to stderr so the per-record output
    // stays a clean line protocol on stdout
    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load config if present, otherwise run on defaults
    let mut config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::default()
    };

    // Override server URL if specified
    if let Some(server) = cli.server {
        config.server.base_url = server;
    }

    match cli.command {
        Commands::Feed { file, index } => commands::feed::feed(config, file, index).await,
        Commands::CreateIndex {
            name,
            case_sensitive,
        } => commands::index::create_index(config, name, case_sensitive).await,
        Commands::Indices => commands::index::list_indices(config).await,
    }
}
