//! Pokedex - browse the Pokémon catalog and keep a list of favorites

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod app;
mod catalog_cli;
mod favorites_cli;

use app::AppContext;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "pokedex",
    about = "Browse the Pokémon catalog and manage your favorites",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Configuration file (defaults to config.yaml in the platform config directory)
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// Directory for favorites and the catalog cache
    #[clap(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search the catalog by name or number
    Search {
        /// Text to look for in names or the Pokédex number
        term: Option<String>,

        /// Only show Pokémon of this type (e.g. Feu)
        #[clap(long = "type")]
        type_name: Option<String>,

        /// Only show Pokémon from this generation
        #[clap(long)]
        generation: Option<u32>,

        /// Output results as JSON
        #[clap(long)]
        json: bool,

        /// Force refresh of the catalog (bypass cache)
        #[clap(long)]
        refresh: bool,
    },

    /// Show details for one Pokémon
    Show {
        /// Pokédex number
        id: u32,

        /// Regional form (e.g. alola)
        #[clap(long)]
        region: Option<String>,

        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// List every type in the catalog
    Types {
        /// Force refresh of the catalog (bypass cache)
        #[clap(long)]
        refresh: bool,
    },

    /// List every generation in the catalog
    Generations {
        /// Force refresh of the catalog (bypass cache)
        #[clap(long)]
        refresh: bool,
    },

    /// Manage favorites
    Favorites {
        #[clap(subcommand)]
        command: favorites_cli::FavoritesCommand,
    },

    /// Manage the local catalog cache
    Cache {
        #[clap(subcommand)]
        command: catalog_cli::CacheCommand,
    },
}

/// Initialize tracing from --log-level, with RUST_LOG directives layered on top
fn initialize_tracing(log_level: &LogLevel) {
    let mut filter = EnvFilter::new(log_level.to_filter_directive());

    if let Ok(extra) = std::env::var("RUST_LOG") {
        for directive in extra.split(',').filter(|d| !d.trim().is_empty()) {
            if let Ok(parsed) = directive.trim().parse() {
                filter = filter.add_directive(parsed);
            }
        }
    }

    // stdout carries command output only
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level);

    let ctx = AppContext::new(cli.config.as_deref(), cli.data_dir)?;
    debug!("Using data directory {}", ctx.data_dir().display());

    match cli.command {
        Command::Search {
            term,
            type_name,
            generation,
            json,
            refresh,
        } => {
            catalog_cli::execute_search(&ctx, term, type_name, generation, json, refresh).await
        }
        Command::Show { id, region, json } => {
            catalog_cli::execute_show(&ctx, id, region.as_deref(), json).await
        }
        Command::Types { refresh } => catalog_cli::execute_types(&ctx, refresh).await,
        Command::Generations { refresh } => catalog_cli::execute_generations(&ctx, refresh).await,
        Command::Favorites { command } => command.execute(&ctx).await,
        Command::Cache { command } => command.execute(&ctx),
    }
}
