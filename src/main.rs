//! CLI entry point for shkola

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shkola::commands::Collection;

#[derive(Parser)]
#[command(name = "shkola")]
#[command(version)]
#[command(about = "Compiles school website content (posts, teachers) into JSON indexes", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the JSON indexes
    #[command(alias = "g")]
    Generate {
        /// Only generate this collection
        #[arg(long, value_enum)]
        only: Option<Collection>,
    },

    /// List generated content as the site pages show it
    List {
        /// Collection to list
        #[arg(value_enum, default_value = "posts")]
        collection: Collection,
    },

    /// Remove the generated indexes
    Clean,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "shkola=debug,info"
    } else {
        "shkola=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    match cli.command {
        Commands::Generate { only } => {
            let site = shkola::Site::new(&base_dir)?;
            tracing::info!("Generating indexes in {:?}", site.content_dir);
            shkola::commands::generate::run(&site, only)?;
        }

        Commands::List { collection } => {
            let site = shkola::Site::new(&base_dir)?;
            shkola::commands::list::run(&site, collection)?;
        }

        Commands::Clean => {
            let site = shkola::Site::new(&base_dir)?;
            tracing::info!("Cleaning generated indexes...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("shkola version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
