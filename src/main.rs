//! CLI entry point for inkpost

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "inkpost")]
#[command(version)]
#[command(about = "A markdown content engine for personal blogs", long_about = None)]
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
    /// Create a new post file
    New {
        /// Title of the new post
        title: String,

        /// Short description for the listing page
        #[arg(short = 's', long, default_value = "")]
        desc: String,

        /// Tags, repeatable
        #[arg(short, long)]
        tags: Vec<String>,
    },

    /// List posts, newest first
    #[command(alias = "ls")]
    List {
        /// Only posts whose title or description contains this text
        #[arg(short, long)]
        filter: Option<String>,

        /// Show one page of results (1-based)
        #[arg(short, long)]
        page: Option<usize>,

        /// Emit JSON instead of a text listing
        #[arg(long)]
        json: bool,
    },

    /// Render a single post: metadata, outline, HTML, neighbors
    Show {
        /// Post identifier (filename without extension)
        id: String,

        /// Emit the whole page product as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "inkpost=debug,info"
    } else {
        "inkpost=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let site = inkpost::Site::new(&base_dir)?;

    match cli.command {
        Commands::New { title, desc, tags } => {
            tracing::info!("Creating new post: {}", title);
            inkpost::commands::new::run(&site, &title, &desc, &tags)?;
        }

        Commands::List { filter, page, json } => {
            inkpost::commands::list::run(&site, filter.as_deref(), page, json)?;
        }

        Commands::Show { id, json } => {
            inkpost::commands::show::run(&site, &id, json)?;
        }
    }

    Ok(())
}
