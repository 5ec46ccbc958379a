//! CLI entry point for insertech-site

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use insertech_site::{commands, server, Site};

#[derive(Parser)]
#[command(name = "insertech-site")]
#[command(version)]
#[command(about = "Content resolver and static site generator for the Insertech website", long_about = None)]
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
    /// List blog posts or services in display order
    List {
        /// Content domain (blog, service)
        #[arg(default_value = "blog")]
        domain: String,
    },

    /// Resolve a slug and print its page metadata
    Show {
        /// Content domain (blog, service)
        domain: String,

        /// Record slug, matched exactly
        slug: String,
    },

    /// Print sitemap.xml
    Sitemap,

    /// Generate static files
    #[command(alias = "g")]
    Generate,

    /// Start a local preview server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,
    },

    /// Clean the public folder
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "insertech_site=debug,info"
    } else {
        "insertech_site=info"
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
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    match cli.command {
        Commands::List { domain } => {
            let site = Site::new(&base_dir)?;
            commands::list::run(&site, &domain)?;
        }

        Commands::Show { domain, slug } => {
            let site = Site::new(&base_dir)?;
            commands::show::run(&site, &domain, &slug)?;
        }

        Commands::Sitemap => {
            let site = Site::new(&base_dir)?;
            commands::sitemap::run(&site)?;
        }

        Commands::Generate => {
            let site = Site::new(&base_dir)?;
            tracing::info!("Generating static files...");
            site.generate()?;
            println!("Generated successfully!");
        }

        Commands::Server { port, ip, open } => {
            let site = Site::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            server::start(&site, &ip, port, open).await?;
        }

        Commands::Clean => {
            let site = Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("insertech-site version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
