//! CLI entry point for sitewright

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sitewright")]
#[command(version)]
#[command(about = "Static content pipeline for a consulting site", long_about = None)]
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
    /// Export the content store into static artifacts
    #[command(alias = "e")]
    Export,

    /// Export, then serve the artifacts and the contact endpoint
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// List store content (post, featured, tag, category, submission)
    List {
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Show one exported post as rendered blocks
    Show { id: String },

    /// Search exported posts by title, excerpt, or tag
    Search { query: String },

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
        "sitewright=debug,info"
    } else {
        "sitewright=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Export => {
            let site = sitewright::Site::new(&base_dir)?;
            tracing::info!("Exporting static content...");
            site.export()?;
            println!("Exported successfully!");
        }

        Commands::Serve { port, ip } => {
            let site = sitewright::Site::new(&base_dir)?;

            // Export first so the served tree is current
            tracing::info!("Exporting static content...");
            site.export()?;

            let ip = ip.unwrap_or_else(|| site.config.server.ip.clone());
            let port = port.unwrap_or(site.config.server.port);
            tracing::info!("Starting server at http://{}:{}", ip, port);
            sitewright::server::start(&site, &ip, port).await?;
        }

        Commands::List { r#type } => {
            sitewright::commands::list::run(&r#type)?;
        }

        Commands::Show { id } => {
            let site = sitewright::Site::new(&base_dir)?;
            sitewright::commands::query::show(&site, &id).await?;
        }

        Commands::Search { query } => {
            let site = sitewright::Site::new(&base_dir)?;
            sitewright::commands::query::search(&site, &query).await?;
        }

        Commands::Clean => {
            let site = sitewright::Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("sitewright version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
