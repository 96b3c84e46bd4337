//! CLI entry point for blog-frontend

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blog_frontend::config::SiteConfig;
use blog_frontend::Blog;

#[derive(Parser)]
#[command(name = "blog-frontend")]
#[command(version)]
#[command(about = "Server-rendered blog frontend for a remote content API", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short = 'C', long, global = true)]
    cwd: Option<PathBuf>,

    /// Config file (defaults to _config.yml in the base directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to
        #[arg(short, long)]
        ip: Option<String>,

        /// Content API base URL
        #[arg(long)]
        api: Option<String>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blog_frontend=debug,tower_http=debug,info"
    } else {
        "blog_frontend=info,tower_http=info"
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

    match cli.command {
        Commands::Server { port, ip, api } => {
            if let Err(e) = dotenvy::from_path(base_dir.join(".env")) {
                tracing::debug!("No .env loaded: {}", e);
            }

            let config_path = cli
                .config
                .map(|p| if p.is_absolute() { p } else { base_dir.join(p) })
                .unwrap_or_else(|| base_dir.join("_config.yml"));
            let mut config = SiteConfig::resolve(&config_path)?;

            if let Some(port) = port {
                config.port = port;
            }
            if let Some(ip) = ip {
                config.ip = ip;
            }
            let config = config.with_api_base_url(api);

            tracing::info!("Using content API at {}", config.api_base_url);
            Blog::new(config)?.serve().await?;
        }

        Commands::Version => {
            println!("blog-frontend version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
