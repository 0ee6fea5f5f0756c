//! Docify CLI - demo Git-to-docs platform.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "docify")]
#[command(about = "Demo Git-to-docs platform server and smoke checks")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to docify.toml config file
    #[arg(short, long, default_value = "docify.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the demo API server
    Serve {
        /// Port to listen on (overrides docify.toml)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides docify.toml)
        #[arg(long)]
        host: Option<String>,

        /// Serve the premium response shapes
        #[arg(long)]
        premium: bool,

        /// Open browser on start
        #[arg(long)]
        open: bool,

        /// Pause before answering the job endpoints, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Run smoke checks against a running server
    Smoke {
        /// Base URL of the server under test
        #[arg(long, default_value = "http://127.0.0.1:8000")]
        base_url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Serve {
            port,
            host,
            premium,
            open,
            delay_ms,
        } => {
            let args = commands::serve::ServeArgs {
                host,
                port,
                premium,
                open,
                delay_ms,
            };
            commands::serve::run(&cli.config, args).await?;
        }
        Commands::Smoke { base_url } => {
            commands::smoke::run(&base_url).await?;
        }
    }

    Ok(())
}
