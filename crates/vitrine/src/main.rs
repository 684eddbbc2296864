//! Vitrine CLI - prompt-to-website generator.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(about = "Generate a static website from a text prompt")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to vitrine.toml config file
    #[arg(short, long, default_value = "vitrine.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize config and control panel in the current directory
    Init {
        /// Skip interactive prompts, overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Start the build API and site server
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Do not open the control panel in a browser
        #[arg(long)]
        no_open: bool,
    },

    /// Generate a site once, without starting the server
    Generate {
        /// The prompt to build the site from
        #[arg(short = 'm', long)]
        prompt: String,

        /// Provider id (defaults to the configured default)
        #[arg(long)]
        provider: Option<String>,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,
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
        Commands::Init { yes } => {
            commands::init::run(yes).await?;
        }
        Commands::Serve { port, no_open } => {
            commands::serve::run(cli.config, port, !no_open).await?;
        }
        Commands::Generate {
            prompt,
            provider,
            output,
        } => {
            commands::generate::run(cli.config, prompt, provider, output).await?;
        }
    }

    Ok(())
}
