//! Command-line entry point for menu-scraper.
//!
//! # Usage
//!
//! ```bash
//! # Scrape the menu into menu_data.json
//! cargo run -- scrape
//!
//! # Scrape into a custom location
//! cargo run -- scrape --output data/menu.json
//!
//! # Serve lookups from the snapshot
//! cargo run -- serve --listen 127.0.0.1:5000
//! ```
//!
//! Settings not given on the command line come from the environment; see
//! [`menu_scraper::config`].

use menu_scraper::config::Config;
use menu_scraper::{scrape, server, telemetry};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;

/// Menu scraper with a read-only product lookup service.
#[derive(Parser)]
#[command(name = "menu-scraper")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape the menu and write the product snapshot
    Scrape {
        /// Snapshot file to write (overrides SNAPSHOT_PATH)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Serve product lookups from the snapshot
    Serve {
        /// Bind address (overrides LISTEN)
        #[arg(short, long)]
        listen: Option<String>,

        /// Snapshot file to read (overrides SNAPSHOT_PATH)
        #[arg(short, long)]
        snapshot: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match execute(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::from_env()?;

    match &cli.command {
        Commands::Scrape { output } => {
            if let Some(path) = output {
                config.snapshot_path = path.clone();
            }
        }
        Commands::Serve { listen, snapshot } => {
            if let Some(addr) = listen {
                config.listen_addr = addr.clone();
            }
            if let Some(path) = snapshot {
                config.snapshot_path = path.clone();
            }
        }
    }
    config.validate()?;

    telemetry::init_tracing(&config.log_level, &config.log_format)?;
    config.print_summary();

    match cli.command {
        Commands::Scrape { .. } => run_scrape(&config).await,
        Commands::Serve { .. } => server::run(config).await,
    }
}

async fn run_scrape(config: &Config) -> Result<()> {
    let report = scrape::run(config).await?;

    println!();
    println!("{}", "Scrape complete".green().bold());
    println!("  Products: {}", report.records.to_string().cyan());
    if report.skipped > 0 {
        println!("  Skipped:  {}", report.skipped.to_string().yellow());
    }
    println!(
        "  Snapshot: {}",
        config.snapshot_path.display().to_string().bright_white()
    );
    println!();

    Ok(())
}
