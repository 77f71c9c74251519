//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use disclo_core::config::DiscloConfig;
use std::path::PathBuf;

pub mod reports;
pub mod resolve;
pub mod serve;

/// Disclo - disclosure announcement lookup service
#[derive(Parser)]
#[command(name = "disclo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./disclo.toml when present)
    #[arg(short, long, global = true, env = "DISCLO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(serve::ServeArgs),

    /// List announcements for a stock code
    Reports(reports::ReportsArgs),

    /// Resolve an announcement link to its download URL
    Resolve(resolve::ResolveArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        let config = DiscloConfig::discover(self.config.as_deref(), &cwd)?;

        match self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Reports(args) => reports::execute(args, &config).await,
            Commands::Resolve(args) => resolve::execute(args, &config),
        }
    }
}
