// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base URL of the password API
    #[arg(long, env = "API_URL")]
    pub api_url: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
