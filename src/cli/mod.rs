//! CLI module for the superhero roster service

pub mod serve;

use clap::{Parser, Subcommand};

/// Superhero Roster - in-memory hero and squadron management
#[derive(Parser)]
#[command(name = "superhero-roster")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve(serve::ServeArgs),
}
