//! CLI module for the Organization Registry
//!
//! Provides subcommands for running the service:
//! - `serve`: HTTP API server (default)

pub mod serve;

use clap::{Parser, Subcommand};

/// Organization Registry - multi-tenant organization management API
#[derive(Parser)]
#[command(name = "org-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,
}
