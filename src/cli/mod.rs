//! CLI module for TypeTutor
//!
//! Provides subcommands:
//! - `serve`: run the API server (default)
//! - `chunk`: chunk a text file into practice passages from the command line

pub mod chunk;
pub mod serve;

use clap::{Parser, Subcommand};

/// TypeTutor - typing practice backend
#[derive(Parser)]
#[command(name = "typetutor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,

    /// Chunk a text file into practice passages and print them as JSON
    Chunk(chunk::ChunkArgs),
}
