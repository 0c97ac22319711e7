//! Binary crate for the `weathercmd` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Orchestrating location resolution, fetch, and table construction
//! - Printing tables and the busy status line

use clap::Parser;

mod cli;
mod commands;
mod render;
mod status;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
