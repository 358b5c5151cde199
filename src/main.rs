//! tokendiff MCP server entry point.
//!
//! Serves the `analyze_tokens` and `generate_diff` tools to MCP clients over
//! stdio. stdout carries the protocol, so all diagnostics go to stderr or the
//! file given with `--log-file`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tokendiff_mcp::server;

#[derive(Parser, Debug)]
#[command(name = "tokendiff-mcp")]
#[command(version)]
#[command(about = "MCP server for token counting and SEARCH/REPLACE diff generation", long_about = None)]
struct Args {
    /// Append diagnostics to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    server::logging::init(args.log_file.as_deref())?;
    server::run().await.context("MCP server failed")?;
    Ok(())
}
