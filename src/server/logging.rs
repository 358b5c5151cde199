//! Process-wide logging setup.
//!
//! stdout is reserved for the MCP protocol, so logs go to stderr by default,
//! or to a file when the caller passes `--log-file`. Verbosity is controlled
//! through `RUST_LOG` and defaults to `info`.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

pub fn init(log_file: Option<&Path>) -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        None => {
            builder.target(Target::Stderr);
        }
    }

    builder.try_init().context("initializing logger")?;
    Ok(())
}
