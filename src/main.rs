use anyhow::Result;
use clap::Parser;
use std::io;

use client_registry::config::{init_logging, Config};
use client_registry::{run_demo, Shell};

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(config.log_level)?;

    if config.demo {
        // Demo mode
        run_demo(io::stdout().lock())?;
    } else {
        // Interactive mode (default)
        let mut shell = Shell::new(io::stdin().lock(), io::stdout().lock()).quiet(config.quiet);
        shell.run()?;
    }

    Ok(())
}
