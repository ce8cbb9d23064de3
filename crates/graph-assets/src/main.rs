// File: crates/graph-assets/src/main.rs
// Summary: Entry point; renders the placeholder charts into <root>/frontend/public.

use anyhow::Result;
use clap::Parser;
use graph_assets::{logging, run, Args, Config};

fn main() -> Result<()> {
    logging::init();
    let config = Config::from_args(Args::parse())?;
    run(&config, &mut std::io::stdout().lock())?;
    Ok(())
}
