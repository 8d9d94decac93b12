//! gridlens - select, search and sort tabular data from a command stream

mod runtime;

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use clap::Parser;

use gridlens::cli::CliArgs;
use gridlens::config::GridConfig;

use runtime::App;

fn main() -> Result<()> {
    gridlens::tracing::init();

    let args = CliArgs::parse();
    let startup = args
        .into_config(GridConfig::load())
        .map_err(anyhow::Error::msg)?;

    let stdout = io::stdout();
    let mut app = App::new(&startup, stdout.lock())?;

    match &startup.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            app.run(BufReader::new(file))
        }
        None => app.run(io::stdin().lock()),
    }
}
