// src/bin/cli.rs
use poolcal::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run_from_args().map_err(|e| color_eyre::eyre::eyre!("{e}"))
}
