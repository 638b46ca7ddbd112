use std::path::Path;

use clap::Parser;
use miette::Result;
use swatch::cli::{Cli, Commands};
use swatch::config::Config;
use swatch::output::Printer;
use tracing::Level;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_target(false)
        .init();

    let printer = Printer::new();

    match cli.command {
        Commands::Colors(args) => {
            let config = load_config(cli.config.as_deref())?;
            swatch::cli::colors::run(args, &config, &printer)?;
        }
        Commands::Strips(args) => {
            let config = load_config(cli.config.as_deref())?;
            swatch::cli::strips::run(args, &config, &printer)?;
        }
        Commands::Completions(args) => swatch::cli::completions::run(args)?,
    }

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> swatch::Result<Config> {
    let cwd = std::env::current_dir()?;
    Config::resolve(explicit, &cwd)
}
