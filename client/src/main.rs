use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use config::RunConfig;
use libgame::Grid;
use rand::{SeedableRng, rngs::StdRng};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod output;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version requests come through here too.
        Err(e) if !e.use_stderr() => {
            print!("{e}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprint!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(config) => {
            println!(
                "{} {} generations of a {}x{} grid to {}",
                "Wrote".green(),
                config.generations,
                config.height,
                config.width,
                config.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {e:?}", "!".red());
            ExitCode::FAILURE
        }
    }
}

#[instrument(skip_all)]
fn run(cli: &Cli) -> anyhow::Result<RunConfig> {
    let config = RunConfig::from_cli(cli).context("Invalid arguments")?;
    info!(?config, "starting run");

    let mut grid = match config.seed {
        Some(seed) => Grid::new_with_rng(config.width, config.height, &mut StdRng::seed_from_u64(seed)),
        None => Grid::new(config.width, config.height),
    }
    .context("Couldn't create grid")?;

    output::write_run_file(&config.output, &mut grid, config.generations)?;
    info!(population = grid.population(), "run finished");

    Ok(config)
}
