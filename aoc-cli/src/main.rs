//! AOC CLI - Command-line interface for running the bundled Advent of Code solvers

mod cli;
mod config;
mod error;
mod executor;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use log::{debug, info};
use output::OutputFormatter;
use simplelog::{ColorChoice, TermLogger, TerminalMode};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    init_logger(&config)?;

    let registry = build_registry(&config.tags)?;
    debug!("{} solver(s) registered", registry.storage().len());

    let executor = Executor::new(registry, &config);
    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }
    info!("Running {} solver(s)...", work_items.len());

    let formatter = OutputFormatter::new(config.quiet);
    let mut results = Vec::new();
    let outcome = executor.execute(|result| {
        formatter.print_result(&result);
        results.push(result);
    });
    formatter.print_summary(&results);

    if let Err(e) = &outcome {
        for failure in e.flatten() {
            debug!("failure: {}", failure);
        }
    }
    outcome.map_err(CliError::Executor)
}

/// Log to stderr so answers on stdout stay clean
fn init_logger(config: &Config) -> Result<(), CliError> {
    TermLogger::init(
        config.log_level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
