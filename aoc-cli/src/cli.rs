//! CLI argument parsing using clap

use clap::Parser;

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(
    name = "aoc",
    about = "Run the bundled Advent of Code solvers",
    version
)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Quiet mode - only output answers
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log registry and executor progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
