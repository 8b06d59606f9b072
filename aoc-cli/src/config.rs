//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use aoc_solver::{BASE_YEAR, MAX_YEARS};
use itertools::Itertools;
use log::LevelFilter;

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags a solver must all carry to run
    pub tags: Vec<String>,
    /// Quiet mode
    pub quiet: bool,
    /// Threshold for the terminal logger
    pub log_level: LevelFilter,
}

impl Config {
    /// Build config from CLI args, rejecting years the registry cannot hold
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let last_year = BASE_YEAR + MAX_YEARS as u16 - 1;
        if let Some(year) = args.year
            && !(BASE_YEAR..=last_year).contains(&year)
        {
            return Err(CliError::Config(format!(
                "year {} is outside {}..={}",
                year, BASE_YEAR, last_year
            )));
        }

        let tags = args
            .tags
            .iter()
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
            .unique()
            .map(str::to_owned)
            .collect();

        let log_level = if args.verbose {
            LevelFilter::Debug
        } else if args.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        };

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags,
            quiet: args.quiet,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(argv: &[&str]) -> Result<Config, CliError> {
        let args = Args::try_parse_from(std::iter::once("aoc").chain(argv.iter().copied()))
            .expect("valid arguments");
        Config::from_args(args)
    }

    #[test]
    fn test_defaults_run_everything() {
        let config = config(&[]).unwrap();
        assert_eq!(config.year_filter, None);
        assert_eq!(config.day_filter, None);
        assert_eq!(config.part_filter, None);
        assert!(config.tags.is_empty());
        assert!(!config.quiet);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_filters_pass_through() {
        let config = config(&["--year", "2020", "-d", "8", "-p", "2"]).unwrap();
        assert_eq!(
            (config.year_filter, config.day_filter, config.part_filter),
            (Some(2020), Some(8), Some(2))
        );
    }

    #[test]
    fn test_tags_trimmed_and_deduplicated() {
        let config = config(&["--tags", "easy, 2020,,easy"]).unwrap();
        assert_eq!(config.tags, ["easy", "2020"]);
    }

    #[test]
    fn test_log_level_follows_flags() {
        assert_eq!(config(&["-v"]).unwrap().log_level, LevelFilter::Debug);
        assert_eq!(config(&["-q"]).unwrap().log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_year_out_of_range() {
        assert!(matches!(config(&["-y", "2014"]), Err(CliError::Config(_))));
        assert!(matches!(config(&["-y", "2035"]), Err(CliError::Config(_))));
        assert!(config(&["-y", "2034"]).is_ok());
    }

    #[test]
    fn test_clap_rejects_bad_values() {
        assert!(Args::try_parse_from(["aoc", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--part", "3"]).is_err());
        assert!(Args::try_parse_from(["aoc", "-q", "-v"]).is_err());
    }
}
