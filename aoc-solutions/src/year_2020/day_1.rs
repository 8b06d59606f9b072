use anyhow::Context;
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;

use crate::{invalid_input, solve_failed};

const TARGET: u32 = 2020;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 1, tags = ["2020", "easy"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u32>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                line.trim()
                    .parse::<u32>()
                    .with_context(|| format!("(line {}) expected an expense entry", idx + 1))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(invalid_input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        product_of_entries_summing_to(shared, 2)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        product_of_entries_summing_to(shared, 3)
    }
}

/// Product of the first `k` distinct entries whose sum is [`TARGET`].
fn product_of_entries_summing_to(entries: &[u32], k: usize) -> Result<String, SolveError> {
    entries
        .iter()
        .combinations(k)
        .find(|combo| combo.iter().map(|&&e| u64::from(e)).sum::<u64>() == u64::from(TARGET))
        .map(|combo| combo.into_iter().map(|&e| u64::from(e)).product::<u64>().to_string())
        .ok_or_else(|| solve_failed(format!("no {} entries sum to {}", k, TARGET)))
}
