use anyhow::{anyhow, ensure};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;

use crate::{invalid_input, solve_failed};

const PASS_LEN: usize = 10;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 5, tags = ["2020", "easy"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData<'a> {
    passes: Vec<&'a str>,
    sorted_seat_ids: Option<Vec<u16>>,
}

impl SharedData<'_> {
    fn sorted_seat_ids(&mut self) -> &[u16] {
        let passes = &self.passes;
        self.sorted_seat_ids.get_or_insert_with(|| {
            let mut ids: Vec<u16> = passes.iter().map(|pass| seat_id(pass)).collect();
            ids.sort_unstable();
            ids
        })
    }
}

/// Row and column codes together form a 10-bit number: F/L are 0, B/R are 1.
fn seat_id(pass: &str) -> u16 {
    pass.bytes()
        .fold(0, |id, b| (id << 1) | u16::from(matches!(b, b'B' | b'R')))
}

fn validate_pass(pass: &str) -> anyhow::Result<&str> {
    ensure!(pass.len() == PASS_LEN, "expected {} characters", PASS_LEN);
    let (row, column) = pass.as_bytes().split_at(7);
    ensure!(
        row.iter().all(|b| matches!(b, b'F' | b'B')),
        "row code in {:?} must use F/B",
        pass
    );
    ensure!(
        column.iter().all(|b| matches!(b, b'L' | b'R')),
        "column code in {:?} must use L/R",
        pass
    );
    Ok(pass)
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(idx, line)| validate_pass(line).map_err(|e| anyhow!("(line {}) {}", idx + 1, e)))
            .collect::<anyhow::Result<Vec<_>>>()
            .map(|passes| SharedData {
                passes,
                sorted_seat_ids: None,
            })
            .map_err(invalid_input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .sorted_seat_ids()
            .last()
            .map(u16::to_string)
            .ok_or_else(|| solve_failed("no boarding passes"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Our seat is the only gap whose both neighbours are taken
        shared
            .sorted_seat_ids()
            .iter()
            .tuple_windows()
            .find(|&(&a, &b)| b - a == 2)
            .map(|(a, _)| (a + 1).to_string())
            .ok_or_else(|| solve_failed("no free seat between two taken seats"))
    }
}
