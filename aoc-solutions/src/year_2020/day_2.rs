use std::sync::LazyLock;

use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use regex::Regex;

use crate::invalid_input;

static ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)-(\d+) ([a-z]): ([a-z]+)$").expect("valid regex"));

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 2, tags = ["2020", "easy", "parsing"])]
pub struct Solver;

/// One `lo-hi c: password` line; the password borrows from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordEntry<'a> {
    lo: usize,
    hi: usize,
    letter: u8,
    password: &'a str,
}

impl PasswordEntry<'_> {
    fn valid_by_count(&self) -> bool {
        let count = self.password.bytes().filter(|&b| b == self.letter).count();
        (self.lo..=self.hi).contains(&count)
    }

    fn valid_by_position(&self) -> bool {
        let at = |pos: usize| {
            pos.checked_sub(1)
                .and_then(|i| self.password.as_bytes().get(i))
                == Some(&self.letter)
        };
        at(self.lo) != at(self.hi)
    }
}

fn parse_entry(line: &str) -> anyhow::Result<PasswordEntry<'_>> {
    let caps = ENTRY
        .captures(line.trim())
        .ok_or_else(|| anyhow!("expected `lo-hi c: password`, got {:?}", line))?;
    let (_, [lo, hi, letter, password]) = caps.extract();

    let lo: usize = lo.parse().context("lower bound")?;
    let hi: usize = hi.parse().context("upper bound")?;
    if lo > hi {
        return Err(anyhow!("bounds {}-{} are reversed", lo, hi));
    }

    Ok(PasswordEntry {
        lo,
        hi,
        letter: letter.as_bytes()[0],
        password,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<PasswordEntry<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .map(|(idx, line)| parse_entry(line).with_context(|| format!("line {}", idx + 1)))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(invalid_input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|e| e.valid_by_count()).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|e| e.valid_by_position()).count().to_string())
    }
}
