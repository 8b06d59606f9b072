use anyhow::anyhow;
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::invalid_input;

/// (right, down) steps checked in part two
const SLOPES: [(usize, usize); 5] = [(1, 1), (3, 1), (5, 1), (7, 1), (1, 2)];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 3, tags = ["2020", "grid"])]
pub struct Solver;

/// Tree map that repeats infinitely to the right.
#[derive(Debug)]
pub struct Forest {
    trees: Vec<Vec<bool>>,
    width: usize,
}

impl Forest {
    fn trees_on_slope(&self, right: usize, down: usize) -> usize {
        self.trees
            .iter()
            .step_by(down)
            .enumerate()
            .filter(|(step, row)| row[(step * right) % self.width])
            .count()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Forest;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let trees = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(idx, line)| {
                line.bytes()
                    .map(|b| match b {
                        b'#' => Ok(true),
                        b'.' => Ok(false),
                        other => Err(anyhow!("(line {}) unexpected {:?}", idx + 1, other as char)),
                    })
                    .collect::<anyhow::Result<Vec<_>>>()
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(invalid_input)?;

        let width = trees
            .first()
            .map(Vec::len)
            .ok_or_else(|| ParseError::MissingData("empty map".into()))?;
        if width == 0 || trees.iter().any(|row| row.len() != width) {
            return Err(ParseError::InvalidFormat("map rows differ in width".into()));
        }

        Ok(Forest { trees, width })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.trees_on_slope(3, 1).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let product: usize = SLOPES
            .iter()
            .map(|&(right, down)| shared.trees_on_slope(right, down))
            .product();
        Ok(product.to_string())
    }
}
