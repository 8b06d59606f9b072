//! Advent of Code puzzle solutions with automatic registration
//!
//! Solutions are organized by year, one module per day. Each day derives
//! `AutoRegisterSolver`, so linking this crate is enough for
//! `SolverRegistryBuilder::register_all_plugins` to find it. The puzzle
//! inputs ship with the crate, see [`inputs`].

pub mod inputs;
pub mod utils;

#[cfg(feature = "year-2020")]
pub mod year_2020;

#[cfg(feature = "year-2022")]
pub mod year_2022;

#[cfg(feature = "year-2024")]
pub mod year_2024;

use aoc_solver::{ParseError, SolveError};

/// Map an `anyhow` parse failure into the framework's parse error.
pub(crate) fn invalid_input(e: anyhow::Error) -> ParseError {
    ParseError::InvalidFormat(format!("{:#}", e))
}

/// Wrap a message as a failed solve.
pub(crate) fn solve_failed(msg: impl Into<String>) -> SolveError {
    SolveError::SolveFailed(msg.into().into())
}

#[cfg(test)]
pub(crate) mod test_support {
    use aoc_solver::{DynSolver, SolverExt, SolverInstance};

    /// Solve every part of `S` against its bundled input.
    pub fn solve_bundled<S: SolverExt>(year: u16, day: u8) -> Vec<String> {
        let input = crate::inputs::bundled(year, day).expect("bundled input");
        let mut instance = SolverInstance::<S>::new(year, day, input).expect("parse");
        (1..=S::PARTS)
            .map(|part| instance.solve(part).expect("solve").answer)
            .collect()
    }
}
