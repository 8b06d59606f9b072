//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parses puzzle input into the data shared by every part of a day.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// assert_eq!(Depths::parse("199\n200").unwrap(), vec![199, 200]);
/// ```
pub trait AocParser {
    /// Parsed input plus any intermediate results a later part wants to reuse.
    ///
    /// Owned structs are the common case; `&'a str` works when the raw
    /// input is all a solver needs.
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// Implement once per part and let `#[derive(AocSolver)]` generate the
/// [`Solver`] dispatch.
///
/// ```
/// use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
///
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 1)]
/// struct Frequency;
///
/// impl AocParser for Frequency {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .split_whitespace()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Frequency {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().sum::<i64>().to_string())
///     }
/// }
///
/// let mut shared = Frequency::parse("+1 -2 +3 +1").unwrap();
/// assert_eq!(Frequency::solve_part(&mut shared, 1).unwrap(), "3");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part, possibly caching work in `shared` for later parts.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete solver for one year-day puzzle.
///
/// Usually derived with `#[derive(AocSolver)]`, which routes `solve_part`
/// to the matching [`PartSolver`] implementation.
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` - An error occurred while solving
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked solving on top of [`Solver`].
pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`], but rejects parts outside `1..=PARTS`
    /// with `SolveError::PartOutOfRange` before dispatching.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
