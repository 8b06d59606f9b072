//! Advent of Code Solver Library
//!
//! A small, type-safe framework for the puzzle collection. Each puzzle day is
//! a solver with its own input parser and one implementation per part.
//!
//! # Overview
//!
//! - [`AocParser`] turns raw input into the solver's shared data
//! - [`PartSolver<N>`] computes the answer for part `N`
//! - [`Solver`] ties the parts together; usually derived with `#[derive(AocSolver)]`
//! - [`SolverRegistry`] maps year-day keys to factories that build [`DynSolver`]s
//! - `#[derive(AutoRegisterSolver)]` submits a solver to the registry at link time
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Calories;
//!
//! impl AocParser for Calories {
//!     type SharedData<'a> = Vec<u32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Calories {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<u32>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Calories {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().max().copied().unwrap_or_default().to_string())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register::<Calories>(2022, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2022, 1, "1000\n2000\n3000").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6000");
//! assert_eq!(solver.solve(2).unwrap().answer, "3000");
//! ```
//!
//! # Part Dependencies
//!
//! Parts run in order against the same `&mut SharedData`, so a later part can
//! reuse anything an earlier part stored there.

mod error;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverFactoryStorage, SolverPlugin,
    SolverRegistry, SolverRegistryBuilder, BASE_YEAR, CAPACITY, DAYS_PER_YEAR, MAX_YEARS,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macros
pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
