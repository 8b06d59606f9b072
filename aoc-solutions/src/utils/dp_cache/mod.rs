//! Dynamic Programming Cache with Lazy Evaluation
//!
//! Memoization for recursions whose values depend on other values in a
//! directed acyclic graph. Implement [`DpProblem`] to describe the
//! dependencies and the combining step, then query a [`DpCache`].
//!
//! Values are stored in a [`Backend`]; [`HashMapBackend`] handles any
//! hashable index, including composite keys.
//!
//! # Warning: Cycle Behavior
//!
//! **The cache does NOT detect cycles.** A cyclic dependency graph recurses
//! until the stack overflows.

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend};
pub use cache::DpCache;
pub use problem::DpProblem;
