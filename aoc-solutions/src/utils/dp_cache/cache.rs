//! Single-threaded DP cache implementation.

use std::cell::RefCell;
use std::marker::PhantomData;

use super::backend::Backend;
use super::problem::DpProblem;

/// A dynamic programming cache with lazy evaluation and dependency resolution.
///
/// Each index is computed at most once; dependencies are resolved
/// recursively on first access.
///
/// # Warning: No Cycle Detection
///
/// Dependencies must form a DAG. A cycle recurses until the stack overflows.
///
/// # Example
///
/// ```rust
/// use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
///
/// struct Collatz;
///
/// impl DpProblem<u64, u64> for Collatz {
///     fn deps(&self, n: &u64) -> Vec<u64> {
///         if *n <= 1 { vec![] }
///         else if n % 2 == 0 { vec![n / 2] }
///         else { vec![3 * n + 1] }
///     }
///     fn compute(&self, _n: &u64, deps: Vec<u64>) -> u64 {
///         deps.first().map_or(0, |d| d + 1)
///     }
/// }
///
/// let cache = DpCache::with_problem(HashMapBackend::new(), Collatz);
/// assert_eq!(cache.get(&27), 111);
/// ```
pub struct DpCache<I, K, B, P>
where
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    backend: RefCell<B>,
    problem: P,
    _phantom: PhantomData<(I, K)>,
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    /// Creates a new DpCache with the given backend and problem definition.
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            _phantom: PhantomData,
        }
    }

    /// Retrieves the value for the given index, computing it if necessary.
    pub fn get(&self, index: &I) -> K {
        if let Some(value) = self.backend.borrow().get(index) {
            return value.clone();
        }

        // No borrow may be held while dependencies recurse back into `get`.
        let dep_values: Vec<K> = self
            .problem
            .deps(index)
            .into_iter()
            .map(|dep| self.get(&dep))
            .collect();

        self.backend
            .borrow_mut()
            .get_or_insert(index.clone(), || self.problem.compute(index, dep_values))
            .clone()
    }

    /// Number of values computed so far.
    pub fn len(&self) -> usize {
        self.backend.borrow().len()
    }

    /// Whether nothing has been computed yet.
    pub fn is_empty(&self) -> bool {
        self.backend.borrow().is_empty()
    }

    /// The problem definition driving this cache.
    pub fn problem(&self) -> &P {
        &self.problem
    }
}
