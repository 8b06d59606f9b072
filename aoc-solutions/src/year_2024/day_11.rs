use anyhow::Context;
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use log::debug;

use crate::{invalid_input, solve_failed};
use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 11, tags = ["2024", "dp", "memoization"])]
pub struct Solver;

/// (stone, blinks remaining)
type Key = (u128, u8);

/// Number of stones a single stone turns into after some blinks; `None` once
/// a stone value or a count no longer fits.
pub struct StoneCount;

impl DpProblem<Key, Option<u64>> for StoneCount {
    fn deps(&self, &(stone, blinks): &Key) -> Vec<Key> {
        if blinks == 0 {
            return vec![];
        }
        blink(stone)
            .map(|next| next.map(|s| (s, blinks - 1)).collect())
            .unwrap_or_default()
    }

    fn compute(&self, &(_, blinks): &Key, deps: Vec<Option<u64>>) -> Option<u64> {
        if blinks == 0 {
            return Some(1);
        }
        // A blink always yields at least one stone, so no deps means overflow
        if deps.is_empty() {
            return None;
        }
        deps.into_iter().try_fold(0u64, |acc, count| acc.checked_add(count?))
    }
}

/// Splits a number with an even digit count into its left and right halves.
fn split_middle(n: u128) -> Option<(u128, u128)> {
    let digits = n.checked_ilog10()? + 1;
    if digits % 2 != 0 {
        return None;
    }
    let pow = 10u128.pow(digits / 2);
    Some((n / pow, n % pow))
}

/// Stones produced by one blink, or `None` if the stone grows past `u128`.
fn blink(stone: u128) -> Option<impl Iterator<Item = u128>> {
    let (first, second) = if stone == 0 {
        (1, None)
    } else if let Some((left, right)) = split_middle(stone) {
        (left, Some(right))
    } else {
        (stone.checked_mul(2024)?, None)
    };
    Some(std::iter::once(first).chain(second))
}

pub struct SharedData {
    stones: Vec<u128>,
    counts: DpCache<Key, Option<u64>, HashMapBackend<Key, Option<u64>>, StoneCount>,
}

impl SharedData {
    fn count_after(&self, blinks: u8) -> Result<u64, SolveError> {
        let total = self
            .stones
            .iter()
            .try_fold(0u64, |acc, &stone| {
                acc.checked_add(self.counts.get(&(stone, blinks))?)
            });
        debug!("{} blinks: {} memoized states", blinks, self.counts.len());
        total.ok_or_else(|| solve_failed(format!("stone count overflows after {} blinks", blinks)))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let stones = input
            .split_whitespace()
            .map(|s| s.parse::<u128>().with_context(|| format!("bad stone {:?}", s)))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(invalid_input)?;
        if stones.is_empty() {
            return Err(ParseError::MissingData("no stones".into()));
        }
        Ok(SharedData {
            stones,
            counts: DpCache::with_problem(HashMapBackend::new(), StoneCount),
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.count_after(25).map(|n| n.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.count_after(75).map(|n| n.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::solve_bundled;

    #[test]
    fn test_bundled_answers() {
        assert_eq!(solve_bundled::<Solver>(2024, 11), ["55312", "65601038650482"]);
    }

    #[test]
    fn test_split_middle() {
        assert_eq!(split_middle(1234), Some((12, 34)));
        assert_eq!(split_middle(12345), None);
        assert_eq!(split_middle(1000), Some((10, 0)));
        assert_eq!(split_middle(10), Some((1, 0)));
        assert_eq!(split_middle(7), None);
        assert_eq!(split_middle(0), None);
    }

    #[test]
    fn test_single_blink() {
        let blinked: Vec<u128> = [0, 1, 10, 99, 999]
            .into_iter()
            .flat_map(|stone| blink(stone).unwrap())
            .collect();
        assert_eq!(blinked, [1, 2024, 1, 0, 9, 9, 2021976]);
    }

    #[test]
    fn test_small_blink_counts() {
        let shared = Solver::parse("125 17").unwrap();
        assert_eq!(shared.count_after(0).unwrap(), 2);
        assert_eq!(shared.count_after(1).unwrap(), 3);
        assert_eq!(shared.count_after(6).unwrap(), 22);
    }

    #[test]
    fn test_memo_reused_between_parts() {
        let mut shared = Solver::parse("125 17").unwrap();
        <Solver as PartSolver<1>>::solve(&mut shared).unwrap();
        let after_first = shared.counts.len();
        assert!(after_first > 0);
        <Solver as PartSolver<2>>::solve(&mut shared).unwrap();
        assert!(shared.counts.len() > after_first);
    }

    #[test]
    fn test_stones_past_u64_after_multiplying() {
        // 19 digits, so the first blink multiplies it past u64::MAX
        let mut shared = Solver::parse("1000000000000000000").unwrap();
        assert!(shared.count_after(1).is_ok());
        assert!(<Solver as PartSolver<1>>::solve(&mut shared).is_ok());
    }

    #[test]
    fn test_stone_past_u128_fails_instead_of_panicking() {
        assert_eq!(blink(u128::MAX).map(Iterator::count), None);
        let mut shared = Solver::parse(&u128::MAX.to_string()).unwrap();
        assert!(<Solver as PartSolver<1>>::solve(&mut shared).is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert!(Solver::parse("").is_err());
        assert!(Solver::parse("12 x").is_err());
        assert!(Solver::parse("-1").is_err());
    }
}
