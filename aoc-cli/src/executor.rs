//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use aoc_solver::{DynSolver, SolverError, SolverRegistry};
use chrono::TimeDelta;
use log::debug;
use std::ops::RangeInclusive;

/// Looks up the puzzle input for a year/day
pub type InputSource = fn(u16, u8) -> Option<&'static str>;

/// Result from a single solver execution
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    /// Set on the first part run for a puzzle; parsing happens once per puzzle
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs every selected solver in (year, day, part) order
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputSource,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor reading the inputs bundled with the solutions
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: aoc_solutions::inputs::bundled,
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    #[cfg(test)]
    pub fn with_inputs(mut self, inputs: InputSource) -> Self {
        self.inputs = inputs;
        self
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .storage()
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Execute all work items, handing each result to `emit` as soon as it is ready
    ///
    /// Every failure still produces a result; the failures are also returned
    /// together once all work items have run.
    pub fn execute<F>(&self, mut emit: F) -> Result<(), ArcExecutorError>
    where
        F: FnMut(SolverResult),
    {
        let mut collected_error: Option<ArcExecutorError> = None;
        for work in self.collect_work_items() {
            if let Err(e) = self.run_solver(&work, &mut emit) {
                collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
            }
        }
        collected_error.map_or(Ok(()), Err)
    }

    /// Parse once, then solve the requested parts in order
    fn run_solver<F>(&self, work: &WorkItem, emit: &mut F) -> Result<(), ArcExecutorError>
    where
        F: FnMut(SolverResult),
    {
        let (year, day) = (work.year, work.day);
        debug!("running {}/{:02} parts {:?}", year, day, work.parts);

        let mut solver = match self.create_solver(year, day) {
            Ok(solver) => solver,
            Err(e) => {
                for part in work.parts.clone() {
                    emit(make_error_result(year, day, part, e.clone()));
                }
                return Err(e);
            }
        };

        let mut parse_duration = Some(solver.parse_duration());
        let mut collected_error: Option<ArcExecutorError> = None;
        for part in work.parts.clone() {
            let mut result = solve_part(year, day, part, &mut *solver);
            result.parse_duration = parse_duration.take();
            if let Err(e) = &result.answer {
                collected_error = Some(ArcExecutorError::combine_opt(collected_error, e.clone()));
            }
            emit(result);
        }
        collected_error.map_or(Ok(()), Err)
    }

    fn create_solver(&self, year: u16, day: u8) -> Result<Box<dyn DynSolver>, ArcExecutorError> {
        let input = (self.inputs)(year, day).ok_or(ExecutorError::MissingInput { year, day })?;
        self.registry
            .create_solver(year, day, input)
            .map_err(|source| ExecutorError::Solver { year, day, source }.into())
    }
}

/// Result for a part that never got to run
fn make_error_result(year: u16, day: u8, part: u8, error: ArcExecutorError) -> SolverResult {
    SolverResult {
        year,
        day,
        part,
        answer: Err(error),
        parse_duration: None,
        solve_duration: TimeDelta::zero(),
    }
}

/// Solve a single part
fn solve_part(year: u16, day: u8, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    match solver.solve(part) {
        Ok(solved) => {
            debug!("{}/{:02} part {} solved in {}", year, day, part, solved.duration());
            SolverResult {
                year,
                day,
                part,
                solve_duration: solved.duration(),
                answer: Ok(solved.answer),
                parse_duration: None,
            }
        }
        Err(e) => {
            let source = SolverError::SolveError(e);
            make_error_result(year, day, part, ExecutorError::Solver { year, day, source }.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverRegistryBuilder};

    struct Words;

    impl AocParser for Words {
        type SharedData<'a> = Vec<&'a str>;

        fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
            if input.trim().is_empty() {
                return Err(ParseError::MissingData("no words".into()));
            }
            Ok(input.split_whitespace().collect())
        }
    }

    impl Solver for Words {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(shared.len().to_string()),
                2 if shared.contains(&"fail") => Err(SolveError::SolveFailed("told to".into())),
                2 => Ok(shared.join("-")),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    fn inputs(year: u16, day: u8) -> Option<&'static str> {
        match (year, day) {
            (2020, 1) => Some("a b c"),
            (2020, 2) => Some("x fail"),
            (2020, 3) => Some("   "),
            _ => None,
        }
    }

    fn executor(days: &[u8], config: &Config) -> Executor {
        let registry = days
            .iter()
            .try_fold(SolverRegistryBuilder::new(), |b, &day| {
                b.register::<Words>(2020, day)
            })
            .unwrap()
            .build();
        Executor::new(registry, config).with_inputs(inputs)
    }

    fn config() -> Config {
        Config {
            year_filter: None,
            day_filter: None,
            part_filter: None,
            tags: vec![],
            quiet: false,
            log_level: log::LevelFilter::Off,
        }
    }

    fn run(executor: &Executor) -> (Vec<SolverResult>, Result<(), ArcExecutorError>) {
        let mut results = Vec::new();
        let outcome = executor.execute(|r| results.push(r));
        (results, outcome)
    }

    #[test]
    fn test_results_in_order_with_parse_time_once() {
        let (results, outcome) = run(&executor(&[1], &config()));
        assert!(outcome.is_ok());

        let answers: Vec<_> = results
            .iter()
            .map(|r| (r.part, r.answer.as_ref().unwrap().as_str()))
            .collect();
        assert_eq!(answers, [(1, "3"), (2, "a-b-c")]);
        assert!(results[0].parse_duration.is_some());
        assert!(results[1].parse_duration.is_none());
    }

    #[test]
    fn test_filters() {
        let mut config = config();
        config.day_filter = Some(2);
        config.part_filter = Some(1);
        let items = executor(&[1, 2], &config).collect_work_items();
        assert_eq!(
            items,
            [WorkItem {
                year: 2020,
                day: 2,
                parts: 1..=1
            }]
        );

        config.year_filter = Some(2021);
        assert!(executor(&[1, 2], &config).collect_work_items().is_empty());
    }

    #[test]
    fn test_failures_reported_and_collected() {
        // day 2 fails part 2, day 3 fails parsing, day 4 has no input
        let (results, outcome) = run(&executor(&[1, 2, 3, 4], &config()));

        let failed: Vec<_> = results
            .iter()
            .filter(|r| r.answer.is_err())
            .map(|r| (r.day, r.part))
            .collect();
        assert_eq!(failed, [(2, 2), (3, 1), (3, 2), (4, 1), (4, 2)]);
        assert_eq!(results.len(), 8);

        let err = outcome.unwrap_err();
        assert_eq!(err.flatten().len(), 3);
        assert!(matches!(
            err.flatten()[2].inner(),
            ExecutorError::MissingInput { year: 2020, day: 4 }
        ));
    }
}
