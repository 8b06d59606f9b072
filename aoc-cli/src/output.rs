//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::{DateTime, TimeDelta, Utc};

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: DateTime<Utc>,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Utc::now(),
        }
    }

    /// Format and print a single result; failures go to stderr
    pub fn print_result(&self, result: &SolverResult) {
        let line = self.format_result(result);
        if result.answer.is_ok() {
            println!("{}", line);
        } else {
            eprintln!("{}", line);
        }
    }

    fn format_result(&self, result: &SolverResult) -> String {
        let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);

        match (&result.answer, self.quiet) {
            (Ok(answer), true) => answer.clone(),
            (Ok(answer), false) => {
                let parse_timing = result
                    .parse_duration
                    .map(|d| format!("parse: {}, ", format_duration(d)))
                    .unwrap_or_default();
                format!(
                    "{}: {} ({}solve: {})",
                    prefix,
                    answer,
                    parse_timing,
                    format_duration(result.solve_duration)
                )
            }
            (Err(e), true) => format!("Error: {}", e),
            (Err(e), false) => format!("{}: Error - {}", prefix, e),
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }
        println!();
        println!("{}", format_summary(results, Utc::now() - self.start_time));
    }
}

/// Summary block: counts, summed parse and solve time, and wall-clock time
fn format_summary(results: &[SolverResult], elapsed: TimeDelta) -> String {
    let total = results.len();
    let successes = results.iter().filter(|r| r.answer.is_ok()).count();
    let failures = total - successes;

    let total_parse_time: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
    let total_solve_time: TimeDelta = results
        .iter()
        .filter(|r| r.answer.is_ok())
        .map(|r| r.solve_duration)
        .sum();

    [
        "--- Summary ---".to_string(),
        format!("Parts: {} solved, {} failed", successes, failures),
        format!("Total parse time: {}", format_duration(total_parse_time)),
        format!("Total solve time: {}", format_duration(total_solve_time)),
        format!("Elapsed wall-clock time: {}", format_duration(elapsed)),
    ]
    .join("\n")
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
