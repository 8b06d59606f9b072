use anyhow::{anyhow, bail, Context};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use log::debug;

use crate::{invalid_input, solve_failed};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 8, tags = ["2020", "interpreter"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Acc,
    Jmp,
    Nop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    op: Op,
    arg: i64,
}

impl Instruction {
    /// Swaps `jmp` and `nop`; `acc` has no counterpart.
    fn flipped(self) -> Option<Self> {
        let op = match self.op {
            Op::Jmp => Op::Nop,
            Op::Nop => Op::Jmp,
            Op::Acc => return None,
        };
        Some(Instruction { op, ..self })
    }
}

/// How a run of the program ended, with the accumulator at that point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Instruction pointer landed exactly one past the last instruction.
    Terminated(i64),
    /// The next instruction had already been executed once.
    Looped(i64),
    /// A jump left the program anywhere other than its end.
    OutOfBounds(i64),
}

/// Runs `program`, optionally with the instruction at `patch` replaced.
fn run(program: &[Instruction], patch: Option<(usize, Instruction)>) -> Outcome {
    let mut visited = vec![false; program.len()];
    let mut acc = 0i64;
    let mut ip = 0usize;

    loop {
        if ip == program.len() {
            return Outcome::Terminated(acc);
        }
        if visited[ip] {
            return Outcome::Looped(acc);
        }
        visited[ip] = true;

        let instruction = match patch {
            Some((at, replacement)) if at == ip => replacement,
            _ => program[ip],
        };
        let offset = match instruction.op {
            Op::Acc => {
                acc += instruction.arg;
                1
            }
            Op::Jmp => instruction.arg,
            Op::Nop => 1,
        };

        match ip
            .checked_add_signed(offset as isize)
            .filter(|&next| next <= program.len())
        {
            Some(next) => ip = next,
            None => return Outcome::OutOfBounds(acc),
        }
    }
}

fn parse_instruction(line: &str) -> anyhow::Result<Instruction> {
    let (op, arg) = line
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected `op ±n`, got {:?}", line))?;
    let op = match op {
        "acc" => Op::Acc,
        "jmp" => Op::Jmp,
        "nop" => Op::Nop,
        other => bail!("unknown operation {:?}", other),
    };
    let arg = arg
        .parse()
        .with_context(|| format!("bad operand {:?}", arg))?;
    Ok(Instruction { op, arg })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(idx, line)| parse_instruction(line).with_context(|| format!("line {}", idx + 1)))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(invalid_input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        match run(shared, None) {
            Outcome::Looped(acc) => Ok(acc.to_string()),
            other => Err(solve_failed(format!("program did not loop: {:?}", other))),
        }
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let program: &[Instruction] = shared;
        program
            .iter()
            .enumerate()
            .filter_map(|(idx, instruction)| instruction.flipped().map(|f| (idx, f)))
            .find_map(|patch| match run(program, Some(patch)) {
                Outcome::Terminated(acc) => {
                    debug!("program terminates after flipping instruction {}", patch.0);
                    Some(acc)
                }
                _ => None,
            })
            .map(|acc| acc.to_string())
            .ok_or_else(|| solve_failed("no single jmp/nop flip terminates the program"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::solve_bundled;

    fn program(src: &str) -> Vec<Instruction> {
        Solver::parse(src).unwrap()
    }

    #[test]
    fn test_bundled_answers() {
        assert_eq!(solve_bundled::<Solver>(2020, 8), ["5", "8"]);
    }

    #[test]
    fn test_outcomes() {
        assert_eq!(run(&program("acc +3\nnop +0"), None), Outcome::Terminated(3));
        assert_eq!(run(&program("acc -2\njmp -1"), None), Outcome::Looped(-2));
        assert_eq!(run(&program("acc +1\njmp +5"), None), Outcome::OutOfBounds(1));
        assert_eq!(run(&program("jmp -1"), None), Outcome::OutOfBounds(0));
        // Jumping exactly to the end counts as termination
        assert_eq!(run(&program("jmp +2\nacc +7"), None), Outcome::Terminated(0));
    }

    #[test]
    fn test_patch_applies_once() {
        let prog = program("nop +2\njmp +0\nacc +4");
        assert_eq!(run(&prog, None), Outcome::Looped(0));
        let patch = (0, prog[0].flipped().unwrap());
        assert_eq!(run(&prog, Some(patch)), Outcome::Terminated(4));
    }

    #[test]
    fn test_acc_never_flipped() {
        let instruction = parse_instruction("acc +1").unwrap();
        assert_eq!(instruction.flipped(), None);
    }

    #[test]
    fn test_no_fix() {
        let mut prog = program("acc +1\njmp +0\nacc +1\njmp -1");
        assert!(<Solver as PartSolver<2>>::solve(&mut prog).is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert!(Solver::parse("add +1").is_err());
        assert!(Solver::parse("jmp x").is_err());
        assert!(Solver::parse("nop").is_err());
    }
}
