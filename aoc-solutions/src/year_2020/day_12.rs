use anyhow::{anyhow, bail, ensure, Context};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::invalid_input;
use crate::utils::vec2::Vec2;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 12, tags = ["2020", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move N/S/E/W by the given distance
    Shift(Vec2),
    /// Clockwise quarter turns, negative for L
    Turn(i64),
    Forward(i64),
}

/// A ship and the vector it steers by: its heading in part one, the waypoint in part two.
#[derive(Debug, Clone, Copy)]
struct Navigator {
    ship: Vec2,
    steer: Vec2,
}

impl Navigator {
    fn new(steer: Vec2) -> Self {
        Self {
            ship: Vec2::ZERO,
            steer,
        }
    }

    /// `shift_ship` picks whether N/S/E/W move the ship or the steering vector.
    fn apply(&mut self, action: Action, shift_ship: bool) {
        match action {
            Action::Shift(delta) if shift_ship => self.ship += delta,
            Action::Shift(delta) => self.steer += delta,
            Action::Turn(quarters) => self.steer = self.steer.rotate_quarters(quarters),
            Action::Forward(n) => self.ship += self.steer * n,
        }
    }
}

fn parse_action(line: &str) -> anyhow::Result<Action> {
    let mut chars = line.chars();
    let code = chars.next().ok_or_else(|| anyhow!("empty instruction"))?;
    let raw = chars.as_str();
    let value: i64 = raw
        .parse()
        .with_context(|| format!("bad operand {:?}", raw))?;
    ensure!(value >= 0, "operand {} is negative", value);

    let turn = |sign: i64| -> anyhow::Result<Action> {
        ensure!(value % 90 == 0, "turn of {} is not a multiple of 90", value);
        Ok(Action::Turn(sign * value / 90))
    };

    Ok(match code {
        'N' => Action::Shift(Vec2::NORTH * value),
        'S' => Action::Shift(Vec2::SOUTH * value),
        'E' => Action::Shift(Vec2::EAST * value),
        'W' => Action::Shift(Vec2::WEST * value),
        'L' => turn(-1)?,
        'R' => turn(1)?,
        'F' => Action::Forward(value),
        other => bail!("unknown action {:?}", other),
    })
}

fn navigate(actions: &[Action], steer: Vec2, shift_ship: bool) -> u64 {
    let mut nav = Navigator::new(steer);
    for &action in actions {
        nav.apply(action, shift_ship);
    }
    nav.ship.manhattan()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Action>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(idx, line)| parse_action(line).with_context(|| format!("line {}", idx + 1)))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(invalid_input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(navigate(shared, Vec2::EAST, true).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(navigate(shared, Vec2::new(10, 1), false).to_string())
    }
}
