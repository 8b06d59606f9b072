use std::cmp::Ordering;
use std::slice;

use anyhow::{anyhow, ensure};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;
use nom::{
    IResult, Parser,
    branch::alt,
    character::complete::{self, char},
    combinator::{all_consuming, map},
    multi::separated_list0,
    sequence::delimited,
};

use crate::invalid_input;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 13, tags = ["2022", "parsing", "recursion"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Packet {
    Int(u32),
    List(Vec<Packet>),
}

impl Ord for Packet {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Packet::Int(a), Packet::Int(b)) => a.cmp(b),
            // Vec ordering is lexicographic, shorter prefix first
            (Packet::List(a), Packet::List(b)) => a.cmp(b),
            (Packet::Int(_), Packet::List(b)) => slice::from_ref(self).cmp(b.as_slice()),
            (Packet::List(a), Packet::Int(_)) => a.as_slice().cmp(slice::from_ref(other)),
        }
    }
}

impl PartialOrd for Packet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn packet(input: &str) -> IResult<&str, Packet> {
    alt((
        map(complete::u32, Packet::Int),
        map(
            delimited(char('['), separated_list0(char(','), packet), char(']')),
            Packet::List,
        ),
    ))
    .parse(input)
}

fn parse_packet(line: &str) -> anyhow::Result<Packet> {
    all_consuming(packet)
        .parse(line.trim())
        .map(|(_, p)| p)
        .map_err(|e| anyhow!("bad packet {:?}: {}", line, e))
}

fn divider(n: u32) -> Packet {
    Packet::List(vec![Packet::List(vec![Packet::Int(n)])])
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<(Packet, Packet)>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .chunk_by(|line| line.trim().is_empty())
            .into_iter()
            .filter(|(blank, _)| !blank)
            .enumerate()
            .map(|(idx, (_, lines))| -> anyhow::Result<_> {
                let lines: Vec<_> = lines.collect();
                ensure!(
                    lines.len() == 2,
                    "(pair {}) expected 2 packets, found {}",
                    idx + 1,
                    lines.len()
                );
                Ok((parse_packet(lines[0])?, parse_packet(lines[1])?))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(invalid_input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: usize = shared
            .iter()
            .enumerate()
            .filter(|(_, (left, right))| left < right)
            .map(|(idx, _)| idx + 1)
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (first, second) = (divider(2), divider(6));
        let packets = shared.iter().flat_map(|(l, r)| [l, r]);

        // 1-based position of each divider once sorted; [[2]] also precedes [[6]]
        let (mut first_pos, mut second_pos) = (1, 2);
        for p in packets {
            if *p < first {
                first_pos += 1;
            }
            if *p < second {
                second_pos += 1;
            }
        }
        Ok((first_pos * second_pos).to_string())
    }
}
