use std::collections::HashMap;
use std::sync::LazyLock;

use anyhow::anyhow;
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;
use regex::Regex;

use crate::invalid_input;

const REQUIRED: [&str; 7] = ["byr", "iyr", "eyr", "hgt", "hcl", "ecl", "pid"];
const EYE_COLORS: [&str; 7] = ["amb", "blu", "brn", "gry", "grn", "hzl", "oth"];

static HAIR_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-f]{6}$").expect("valid regex"));
static PASSPORT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{9}$").expect("valid regex"));

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 4, tags = ["2020", "parsing"])]
pub struct Solver;

/// Fields of one passport record, borrowed from the input.
#[derive(Debug, Default)]
pub struct Passport<'a> {
    fields: HashMap<&'a str, &'a str>,
}

impl Passport<'_> {
    fn has_required_fields(&self) -> bool {
        REQUIRED.iter().all(|key| self.fields.contains_key(key))
    }

    fn is_valid(&self) -> bool {
        self.has_required_fields()
            && self
                .fields
                .iter()
                .all(|(&key, &value)| field_is_valid(key, value))
    }
}

fn year_in(value: &str, lo: u16, hi: u16) -> bool {
    value.len() == 4 && value.parse::<u16>().is_ok_and(|y| (lo..=hi).contains(&y))
}

fn field_is_valid(key: &str, value: &str) -> bool {
    match key {
        "byr" => year_in(value, 1920, 2002),
        "iyr" => year_in(value, 2010, 2020),
        "eyr" => year_in(value, 2020, 2030),
        "hgt" => {
            if let Some(cm) = value.strip_suffix("cm") {
                cm.parse::<u16>().is_ok_and(|h| (150..=193).contains(&h))
            } else if let Some(inches) = value.strip_suffix("in") {
                inches.parse::<u16>().is_ok_and(|h| (59..=76).contains(&h))
            } else {
                false
            }
        }
        "hcl" => HAIR_COLOR.is_match(value),
        "ecl" => EYE_COLORS.contains(&value),
        "pid" => PASSPORT_ID.is_match(value),
        // cid and anything unknown are ignored
        _ => true,
    }
}

fn parse_passport<'a>(lines: impl IntoIterator<Item = &'a str>) -> anyhow::Result<Passport<'a>> {
    let fields = lines
        .into_iter()
        .flat_map(str::split_whitespace)
        .map(|field| {
            field
                .split_once(':')
                .ok_or_else(|| anyhow!("field {:?} is not key:value", field))
        })
        .collect::<anyhow::Result<HashMap<_, _>>>()?;
    Ok(Passport { fields })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Passport<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        // Records are separated by blank lines
        input
            .lines()
            .chunk_by(|line| line.trim().is_empty())
            .into_iter()
            .filter(|(blank, _)| !blank)
            .enumerate()
            .map(|(idx, (_, lines))| {
                parse_passport(lines).map_err(|e| anyhow!("(record {}) {}", idx + 1, e))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(invalid_input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .filter(|p| p.has_required_fields())
            .count()
            .to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|p| p.is_valid()).count().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::solve_bundled;

    #[test]
    fn test_bundled_answers() {
        assert_eq!(solve_bundled::<Solver>(2020, 4), ["10", "6"]);
    }

    #[test]
    fn test_field_rules() {
        assert!(field_is_valid("byr", "2002"));
        assert!(!field_is_valid("byr", "2003"));
        assert!(!field_is_valid("byr", "02002"));

        assert!(field_is_valid("hgt", "60in"));
        assert!(field_is_valid("hgt", "190cm"));
        assert!(!field_is_valid("hgt", "190in"));
        assert!(!field_is_valid("hgt", "190"));

        assert!(field_is_valid("hcl", "#123abc"));
        assert!(!field_is_valid("hcl", "#123abz"));
        assert!(!field_is_valid("hcl", "123abc"));

        assert!(field_is_valid("ecl", "brn"));
        assert!(!field_is_valid("ecl", "wat"));

        assert!(field_is_valid("pid", "000000001"));
        assert!(!field_is_valid("pid", "0123456789"));

        assert!(field_is_valid("cid", "anything"));
    }

    #[test]
    fn test_cid_is_optional() {
        let passport = parse_passport([
            "byr:1937 iyr:2017 eyr:2020",
            "hgt:183cm hcl:#fffffd ecl:gry pid:860033327",
        ])
        .unwrap();
        assert!(passport.has_required_fields());
        assert!(passport.is_valid());
    }

    #[test]
    fn test_malformed_field_rejected() {
        assert!(Solver::parse("byr:1937 iyr").is_err());
    }
}
