use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

#[derive(Debug, Clone)]
struct Readings {
    values: Vec<i32>,
    sum: Option<i32>,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 3)]
struct Sonar;

impl AocParser for Sonar {
    type SharedData<'a> = Readings;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let values = input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Readings { values, sum: None })
    }
}

// Stores the sum for part 3
impl PartSolver<1> for Sonar {
    fn solve(shared: &mut Readings) -> Result<String, SolveError> {
        let sum: i32 = shared.values.iter().sum();
        shared.sum = Some(sum);
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Sonar {
    fn solve(shared: &mut Readings) -> Result<String, SolveError> {
        if shared.values.is_empty() {
            Err(SolveError::SolveFailed("Empty input".into()))
        } else {
            Ok(shared.values.iter().product::<i32>().to_string())
        }
    }
}

impl PartSolver<3> for Sonar {
    fn solve(shared: &mut Readings) -> Result<String, SolveError> {
        let sum = shared
            .sum
            .ok_or_else(|| SolveError::SolveFailed("part 1 has not run".into()))?;
        Ok((sum * 2).to_string())
    }
}

#[test]
fn test_parts_constant() {
    assert_eq!(<Sonar as Solver>::PARTS, 3);
}

#[test]
fn test_dispatch_by_part_number() {
    let mut shared = Sonar::parse("2\n3\n4").unwrap();
    assert_eq!(Sonar::solve_part(&mut shared, 1).unwrap(), "9");
    assert_eq!(Sonar::solve_part(&mut shared, 2).unwrap(), "24");
}

#[test]
fn test_later_part_sees_earlier_state() {
    let mut shared = Sonar::parse("2\n3").unwrap();
    assert!(Sonar::solve_part(&mut shared, 3).is_err());

    Sonar::solve_part(&mut shared, 1).unwrap();
    assert_eq!(shared.sum, Some(5));
    assert_eq!(Sonar::solve_part(&mut shared, 3).unwrap(), "10");
}

#[test]
fn test_error_from_part_is_returned() {
    let mut shared = Readings {
        values: vec![],
        sum: None,
    };
    assert!(matches!(
        Sonar::solve_part(&mut shared, 2),
        Err(SolveError::SolveFailed(_))
    ));
}

#[test]
fn test_unknown_part_not_implemented() {
    let mut shared = Sonar::parse("1").unwrap();
    assert!(matches!(
        Sonar::solve_part(&mut shared, 4),
        Err(SolveError::PartNotImplemented(4))
    ));
    assert!(matches!(
        Sonar::solve_part(&mut shared, 0),
        Err(SolveError::PartNotImplemented(0))
    ));
}
