//! Every registered solution is reachable through the registry and has an input

use aoc_solver::{SolverPlugin, SolverRegistryBuilder};
use aoc_solutions::inputs;

const EXPECTED: [(u16, u8, [&str; 2]); 9] = [
    (2020, 1, ["514579", "241861950"]),
    (2020, 2, ["2", "1"]),
    (2020, 3, ["7", "336"]),
    (2020, 4, ["10", "6"]),
    (2020, 5, ["159", "131"]),
    (2020, 8, ["5", "8"]),
    (2020, 12, ["25", "286"]),
    (2022, 13, ["13", "140"]),
    (2024, 11, ["55312", "65601038650482"]),
];

#[test]
fn test_all_plugins_register() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let keys: Vec<_> = registry
        .storage()
        .iter_info()
        .map(|info| (info.year, info.day, info.parts))
        .collect();
    let expected: Vec<_> = EXPECTED.iter().map(|&(y, d, _)| (y, d, 2)).collect();
    assert_eq!(keys, expected);
}

#[test]
fn test_every_solver_has_bundled_input() {
    for plugin in aoc_solver::inventory::iter::<SolverPlugin>() {
        assert!(
            inputs::bundled(plugin.year, plugin.day).is_some(),
            "no input for {}/{}",
            plugin.year,
            plugin.day
        );
    }
    assert_eq!(inputs::all().count(), EXPECTED.len());
}

#[test]
fn test_registry_answers() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    for (year, day, answers) in EXPECTED {
        let input = inputs::bundled(year, day).unwrap();
        let mut solver = registry.create_solver(year, day, input).unwrap();
        for (part, expected) in (1..).zip(answers) {
            assert_eq!(
                solver.solve(part).unwrap().answer,
                expected,
                "{}/{} part {}",
                year,
                day,
                part
            );
        }
    }
}

#[test]
fn test_tag_filter() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| {
            plugin.tags.contains(&"2020") && plugin.tags.contains(&"easy")
        })
        .unwrap()
        .build();

    let days: Vec<_> = registry.storage().iter_info().map(|info| info.day).collect();
    assert_eq!(days, [1, 2, 5]);
}
