//! Puzzle inputs compiled into the binary

/// A puzzle input embedded at build time.
#[derive(Debug, Clone, Copy)]
pub struct BundledInput {
    pub year: u16,
    pub day: u8,
    pub text: &'static str,
}

macro_rules! bundle {
    ($year:literal, $day:literal, $path:literal) => {
        BundledInput {
            year: $year,
            day: $day,
            text: include_str!(concat!("../inputs/", $path)),
        }
    };
}

static BUNDLED: &[BundledInput] = &[
    bundle!(2020, 1, "2020/day01.txt"),
    bundle!(2020, 2, "2020/day02.txt"),
    bundle!(2020, 3, "2020/day03.txt"),
    bundle!(2020, 4, "2020/day04.txt"),
    bundle!(2020, 5, "2020/day05.txt"),
    bundle!(2020, 8, "2020/day08.txt"),
    bundle!(2020, 12, "2020/day12.txt"),
    bundle!(2022, 13, "2022/day13.txt"),
    bundle!(2024, 11, "2024/day11.txt"),
];

/// Input text for a year-day, if one is bundled.
pub fn bundled(year: u16, day: u8) -> Option<&'static str> {
    BUNDLED
        .iter()
        .find(|input| input.year == year && input.day == day)
        .map(|input| input.text)
}

/// All bundled inputs in (year, day) order.
pub fn all() -> impl Iterator<Item = &'static BundledInput> {
    BUNDLED.iter()
}
