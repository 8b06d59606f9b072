//! Integer 2D vector for grid walking and navigation puzzles

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A 2D vector with `x` growing east and `y` growing north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vec2 {
    pub x: i64,
    pub y: i64,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0, 0);
    pub const NORTH: Self = Self::new(0, 1);
    pub const SOUTH: Self = Self::new(0, -1);
    pub const EAST: Self = Self::new(1, 0);
    pub const WEST: Self = Self::new(-1, 0);

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Rotate 90° clockwise about the origin.
    pub fn rotate_right(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Rotate 90° counter-clockwise about the origin.
    pub fn rotate_left(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Rotate clockwise by `quarter_turns` multiples of 90°; negative turns go counter-clockwise.
    pub fn rotate_quarters(self, quarter_turns: i64) -> Self {
        match quarter_turns.rem_euclid(4) {
            0 => self,
            1 => self.rotate_right(),
            2 => -self,
            _ => self.rotate_left(),
        }
    }

    pub fn manhattan(self) -> u64 {
        self.x.unsigned_abs() + self.y.unsigned_abs()
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i64> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<(i64, i64)> for Vec2 {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}
