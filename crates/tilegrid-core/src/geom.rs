//! Geometry primitives: [`Point`] and [`WorldPos`].

use std::fmt;
use std::ops::Add;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer grid coordinate. X grows east, Y grows north.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Unit offset towards north (0, 1).
    pub const NORTH: Self = Self { x: 0, y: 1 };
    /// Unit offset towards south (0, -1).
    pub const SOUTH: Self = Self { x: 0, y: -1 };
    /// Unit offset towards east (1, 0).
    pub const EAST: Self = Self { x: 1, y: 0 };
    /// Unit offset towards west (-1, 0).
    pub const WEST: Self = Self { x: -1, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        let dx = f64::from(other.x - self.x);
        let dy = f64::from(other.y - self.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// WorldPos
// ---------------------------------------------------------------------------

/// A continuous 2D world position, as supplied by the host's input layer.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPos {
    pub x: f64,
    pub y: f64,
}

impl WorldPos {
    /// Create a new world position.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    #[inline]
    pub fn distance(self, other: WorldPos) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Manhattan (L1) distance to another position.
    #[inline]
    pub fn manhattan(self, other: WorldPos) -> f64 {
        (other.x - self.x).abs() + (other.y - self.y).abs()
    }
}

impl From<Point> for WorldPos {
    /// Place a grid point at its unit-square world position.
    #[inline]
    fn from(p: Point) -> Self {
        Self::new(f64::from(p.x), f64::from(p.y))
    }
}

impl fmt::Display for WorldPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
