//! The [`Tile`] type — a grid unit with a traversal cost.

use crate::geom::{Point, WorldPos};

/// A single grid tile.
///
/// `cost` is a continuous difficulty value in `[0, ∞)`, not a boolean:
/// anything below [`Tile::BLOCKING_COST`] is traversable and scales path
/// weight, anything at or above it blocks movement entirely.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    /// Grid coordinate. Unique key within a [`TileIndex`](crate::TileIndex).
    pub point: Point,
    /// Traversal cost. Negative inputs are clamped to zero at construction.
    pub cost: f64,
    /// Continuous world position, used by nearest-position queries.
    pub pos: WorldPos,
}

impl Tile {
    /// Costs at or above this value block traversal.
    pub const BLOCKING_COST: f64 = 1.0;

    /// Create a tile at `point`, placed at its unit-square world position.
    #[inline]
    pub fn new(point: Point, cost: f64) -> Self {
        Self {
            point,
            cost: cost.max(0.0),
            pos: point.into(),
        }
    }

    /// Set an explicit world position (builder), for irregular layouts.
    #[inline]
    pub fn with_pos(mut self, pos: WorldPos) -> Self {
        self.pos = pos;
        self
    }

    /// Whether the tile can be entered at all.
    #[inline]
    pub fn walkable(&self) -> bool {
        self.cost < Self::BLOCKING_COST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walkability_threshold() {
        assert!(Tile::new(Point::new(0, 0), 0.0).walkable());
        assert!(Tile::new(Point::new(0, 0), 0.99).walkable());
        assert!(!Tile::new(Point::new(0, 0), 1.0).walkable());
        assert!(!Tile::new(Point::new(0, 0), 7.5).walkable());
    }

    #[test]
    fn negative_cost_clamped() {
        let t = Tile::new(Point::new(1, 1), -3.0);
        assert_eq!(t.cost, 0.0);
        assert!(t.walkable());
    }

    #[test]
    fn default_and_explicit_position() {
        let t = Tile::new(Point::new(2, -1), 0.0);
        assert_eq!(t.pos, WorldPos::new(2.0, -1.0));
        let t = t.with_pos(WorldPos::new(2.5, -0.5));
        assert_eq!(t.pos, WorldPos::new(2.5, -0.5));
        // Coordinate is untouched by the position override.
        assert_eq!(t.point, Point::new(2, -1));
    }
}
