//! Depth-bounded probe for a cheap-enough neighbor.

use tilegrid_core::{Point, Tile, TileIndex};

/// Find any tile near `origin` whose cost is at most `cost_threshold`.
///
/// Direct neighbors are checked first, in neighbor order; the first match
/// wins. If none qualifies the probe recurses into each neighbor in turn
/// (depth-first, not level order), until `max_depth` levels down. No
/// visited set is kept — tiles may be re-examined along different recursion
/// paths, so `max_depth` is the only bound on work and the probe is meant
/// for small depths.
pub fn find_cheaper_neighbor(
    index: &TileIndex,
    diagonals: bool,
    origin: Point,
    cost_threshold: f64,
    max_depth: u32,
) -> Option<&Tile> {
    probe(index, diagonals, origin, cost_threshold, max_depth, 0)
}

fn probe(
    index: &TileIndex,
    diagonals: bool,
    node: Point,
    cost_threshold: f64,
    max_depth: u32,
    depth: u32,
) -> Option<&Tile> {
    let neighbors = index.neighbors(node, diagonals);
    for &tile in &neighbors {
        if tile.cost <= cost_threshold {
            return Some(tile);
        }
    }
    if depth < max_depth {
        for &tile in &neighbors {
            if tile.point == node {
                continue;
            }
            let found = probe(index, diagonals, tile.point, cost_threshold, max_depth, depth + 1);
            if found.is_some() {
                return found;
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A 5x1 corridor with descending costs: 0.9, 0.8, ..., 0.5.
    fn corridor() -> TileIndex {
        TileIndex::build((0..5).map(|x| Tile::new(Point::new(x, 0), 0.9 - 0.1 * f64::from(x))))
    }

    #[test]
    fn direct_neighbor_wins() {
        let idx = corridor();
        let found = find_cheaper_neighbor(&idx, false, Point::new(1, 0), 0.9, 0).unwrap();
        // Left neighbor qualifies and is checked before right.
        assert_eq!(found.point, Point::new(0, 0));
    }

    #[test]
    fn zero_depth_sees_only_direct_neighbors() {
        let idx = corridor();
        // 0.6 first appears three tiles right of (0,0).
        assert!(find_cheaper_neighbor(&idx, false, Point::new(0, 0), 0.6, 0).is_none());
        assert!(find_cheaper_neighbor(&idx, false, Point::new(0, 0), 0.6, 1).is_none());
        let found = find_cheaper_neighbor(&idx, false, Point::new(0, 0), 0.6, 2).unwrap();
        assert_eq!(found.point, Point::new(3, 0));
    }

    #[test]
    fn none_when_nothing_is_cheap_enough() {
        let idx = corridor();
        assert!(find_cheaper_neighbor(&idx, false, Point::new(2, 0), 0.1, 10).is_none());
    }

    #[test]
    fn recursion_prefers_earlier_neighbors() {
        // Two candidates at depth 1: one through the left branch, one
        // through the right. The left branch is explored first.
        let idx = TileIndex::build([
            Tile::new(Point::new(0, 0), 0.9),
            Tile::new(Point::new(-1, 0), 0.8),
            Tile::new(Point::new(1, 0), 0.8),
            Tile::new(Point::new(-2, 0), 0.2),
            Tile::new(Point::new(2, 0), 0.1),
        ]);
        let found = find_cheaper_neighbor(&idx, false, Point::new(0, 0), 0.3, 1).unwrap();
        assert_eq!(found.point, Point::new(-2, 0));
    }

    #[test]
    fn diagonal_neighbors_participate_when_enabled() {
        let idx = TileIndex::build([
            Tile::new(Point::new(0, 0), 0.9),
            Tile::new(Point::new(1, 1), 0.1),
        ]);
        assert!(find_cheaper_neighbor(&idx, false, Point::new(0, 0), 0.5, 3).is_none());
        let found = find_cheaper_neighbor(&idx, true, Point::new(0, 0), 0.5, 0).unwrap();
        assert_eq!(found.point, Point::new(1, 1));
    }

    #[test]
    fn origin_resurfaces_through_recursion() {
        // No visited set: the origin is never inspected directly, but one
        // level down it qualifies again as its own neighbor's neighbor.
        let idx = TileIndex::build([
            Tile::new(Point::new(0, 0), 0.0),
            Tile::new(Point::new(1, 0), 0.7),
        ]);
        assert!(find_cheaper_neighbor(&idx, false, Point::new(0, 0), 0.5, 0).is_none());
        let found = find_cheaper_neighbor(&idx, false, Point::new(0, 0), 0.5, 1).unwrap();
        assert_eq!(found.point, Point::new(0, 0));
    }
}
