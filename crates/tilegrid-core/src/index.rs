//! The [`TileIndex`] — owns the tile set and answers spatial queries.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::geom::{Point, WorldPos};
use crate::tile::Tile;

/// Neighbor offsets in query order: left, right, up, down.
const ORTHO_OFFSETS: [Point; 4] = [Point::WEST, Point::EAST, Point::NORTH, Point::SOUTH];

/// Diagonal offsets appended when enabled: NW, NE, SW, SE.
const DIAG_OFFSETS: [Point; 4] = [
    Point::new(-1, 1),
    Point::new(1, 1),
    Point::new(-1, -1),
    Point::new(1, -1),
];

/// Index of tiles keyed by grid coordinate.
///
/// Built once per grid and shared by every query. Coordinates are unique
/// keys: duplicates at build time keep the first-seen tile and are recorded
/// (see [`duplicates`](Self::duplicates)). Lookups for absent coordinates
/// return `None`, never a synthesized tile.
///
/// `&TileIndex` methods are safe to share across concurrent readers;
/// [`nearest_to`](Self::nearest_to) and the mutators take `&mut self`, so a
/// host that interleaves writes with in-flight queries must serialize them
/// externally.
pub struct TileIndex {
    tiles: HashMap<Point, Tile>,
    /// Insertion order, the tie-break contract for nearest scans.
    order: Vec<Point>,
    duplicates: Vec<Point>,
    /// Exact-position memo for `nearest_to`, keyed by coordinate bit
    /// patterns. Never invalidated implicitly; see `clear_position_cache`.
    nearest_cache: HashMap<(u64, u64), Point>,
}

impl TileIndex {
    /// Index a flat collection of tiles.
    ///
    /// On a duplicate coordinate the first-seen tile is kept and the
    /// collision is logged and recorded; construction never fails.
    pub fn build<I: IntoIterator<Item = Tile>>(tiles: I) -> Self {
        let mut index = Self {
            tiles: HashMap::new(),
            order: Vec::new(),
            duplicates: Vec::new(),
            nearest_cache: HashMap::new(),
        };
        for tile in tiles {
            index.add(tile);
        }
        log::debug!("indexed {} tiles", index.order.len());
        index
    }

    fn add(&mut self, tile: Tile) -> bool {
        match self.tiles.entry(tile.point) {
            Entry::Occupied(_) => {
                log::warn!("duplicate tile at {}, keeping the first", tile.point);
                self.duplicates.push(tile.point);
                false
            }
            Entry::Vacant(e) => {
                e.insert(tile);
                self.order.push(tile.point);
                true
            }
        }
    }

    /// Coordinates that collided with an already-indexed tile, in the order
    /// the collisions were seen.
    pub fn duplicates(&self) -> &[Point] {
        &self.duplicates
    }

    /// Number of indexed tiles.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the index holds no tiles.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Look up the tile at `p`.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&Tile> {
        self.tiles.get(&p)
    }

    /// Iterate over all tiles in insertion order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.order.iter().filter_map(|p| self.tiles.get(p))
    }

    /// World position of the tile at `p`.
    pub fn position_of(&self, p: Point) -> Option<WorldPos> {
        self.tiles.get(&p).map(|t| t.pos)
    }

    /// Insert a tile after construction.
    ///
    /// Same collision rule as [`build`](Self::build): an occupied
    /// coordinate keeps its tile, records the collision, and returns
    /// `false`. The nearest-position cache is NOT invalidated.
    pub fn insert(&mut self, tile: Tile) -> bool {
        self.add(tile)
    }

    /// Remove the tile at `p`, returning it if present.
    ///
    /// The nearest-position cache is NOT invalidated: a cached answer
    /// pointing at the removed tile yields `None` until
    /// [`clear_position_cache`](Self::clear_position_cache) is called.
    pub fn remove(&mut self, p: Point) -> Option<Tile> {
        let removed = self.tiles.remove(&p);
        if removed.is_some() {
            self.order.retain(|q| *q != p);
        }
        removed
    }

    /// Update the traversal cost of the tile at `p`.
    ///
    /// Returns `false` when the coordinate is absent. Costs may change
    /// between searches; negative inputs are clamped to zero.
    pub fn set_cost(&mut self, p: Point, cost: f64) -> bool {
        match self.tiles.get_mut(&p) {
            Some(t) => {
                t.cost = cost.max(0.0);
                true
            }
            None => false,
        }
    }

    // -----------------------------------------------------------------------
    // Neighbor enumeration
    // -----------------------------------------------------------------------

    /// The indexed tiles adjacent to `p`, in a fixed order: left, right,
    /// up, down, then (with `diagonals`) NW, NE, SW, SE.
    ///
    /// Absent coordinates are omitted. The order is a contract — the search
    /// relies on it for reproducible tie-breaking.
    pub fn neighbors(&self, p: Point, diagonals: bool) -> Vec<&Tile> {
        let mut found = Vec::with_capacity(if diagonals { 8 } else { 4 });
        for d in ORTHO_OFFSETS {
            if let Some(t) = self.tiles.get(&(p + d)) {
                found.push(t);
            }
        }
        if diagonals {
            for d in DIAG_OFFSETS {
                if let Some(t) = self.tiles.get(&(p + d)) {
                    found.push(t);
                }
            }
        }
        found
    }

    // -----------------------------------------------------------------------
    // Nearest-position queries
    // -----------------------------------------------------------------------

    /// The tile whose world position is Manhattan-closest to `pos`.
    ///
    /// Ties go to the first minimal tile in insertion order. Results are
    /// memoized by the exact input position: repeated identical queries hit
    /// the cache, any other position recomputes. This is an exact-match
    /// memo, not a spatial index, and it is never invalidated implicitly —
    /// hosts that change the tile set call
    /// [`clear_position_cache`](Self::clear_position_cache).
    pub fn nearest_to(&mut self, pos: WorldPos) -> Option<&Tile> {
        let key = (pos.x.to_bits(), pos.y.to_bits());
        if let Some(p) = self.nearest_cache.get(&key).copied() {
            return self.tiles.get(&p);
        }
        let best = self.scan_nearest(|t| t.pos.manhattan(pos))?;
        self.nearest_cache.insert(key, best);
        self.tiles.get(&best)
    }

    /// The coordinate of the tile whose world position is Euclidean-closest
    /// to `pos`. Uncached; same first-minimal tie-break as
    /// [`nearest_to`](Self::nearest_to).
    pub fn nearest_point_to(&self, pos: WorldPos) -> Option<Point> {
        self.scan_nearest(|t| t.pos.distance(pos))
    }

    /// Drop all memoized nearest-position answers.
    pub fn clear_position_cache(&mut self) {
        self.nearest_cache.clear();
    }

    fn scan_nearest<F: Fn(&Tile) -> f64>(&self, metric: F) -> Option<Point> {
        let mut best: Option<(Point, f64)> = None;
        for p in &self.order {
            let Some(t) = self.tiles.get(p) else {
                continue;
            };
            let d = metric(t);
            // Strict comparison keeps the earliest minimal tile.
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((*p, d));
            }
        }
        best.map(|(p, _)| p)
    }
}
