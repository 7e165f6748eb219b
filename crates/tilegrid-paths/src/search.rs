//! Cost-weighted best-first search over a [`TileIndex`].

use std::collections::HashMap;

use tilegrid_core::{Point, TileIndex};

use crate::frontier::Frontier;

/// Per-search configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Expand through diagonal neighbors as well as orthogonal ones.
    pub diagonals: bool,
    /// Scales each entered tile's cost before it is added to the running
    /// path cost. The straight-line heuristic is only admissible while the
    /// scaled per-step cost stays at or above the per-step distance;
    /// callers that shrink costs below that trade optimality for speed.
    pub cost_multiplier: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            diagonals: false,
            cost_multiplier: 1.0,
        }
    }
}

/// Everything a search run produced.
///
/// Ephemeral: built fresh per call, not comparable across searches.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// Best-known predecessor of every reached tile. The origin maps to
    /// itself, marking "no further predecessor". An unreachable goal is
    /// simply absent.
    pub came_from: HashMap<Point, Point>,
    /// Accumulated cost of the best-known path to every reached tile.
    pub cost_so_far: HashMap<Point, f64>,
    /// Whether the goal was popped from the frontier.
    pub goal_reached: bool,
}

/// An ordered start→goal tile sequence.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    /// Visited coordinates, start first. Never empty: an unreachable goal
    /// still yields the partial backward chain that was accumulated.
    pub points: Vec<Point>,
    /// `false` when the backward walk never arrived at `start`.
    pub complete: bool,
}

/// Run the search from `start` towards `goal`, returning the full
/// predecessor map over the explored region.
///
/// Tiles with blocking cost are never entered nor expanded through. The
/// frontier emptying before `goal` is found is a normal outcome — the map
/// then covers every tile reachable from `start` and lacks `goal`.
pub fn search(index: &TileIndex, cfg: &SearchConfig, start: Point, goal: Point) -> SearchOutcome {
    let mut came_from: HashMap<Point, Point> = HashMap::new();
    let mut cost_so_far: HashMap<Point, f64> = HashMap::new();
    let mut frontier = Frontier::new();

    came_from.insert(start, start);
    cost_so_far.insert(start, 0.0);
    frontier.push(start, 0.0);

    let mut goal_reached = false;
    while let Some(current) = frontier.pop_min() {
        if current == goal {
            goal_reached = true;
            break;
        }
        let Some(&current_cost) = cost_so_far.get(&current) else {
            continue;
        };
        for tile in index.neighbors(current, cfg.diagonals) {
            if !tile.walkable() {
                continue;
            }
            let next = tile.point;
            let new_cost = current_cost + tile.cost * cfg.cost_multiplier;
            let improved = match cost_so_far.get(&next) {
                None => true,
                Some(&known) => new_cost < known,
            };
            if improved {
                cost_so_far.insert(next, new_cost);
                frontier.push(next, new_cost + next.distance(goal));
                came_from.insert(next, current);
            }
        }
    }

    SearchOutcome {
        came_from,
        cost_so_far,
        goal_reached,
    }
}

/// Walk `came_from` backward from `goal` and reverse into start→goal order.
///
/// A missing step — the goal was never reached, or the map belongs to a
/// different origin — ends the walk early with whatever partial chain was
/// accumulated and `complete == false`. `start == goal` yields `[goal]`.
pub fn reconstruct_path(start: Point, goal: Point, came_from: &HashMap<Point, Point>) -> Path {
    let mut points = vec![goal];
    let mut current = goal;
    let mut complete = true;
    while current != start {
        let Some(&prev) = came_from.get(&current) else {
            log::debug!("no recorded step towards {current}, path incomplete");
            complete = false;
            break;
        };
        if prev == current {
            // Hit the self-loop sentinel of an origin other than `start`.
            complete = false;
            break;
        }
        current = prev;
        points.push(current);
    }
    points.reverse();
    Path { points, complete }
}

/// Search and reconstruct in one call.
pub fn search_path(index: &TileIndex, cfg: &SearchConfig, start: Point, goal: Point) -> Path {
    let outcome = search(index, cfg, start, goal);
    reconstruct_path(start, goal, &outcome.came_from)
}
