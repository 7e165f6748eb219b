//! Pathfinding for sparse tile grids.
//!
//! This crate provides the search side of the *tilegrid* workspace,
//! operating on a [`TileIndex`](tilegrid_core::TileIndex):
//!
//! - **Cost-weighted best-first search** producing a full predecessor map
//!   over the explored region ([`search`])
//! - **Path reconstruction** from a predecessor map ([`reconstruct_path`]),
//!   with [`search_path`] composing both steps
//! - **Priority frontier** with stable first-pushed tie-breaking
//!   ([`Frontier`])
//! - **Bounded neighbor probe** — a depth-limited recursive hunt for any
//!   cheap-enough tile ([`find_cheaper_neighbor`])
//!
//! All queries are synchronous and allocate their results per call; only
//! the index itself outlives a query.

mod frontier;
mod probe;
mod search;

pub use frontier::Frontier;
pub use probe::find_cheaper_neighbor;
pub use search::{Path, SearchConfig, SearchOutcome, reconstruct_path, search, search_path};
