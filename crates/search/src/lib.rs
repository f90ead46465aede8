//! Game-agnostic alpha-beta minimax search.
//!
//! This crate contains the generic traits and the search procedure that
//! pick optimal moves in finite, turn-based, two-player zero-sum games,
//! independently of any specific game implementation.
//!
//! # Module Structure
//!
//! - `state` — Capability interface (SearchGame, SearchState, SearchEdge, Player)
//! - `value` — Minimax values with infinite sentinels, and the alpha-beta window
//! - `engine` — SearchEngine, SearchResult, and Telemetry
//! - `tree` — Explicit game-tree reference implementation

mod engine;
mod state;
mod tree;
mod value;

pub use engine::*;
pub use state::*;
pub use tree::*;
pub use value::*;
