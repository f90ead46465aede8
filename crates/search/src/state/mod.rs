//! Capability interface between the search engine and a game.
//!
//! This module defines everything the engine is allowed to know about a game:
//! - Edge types (actions)
//! - State types (positions)
//! - The game adapter (rules, payoffs, heuristics, cutoff policy)
//! - The two players

mod edge;
mod game;
mod player;
mod state;

pub use edge::*;
pub use game::*;
pub use player::*;
pub use state::*;
