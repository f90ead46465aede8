//! Jedi chess: a small asymmetric board game searched by gambit.
//!
//! The Rebel forces (Rebels and the Jedi they promote into) play Max and
//! try to eliminate every Sith. The Sith play Min and try to eliminate or
//! convert every Rebel and Jedi. Undecided games are drawn at the ply limit.
//!
//! # File Structure
//!
//! Each file maps to one concept:
//! - [`Piece`], [`Faction`] — what occupies a square and whose side it is on
//! - [`Square`] — board coordinates
//! - [`JediMove`] — `SearchEdge`: one piece moving from one square to another
//! - [`JediState`] — `SearchState`: board, side to move, ply count
//! - [`JediGame`] — `SearchGame`: move generation, payoffs, heuristic, cutoff

mod edge;
mod game;
mod piece;
mod square;
mod state;

pub use edge::*;
pub use game::*;
pub use piece::*;
pub use square::*;
pub use state::*;
