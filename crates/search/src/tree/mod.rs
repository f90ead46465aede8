//! An explicit game tree as a minimal search test case.
//!
//! Every position is a node of a `petgraph` graph and every action is an
//! outgoing edge, so any finite two-player tree can be written down
//! directly and searched.
//!
//! # Why an explicit tree?
//!
//! - **Known answers** — hand-built trees have values checkable by eye
//! - **Random families** — seeded generation gives many trees for property tests
//! - **Probes** — the game counts how the engine queries it, so pruning and
//!   cutoff behaviour can be observed from outside the engine
//!
//! # File Structure
//!
//! - [`TreeEdge`] — `SearchEdge`: a labelled branch to a child node
//! - [`TreeState`] — `SearchState`: a node index
//! - [`TreeGame`] — `SearchGame`: the graph, its cutoff horizon and probes

mod edge;
mod game;
mod state;

pub use edge::*;
pub use game::*;
pub use state::*;
