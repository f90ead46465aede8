/// An action available to the player to move.
///
/// The engine never orders, compares, or hashes edges. It only carries
/// the chosen one back to the caller, so the bounds are limited to what
/// a [`SearchResult`](crate::SearchResult) needs to be cloned and rendered.
pub trait SearchEdge: Clone + std::fmt::Debug + std::fmt::Display {}
