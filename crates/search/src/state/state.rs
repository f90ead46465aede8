/// A game position.
///
/// Opaque to the engine: produced and consumed only through
/// [`SearchGame`](crate::SearchGame). The engine holds states by value
/// and never mutates one after it has been produced.
pub trait SearchState: Clone {}
