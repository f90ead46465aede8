use crate::*;
use petgraph::graph::NodeIndex;

/// Position in a [`TreeGame`], encoded as the node's graph index.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TreeState(pub(super) NodeIndex);

impl SearchState for TreeState {}
