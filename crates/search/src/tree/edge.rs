use crate::*;
use petgraph::graph::NodeIndex;

/// A labelled branch from one tree node to a child.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct TreeEdge {
    pub(super) label: String,
    #[serde(skip)]
    pub(super) child: NodeIndex,
}

impl TreeEdge {
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl SearchEdge for TreeEdge {}

impl std::fmt::Display for TreeEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}
