use crate::*;
use std::time::Duration;

/// Outcome of one root decision.
///
/// Built once by [`SearchEngine`] and read-only afterwards. Carries the
/// minimax value, the action achieving it, and the effort spent.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SearchResult<A> {
    value: Bound,
    #[serde(rename = "move")]
    edge: Option<A>,
    elapsed: Duration,
    nodes: usize,
}

impl<A> SearchResult<A> {
    pub(crate) fn new(value: Bound, edge: Option<A>, elapsed: Duration, nodes: usize) -> Self {
        Self {
            value,
            edge,
            elapsed,
            nodes,
        }
    }
    /// Minimax value of the root, from Max's point of view.
    ///
    /// Still the opening sentinel if the root had no actions to try.
    pub fn value(&self) -> Bound {
        self.value
    }
    /// The chosen action.
    ///
    /// `None` when the root was already terminal, or when a non-terminal
    /// root offered no actions (a broken [`SearchGame`] contract).
    pub fn edge(&self) -> Option<&A> {
        self.edge.as_ref()
    }
    pub fn into_edge(self) -> Option<A> {
        self.edge
    }
}

impl<A> Telemetry for SearchResult<A> {
    fn nodes(&self) -> usize {
        self.nodes
    }
    fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl<A> std::fmt::Display for SearchResult<A>
where
    A: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.edge {
            Some(ref edge) => write!(f, "Chose move <{}>", edge)?,
            None => write!(f, "Chose move <none>")?,
        }
        write!(
            f,
            " with Minimax value {} after {:.4} seconds, expanding {} nodes",
            self.value,
            self.elapsed.as_secs_f64(),
            self.nodes
        )
    }
}
