use super::*;
use crate::*;
use gambit_core::Arbitrary;
use gambit_core::Depth;
use gambit_core::Utility;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

/// Payload of one tree node.
#[derive(Debug, Clone, Copy)]
struct Vertex {
    /// Plies below the root.
    depth: Depth,
    /// Exact payoff; present iff the node is terminal.
    utility: Option<Utility>,
    /// Heuristic estimate returned when the search is cut off here.
    estimate: Utility,
}

/// Payload of one tree edge.
#[derive(Debug, Clone)]
struct Branch {
    label: String,
    /// Insertion rank among siblings, which fixes action order.
    ordinal: usize,
}

/// Counters of how the engine has queried a [`TreeGame`].
#[derive(Debug, Default)]
struct Probes {
    actions: AtomicUsize,
    evaluations: AtomicUsize,
    deepest: AtomicUsize,
}

/// A finite game written out as a directed tree.
///
/// Turns alternate by depth starting with the player given at construction.
/// Leaves carry utilities; interior nodes carry heuristic estimates used
/// once the search reaches the optional horizon depth.
///
/// ```
/// use gambit_search::*;
///
/// let mut game = TreeGame::new(Player::Max);
/// let root = game.origin();
/// game.leaf(root, "A", 10.);
/// game.leaf(root, "B", -5.);
/// let result = SearchEngine::new(&game).decide_for_max(&game.root());
/// assert_eq!(result.value(), Bound::from(10.));
/// assert_eq!(result.edge().map(TreeEdge::label), Some("A"));
/// ```
#[derive(Debug)]
pub struct TreeGame {
    graph: DiGraph<Vertex, Branch>,
    origin: NodeIndex,
    first: Player,
    horizon: Option<Depth>,
    probes: Probes,
}

impl TreeGame {
    /// An interior root with `first` to move and no children yet.
    pub fn new(first: Player) -> Self {
        let mut graph = DiGraph::new();
        let origin = graph.add_node(Vertex {
            depth: 0,
            utility: None,
            estimate: 0.,
        });
        Self {
            graph,
            origin,
            first,
            horizon: None,
            probes: Probes::default(),
        }
    }

    /// A game that is over before it starts.
    pub fn terminal(utility: Utility) -> Self {
        let mut game = Self::new(Player::Max);
        game.graph[game.origin].utility = Some(utility);
        game
    }

    /// A complete tree of uniform `branching` and `depth`, with integer
    /// leaf utilities in `-100..=100` and estimates in `-50..=50`.
    pub fn seeded(depth: Depth, branching: usize, seed: u64) -> Self {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let mut game = Self::new(Player::Max);
        let mut frontier = vec![game.origin];
        for level in 1..=depth {
            let mut next = Vec::with_capacity(frontier.len() * branching);
            for parent in frontier {
                for i in 0..branching {
                    let label = format!("{}", i);
                    let child = match level == depth {
                        true => game.leaf(parent, &label, rng.random_range(-100..=100) as Utility),
                        false => game.node(parent, &label, rng.random_range(-50..=50) as Utility),
                    };
                    next.push(child);
                }
            }
            frontier = next;
        }
        game
    }

    /// Cut the search off at `depth`: nodes that deep are estimated, not expanded.
    pub fn with_horizon(mut self, depth: Depth) -> Self {
        self.horizon = Some(depth);
        self
    }

    /// Hand the first move to `first` instead of Max.
    pub fn with_first(mut self, first: Player) -> Self {
        self.first = first;
        self
    }

    /// The root node, for building the tree.
    pub fn origin(&self) -> NodeIndex {
        self.origin
    }

    /// Attach a terminal child worth `utility`.
    pub fn leaf(&mut self, parent: NodeIndex, label: &str, utility: Utility) -> NodeIndex {
        self.grow(parent, label, Some(utility), 0.)
    }

    /// Attach a non-terminal child estimated at `estimate`.
    pub fn node(&mut self, parent: NodeIndex, label: &str, estimate: Utility) -> NodeIndex {
        self.grow(parent, label, None, estimate)
    }

    fn grow(
        &mut self,
        parent: NodeIndex,
        label: &str,
        utility: Option<Utility>,
        estimate: Utility,
    ) -> NodeIndex {
        let depth = self.graph[parent].depth + 1;
        let ordinal = self.graph.edges(parent).count();
        let child = self.graph.add_node(Vertex {
            depth,
            utility,
            estimate,
        });
        let label = label.to_string();
        self.graph.add_edge(parent, child, Branch { label, ordinal });
        child
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        self.graph.node_count()
    }

    /// Times the engine asked for a node's actions.
    pub fn action_queries(&self) -> usize {
        self.probes.actions.load(Ordering::Relaxed)
    }
    /// Times the engine fell back to a heuristic estimate.
    pub fn evaluations(&self) -> usize {
        self.probes.evaluations.load(Ordering::Relaxed)
    }
    /// Deepest depth the engine has offered to the cutoff test.
    pub fn deepest(&self) -> Depth {
        self.probes.deepest.load(Ordering::Relaxed)
    }

    fn player(&self, state: &TreeState) -> Player {
        match self.graph[state.0].depth % 2 {
            0 => self.first,
            _ => self.first.flip(),
        }
    }
}

impl SearchGame for TreeGame {
    type S = TreeState;
    type A = TreeEdge;
    fn root(&self) -> Self::S {
        TreeState(self.origin)
    }
    fn is_max_turn(&self, state: &Self::S) -> bool {
        !self.is_terminal(state) && self.player(state) == Player::Max
    }
    fn is_min_turn(&self, state: &Self::S) -> bool {
        !self.is_terminal(state) && self.player(state) == Player::Min
    }
    fn is_terminal(&self, state: &Self::S) -> bool {
        self.graph[state.0].utility.is_some()
    }
    fn utility(&self, state: &Self::S) -> Utility {
        self.graph[state.0].utility.unwrap_or_default()
    }
    fn actions(&self, state: &Self::S) -> Vec<Self::A> {
        self.probes.actions.fetch_add(1, Ordering::Relaxed);
        let mut edges = self
            .graph
            .edges(state.0)
            .map(|e| (e.weight().ordinal, e.weight().label.clone(), e.target()))
            .collect::<Vec<_>>();
        edges.sort_by_key(|(ordinal, _, _)| *ordinal);
        edges
            .into_iter()
            .map(|(_, label, child)| TreeEdge { label, child })
            .collect()
    }
    fn result(&self, _: &Self::S, action: &Self::A) -> Self::S {
        TreeState(action.child)
    }
    fn cutoff(&self, _: &Self::S, depth: Depth) -> bool {
        self.probes.deepest.fetch_max(depth, Ordering::Relaxed);
        self.horizon.is_some_and(|h| depth >= h)
    }
    fn evaluate(&self, state: &Self::S) -> Utility {
        self.probes.evaluations.fetch_add(1, Ordering::Relaxed);
        self.graph[state.0].estimate
    }
}

impl Arbitrary for TreeGame {
    fn random() -> Self {
        Self::seeded(4, 3, rand::random())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_keep_insertion_order() {
        let mut game = TreeGame::new(Player::Max);
        let root = game.origin();
        for label in ["x", "y", "z"] {
            game.leaf(root, label, 0.);
        }
        let labels = game
            .actions(&game.root())
            .iter()
            .map(|e| e.label().to_string())
            .collect::<Vec<_>>();
        assert_eq!(labels, ["x", "y", "z"]);
    }

    #[test]
    fn turns_alternate_by_depth() {
        let mut game = TreeGame::new(Player::Min);
        let root = game.origin();
        let mid = game.node(root, "a", 0.);
        game.leaf(mid, "b", 1.);
        assert!(game.is_min_turn(&game.root()));
        assert!(game.is_max_turn(&TreeState(mid)));
        assert!(!game.is_max_turn(&game.root()));
    }

    #[test]
    fn leaves_are_terminal() {
        let mut game = TreeGame::new(Player::Max);
        let root = game.origin();
        let leaf = game.leaf(root, "a", 4.);
        let ref state = TreeState(leaf);
        assert!(game.is_terminal(state));
        assert!(!game.is_max_turn(state) && !game.is_min_turn(state));
        assert_eq!(game.utility(state), 4.);
        assert!(!game.is_terminal(&game.root()));
    }

    #[test]
    fn random_tree_is_complete() {
        let game = TreeGame::seeded(3, 2, 7);
        assert_eq!(game.size(), 1 + 2 + 4 + 8);
        let again = TreeGame::seeded(3, 2, 7);
        let a = game.actions(&game.root());
        let b = again.actions(&again.root());
        assert_eq!(a, b);
    }

    #[test]
    fn horizon_drives_cutoff() {
        let game = TreeGame::new(Player::Max).with_horizon(2);
        let ref root = game.root();
        assert!(!game.cutoff(root, 1));
        assert!(game.cutoff(root, 2));
        assert!(game.cutoff(root, 3));
        assert_eq!(game.deepest(), 3);
    }

    #[test]
    fn arbitrary_trees_have_default_shape() {
        let game = <TreeGame as Arbitrary>::random();
        assert_eq!(game.size(), 1 + 3 + 9 + 27 + 81);
    }
}
