use crate::*;
use gambit_core::Depth;
use gambit_core::Utility;

/// The rules object a [`SearchEngine`] searches over.
///
/// Owns everything game-specific: state transitions, turn and terminal
/// tests, exact payoffs, and the depth-limiting policy with its heuristic.
/// The engine only ever calls these methods; it never inspects `S` or `A`.
///
/// # Required Methods
///
/// - `root()` — Creates the starting position (used by drivers, not the engine)
/// - `is_max_turn(state)` / `is_min_turn(state)` — Whose move it is
/// - `is_terminal(state)` — True iff the game is over
/// - `utility(state)` — Exact payoff of a terminal position
/// - `actions(state)` — Legal actions, in the order the engine will try them
/// - `result(state, action)` — Successor position
/// - `cutoff(state, depth)` — Whether to stop expanding here
/// - `evaluate(state)` — Heuristic estimate where `cutoff` stops the search
///
/// # Contract
///
/// - `utility` and `evaluate` stay within one game-defined range
///   `[k_min, k_max]`, where `k_min` means Min has won and `k_max` means
///   Max has won. An estimate is never more extreme than a known result.
/// - `actions` is non-empty for every non-terminal state.
/// - `result` is pure: it leaves `state` untouched and depends only on its
///   arguments.
/// - The turn queries are mutually exclusive on non-terminal states.
///
/// None of these are checked at runtime. Violations do not panic; they
/// silently degrade the answer (see [`SearchResult::edge`]).
pub trait SearchGame {
    /// Position type.
    type S: SearchState;
    /// Action type.
    type A: SearchEdge;

    fn root(&self) -> Self::S;
    fn is_max_turn(&self, state: &Self::S) -> bool;
    fn is_min_turn(&self, state: &Self::S) -> bool;
    fn is_terminal(&self, state: &Self::S) -> bool;
    /// Only called on terminal states.
    fn utility(&self, state: &Self::S) -> Utility;
    fn actions(&self, state: &Self::S) -> Vec<Self::A>;
    fn result(&self, state: &Self::S, action: &Self::A) -> Self::S;
    /// `depth` counts plies below the root, starting at 1 for the root's
    /// children. The root itself is never tested.
    fn cutoff(&self, state: &Self::S, depth: Depth) -> bool;
    /// Only called on non-terminal states for which `cutoff` returned true.
    fn evaluate(&self, state: &Self::S) -> Utility;
}
