use crate::*;
use gambit_core::Depth;
use std::time::Instant;

/// Depth-first minimax search with alpha-beta pruning.
///
/// Borrows a [`SearchGame`] and answers "which action should Max (or Min)
/// take here?" by expanding the game tree through the game's methods alone.
///
/// # Root vs. interior
///
/// The root tries every action the game lists and never stops early; the
/// running best only narrows the window handed to the next sibling.
/// Interior frames stop as soon as their running best leaves the window.
///
/// # Reuse
///
/// The engine holds no search state of its own. Node counts and timing are
/// scoped to a single [`decide`](Self::decide) call and returned in the
/// [`SearchResult`], so one engine may serve several threads at once when
/// the game is `Sync`.
pub struct SearchEngine<'game, G>
where
    G: SearchGame,
{
    game: &'game G,
}

impl<'game, G> From<&'game G> for SearchEngine<'game, G>
where
    G: SearchGame,
{
    fn from(game: &'game G) -> Self {
        Self { game }
    }
}

impl<'game, G> SearchEngine<'game, G>
where
    G: SearchGame,
{
    pub fn new(game: &'game G) -> Self {
        Self::from(game)
    }

    /// Best action for Max, who must be the player to move at `state`.
    pub fn decide_for_max(&self, state: &G::S) -> SearchResult<G::A> {
        self.decide(Player::Max, state)
    }

    /// Best action for Min, who must be the player to move at `state`.
    pub fn decide_for_min(&self, state: &G::S) -> SearchResult<G::A> {
        self.decide(Player::Min, state)
    }

    /// Best action for `player`, who must be the player to move at `state`.
    ///
    /// Ties go to the action the game listed first. A terminal `state` is
    /// scored without asking the game for actions and yields no move.
    pub fn decide(&self, player: Player, state: &G::S) -> SearchResult<G::A> {
        let start = Instant::now();
        let ref mut walk = Walk::from(self.game);
        let (value, edge) = match self.game.is_terminal(state) {
            true => (Bound::from(self.game.utility(state)), None),
            false => walk.root(player, state),
        };
        let result = SearchResult::new(value, edge, start.elapsed(), walk.nodes);
        log::debug!(
            "{} decided {} ({} nodes, {:.4}s)",
            player,
            result.value(),
            result.nodes(),
            result.elapsed().as_secs_f64()
        );
        result
    }
}

/// Mutable scratch for one root decision.
struct Walk<'game, G>
where
    G: SearchGame,
{
    game: &'game G,
    nodes: usize,
}

impl<'game, G> From<&'game G> for Walk<'game, G>
where
    G: SearchGame,
{
    fn from(game: &'game G) -> Self {
        Self { game, nodes: 0 }
    }
}

impl<'game, G> Walk<'game, G>
where
    G: SearchGame,
{
    /// Enumerate every root action; the first strictly better one wins.
    fn root(&mut self, player: Player, state: &G::S) -> (Bound, Option<G::A>) {
        self.nodes += 1;
        let mut window = Window::full();
        let mut best = player.worst();
        let mut edge = None;
        for action in self.game.actions(state) {
            let ref child = self.game.result(state, &action);
            let value = self.value(player.flip(), child, window, 1);
            log::trace!("{} root {} -> {}", player, action, value);
            if player.prefers(value, best) {
                best = value;
                edge = Some(action);
            }
            window.narrow(player, best);
        }
        (best, edge)
    }

    /// Minimax value of `state` with `player` to move, within `window`.
    fn value(&mut self, player: Player, state: &G::S, mut window: Window, depth: Depth) -> Bound {
        if self.game.is_terminal(state) {
            return Bound::from(self.game.utility(state));
        }
        if self.game.cutoff(state, depth) {
            return Bound::from(self.game.evaluate(state));
        }
        self.nodes += 1;
        let mut best = player.worst();
        for ref action in self.game.actions(state) {
            let ref child = self.game.result(state, action);
            let value = self.value(player.flip(), child, window, depth + 1);
            best = player.best(best, value);
            if window.cuts(player, best) {
                return best;
            }
            window.narrow(player, best);
        }
        best
    }
}
