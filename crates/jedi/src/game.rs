use crate::*;
use gambit_core::*;
use gambit_search::Player;
use gambit_search::SearchGame;

/// The eight compass directions, in the order Jedi slides are generated.
const DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

/// Jedi chess rules with a depth-limited search policy.
///
/// `depth` is the deepest ply the search expands before falling back to
/// [`evaluate`](SearchGame::evaluate); zero searches to the end of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JediGame {
    size: usize,
    depth: Depth,
    limit: usize,
}

impl Default for JediGame {
    fn default() -> Self {
        Self {
            size: JEDI_BOARD_SIZE,
            depth: 0,
            limit: JEDI_PLY_LIMIT,
        }
    }
}

impl JediGame {
    pub fn new(size: usize, depth: Depth) -> anyhow::Result<Self> {
        anyhow::ensure!(
            (JEDI_BOARD_MIN..=JEDI_BOARD_MAX).contains(&size),
            "board size {} outside {}..={}",
            size,
            JEDI_BOARD_MIN,
            JEDI_BOARD_MAX
        );
        Ok(Self {
            size,
            depth,
            ..Self::default()
        })
    }

    /// Draw undecided games after `limit` plies instead of the default.
    pub fn with_ply_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }
    pub fn depth(&self) -> Depth {
        self.depth
    }

    /// The side that has won, if the game is decided.
    pub fn winner(&self, state: &JediState) -> Option<Faction> {
        if state.count(Piece::Sith) == 0 {
            Some(Faction::Rebels)
        } else if state.forces() == 0 {
            Some(Faction::Sith)
        } else {
            None
        }
    }

    /// Forward one row onto an empty or Sith square; diagonally forward
    /// only onto a Sith.
    fn rebel_moves(state: &JediState) -> impl Iterator<Item = JediMove> + '_ {
        state.occupied(Piece::Rebel).flat_map(move |from| {
            [(1, false), (-1, false), (0, true)]
                .into_iter()
                .filter_map(move |(dc, quiet)| {
                    let to = from.offset(-1, dc, state.size())?;
                    let legal = match state.at(to) {
                        Some(Piece::Sith) => true,
                        None => quiet,
                        Some(_) => false,
                    };
                    legal.then_some(JediMove {
                        piece: Piece::Rebel,
                        from,
                        to,
                    })
                })
        })
    }

    /// Slide until blocked, optionally capturing the blocking Sith.
    fn jedi_moves(state: &JediState) -> impl Iterator<Item = JediMove> + '_ {
        let size = state.size();
        state.occupied(Piece::Jedi).flat_map(move |from| {
            DIRECTIONS.into_iter().flat_map(move |(dr, dc)| {
                std::iter::successors(from.offset(dr, dc, size), move |at| match state.at(*at) {
                    None => at.offset(dr, dc, size),
                    Some(_) => None,
                })
                .filter(move |to| matches!(state.at(*to), None | Some(Piece::Sith)))
                .map(move |to| JediMove {
                    piece: Piece::Jedi,
                    from,
                    to,
                })
            })
        })
    }

    /// One step in any direction onto anything but another Sith.
    fn sith_moves(state: &JediState) -> impl Iterator<Item = JediMove> + '_ {
        state.occupied(Piece::Sith).flat_map(move |from| {
            (-1..=1)
                .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
                .filter(|step| *step != (0, 0))
                .filter_map(move |(dr, dc)| from.offset(dr, dc, state.size()))
                .filter(move |to| state.at(*to) != Some(Piece::Sith))
                .map(move |to| JediMove {
                    piece: Piece::Sith,
                    from,
                    to,
                })
        })
    }

    /// Legal moves for the side to move, generated lazily in action order.
    fn moves(state: &JediState) -> Box<dyn Iterator<Item = JediMove> + '_> {
        match state.turn() {
            Player::Max => Box::new(Self::rebel_moves(state).chain(Self::jedi_moves(state))),
            Player::Min => Box::new(Self::sith_moves(state)),
        }
    }
}

impl SearchGame for JediGame {
    type S = JediState;
    type A = JediMove;
    fn root(&self) -> Self::S {
        JediState::opening(self.size)
    }
    fn is_max_turn(&self, state: &Self::S) -> bool {
        state.turn() == Player::Max
    }
    fn is_min_turn(&self, state: &Self::S) -> bool {
        state.turn() == Player::Min
    }
    /// Decided, out of plies, or stalemated (the side to move has no move).
    fn is_terminal(&self, state: &Self::S) -> bool {
        self.winner(state).is_some()
            || state.plies() >= self.limit
            || Self::moves(state).next().is_none()
    }
    fn utility(&self, state: &Self::S) -> Utility {
        match self.winner(state) {
            Some(Faction::Rebels) => JEDI_WIN_UTILITY,
            Some(Faction::Sith) => -JEDI_WIN_UTILITY,
            None => JEDI_DRAW_UTILITY,
        }
    }
    fn actions(&self, state: &Self::S) -> Vec<Self::A> {
        Self::moves(state).collect()
    }
    fn result(&self, state: &Self::S, action: &Self::A) -> Self::S {
        state.apply(action)
    }
    fn cutoff(&self, _: &Self::S, depth: Depth) -> bool {
        self.depth > 0 && depth > self.depth
    }
    /// Material from Max's side plus a bonus for the side to move.
    fn evaluate(&self, state: &Self::S) -> Utility {
        let tempo = TURN_BONUS * Utility::from(state.turn());
        let rebels = WEIGHT_REBEL * state.count(Piece::Rebel) as Utility;
        let jedi = WEIGHT_JEDI * state.count(Piece::Jedi) as Utility;
        let sith = WEIGHT_SITH * state.count(Piece::Sith) as Utility;
        (tempo + rebels + jedi - sith).clamp(-EVAL_CEILING, EVAL_CEILING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gambit_search::Bound;
    use gambit_search::SearchEngine;
    use gambit_search::Telemetry;

    fn game() -> JediGame {
        JediGame::new(5, 1).unwrap()
    }

    #[test]
    fn rejects_unplayable_sizes() {
        assert!(JediGame::new(2, 1).is_err());
        assert!(JediGame::new(9, 1).is_err());
        assert!(JediGame::new(3, 0).is_ok());
    }

    #[test]
    fn opening_moves_are_single_steps() {
        let game = game();
        let ref root = game.root();
        let moves = game.actions(root);
        assert_eq!(moves.len(), 5);
        assert!(moves.iter().all(|m| m.piece == Piece::Rebel));
        assert!(moves.iter().all(|m| m.to.row == 3 && m.to.col == m.from.col));
        assert!(game.is_max_turn(root) && !game.is_min_turn(root));
    }

    #[test]
    fn sith_steps_around_itself() {
        let game = game();
        let ref state = game.root().with_turn(Player::Min);
        let moves = game.actions(state);
        assert_eq!(moves.len(), 5);
        assert!(moves.iter().all(|m| m.from == Square::new(0, 2)));
    }

    #[test]
    fn sith_never_lands_on_sith() {
        let game = game();
        let ref state = JediState::try_from("SS... ..... ..... ..... RRRRR")
            .unwrap()
            .with_turn(Player::Min);
        let moves = game.actions(state);
        assert!(moves.iter().all(|m| state.at(m.to) != Some(Piece::Sith)));
        assert_eq!(moves.len(), 2 + 4);
    }

    #[test]
    fn rebels_capture_diagonally_only_onto_sith() {
        let game = game();
        let ref state = JediState::try_from("..... ..S.. .R.R. ..... .....").unwrap();
        let moves = game.actions(state);
        let diagonal = moves.iter().filter(|m| m.to.col != m.from.col).count();
        assert_eq!(diagonal, 2);
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn rebels_are_blocked_by_their_own() {
        let game = game();
        let ref state = JediState::try_from("S.... ..... ..... ..R.. ..R..").unwrap();
        let moves = game.actions(state);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].from, Square::new(3, 2));
    }

    #[test]
    fn jedi_slide_until_blocked() {
        let game = game();
        let ref state = JediState::try_from("S.... ..... ..J.. ..R.. .....").unwrap();
        let moves = game.actions(state);
        let jedi = moves.iter().filter(|m| m.piece == Piece::Jedi).count();
        let rebel = moves.iter().filter(|m| m.piece == Piece::Rebel).count();
        assert_eq!(jedi, 14);
        assert_eq!(rebel, 0);
        assert!(moves.iter().any(|m| m.to == Square::new(0, 0)));
    }

    #[test]
    fn terminal_states_score_the_winner() {
        let game = game();
        let ref rebels = JediState::try_from("..J.. ..... ..... ..... .....").unwrap();
        let ref sith = JediState::try_from("..S.. ..... ..... ..... .....").unwrap();
        assert!(game.is_terminal(rebels));
        assert_eq!(game.utility(rebels), 61.);
        assert_eq!(game.winner(rebels), Some(Faction::Rebels));
        assert!(game.is_terminal(sith));
        assert_eq!(game.utility(sith), -61.);
        assert_eq!(game.winner(sith), Some(Faction::Sith));
    }

    #[test]
    fn ply_limit_draws() {
        let game = game().with_ply_limit(1);
        let ref root = game.root();
        assert!(!game.is_terminal(root));
        let ref next = game.result(root, &game.actions(root)[0]);
        assert!(game.is_terminal(next));
        assert_eq!(game.winner(next), None);
        assert_eq!(game.utility(next), 0.);
    }

    #[test]
    fn stalemate_is_a_draw() {
        let game = game();
        let ref state = JediState::try_from("JJJ RRR ..S").unwrap();
        assert!(game.actions(state).is_empty());
        assert!(game.is_terminal(state));
        assert_eq!(game.winner(state), None);
        assert_eq!(game.utility(state), 0.);
    }

    #[test]
    fn every_playable_size_opens() {
        for size in JEDI_BOARD_MIN..=JEDI_BOARD_MAX {
            let game = JediGame::new(size, 1).unwrap();
            let ref root = game.root();
            assert_eq!(root.size(), size);
            assert_eq!(root.count(Piece::Sith), 1);
            assert_eq!(game.actions(root).len(), size);
        }
        assert!(JediGame::new(0, 1).is_err());
    }

    #[test]
    fn terminal_check_agrees_with_move_list() {
        for size in JEDI_BOARD_MIN..=JEDI_BOARD_MAX {
            let game = JediGame::new(size, 1).unwrap();
            let mut state = game.root();
            for ply in 0.. {
                let moves = game.actions(&state);
                let decided = game.winner(&state).is_some() || state.plies() >= JEDI_PLY_LIMIT;
                assert_eq!(game.is_terminal(&state), decided || moves.is_empty());
                if game.is_terminal(&state) {
                    break;
                }
                state = game.result(&state, &moves[(ply * 7) % moves.len()]);
            }
        }
    }

    #[test]
    fn cutoff_follows_depth_limit() {
        let ref root = game().root();
        assert!(!game().cutoff(root, 1));
        assert!(game().cutoff(root, 2));
        let unlimited = JediGame::new(5, 0).unwrap();
        assert!(!unlimited.cutoff(root, 100));
    }

    #[test]
    fn evaluation_counts_material_and_tempo() {
        let game = game();
        let ref root = game.root();
        assert_eq!(game.evaluate(root), 10. + 5. - 10.);
        let ref next = game.result(root, &game.actions(root)[0]);
        assert_eq!(game.evaluate(next), -10. + 5. - 10.);
    }

    #[test]
    fn evaluation_stays_inside_utilities() {
        let game = JediGame::new(8, 1).unwrap();
        let ref crowded = JediState::try_from(
            "JJJJJJJJ JJJJJJJJ ........ ........ ........ ........ ........ .......S",
        )
        .unwrap();
        assert_eq!(game.evaluate(crowded), EVAL_CEILING);
        assert!(game.evaluate(crowded) < JEDI_WIN_UTILITY);
    }

    #[test]
    fn search_takes_the_last_sith() {
        let game = game();
        let ref state = JediState::try_from("..S.. .R... ..... ..... .....").unwrap();
        let result = SearchEngine::new(&game).decide_for_max(state);
        assert_eq!(result.value(), Bound::from(JEDI_WIN_UTILITY));
        assert_eq!(result.edge().map(|m| m.to), Some(Square::new(0, 2)));
    }

    #[test]
    fn search_takes_the_last_rebel() {
        let game = game();
        let ref state = JediState::try_from("..... ..... ..S.. ...R. .....")
            .unwrap()
            .with_turn(Player::Min);
        let result = SearchEngine::new(&game).decide_for_min(state);
        assert_eq!(result.value(), Bound::from(-JEDI_WIN_UTILITY));
        assert_eq!(result.edge().map(|m| m.to), Some(Square::new(3, 3)));
    }

    #[test]
    fn search_from_the_opening_picks_a_legal_move() {
        let game = game();
        let ref root = game.root();
        let result = SearchEngine::new(&game).decide_for_max(root);
        let edge = result.edge().copied().expect("opening has moves");
        assert!(game.actions(root).contains(&edge));
        assert!(result.value().is_finite());
        assert!(result.nodes() > 1);
    }
}
