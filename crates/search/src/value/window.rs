use crate::*;

/// The alpha-beta interval for one search frame.
///
/// - `alpha` — the best value Max is already guaranteed elsewhere
/// - `beta` — the best value Min is already guaranteed elsewhere
///
/// A frame whose running best leaves the window can stop: the player
/// above it will never allow play to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub alpha: Bound,
    pub beta: Bound,
}

impl Window {
    /// The unbounded window a root decision starts from.
    pub fn full() -> Self {
        Self {
            alpha: Bound::NegInfinity,
            beta: Bound::PosInfinity,
        }
    }
    /// True if `best` for `player` already makes the remaining siblings
    /// irrelevant (a beta cutoff for Max, an alpha cutoff for Min).
    pub fn cuts(&self, player: Player, best: Bound) -> bool {
        match player {
            Player::Max => best >= self.beta,
            Player::Min => best <= self.alpha,
        }
    }
    /// Tighten the bound owned by `player` with its running best.
    pub fn narrow(&mut self, player: Player, best: Bound) {
        match player {
            Player::Max => self.alpha = self.alpha.max(best),
            Player::Min => self.beta = self.beta.min(best),
        }
    }
}
