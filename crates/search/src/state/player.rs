use crate::*;
use gambit_core::Utility;

/// One of the two alternating adversaries.
///
/// Max prefers larger values, Min prefers smaller ones. Values are always
/// expressed from Max's point of view.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
pub enum Player {
    Max,
    Min,
}

impl Player {
    /// The opponent, who moves on the next ply.
    pub fn flip(&self) -> Self {
        match self {
            Self::Max => Self::Min,
            Self::Min => Self::Max,
        }
    }
    /// The sentinel this player starts from before any action is seen.
    pub fn worst(&self) -> Bound {
        match self {
            Self::Max => Bound::NegInfinity,
            Self::Min => Bound::PosInfinity,
        }
    }
    /// True if `a` is strictly better than `b` for this player.
    pub fn prefers(&self, a: Bound, b: Bound) -> bool {
        match self {
            Self::Max => a > b,
            Self::Min => a < b,
        }
    }
    /// The better of two values for this player.
    pub fn best(&self, a: Bound, b: Bound) -> Bound {
        match self {
            Self::Max => a.max(b),
            Self::Min => a.min(b),
        }
    }
    /// Whose turn it is at `state`, as reported by the game.
    ///
    /// Returns `None` when the game claims neither side is to move,
    /// which a conforming game only does at terminal states.
    pub fn of<G>(game: &G, state: &G::S) -> Option<Self>
    where
        G: SearchGame,
    {
        if game.is_max_turn(state) {
            Some(Self::Max)
        } else if game.is_min_turn(state) {
            Some(Self::Min)
        } else {
            None
        }
    }
}

impl From<Player> for Utility {
    /// Sign of the player's preference: +1 for Max, -1 for Min.
    fn from(player: Player) -> Self {
        match player {
            Player::Max => 1.,
            Player::Min => -1.,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Max => write!(f, "Max"),
            Self::Min => write!(f, "Min"),
        }
    }
}
