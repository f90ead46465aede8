use gambit_search::Player;

/// What can stand on a square.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub enum Piece {
    /// Steps one square in any direction; converts Jedi it lands on.
    Sith,
    /// Slides any distance in any of the eight directions.
    Jedi,
    /// Steps forward; captures Sith forward or diagonally forward.
    Rebel,
}

impl Piece {
    pub fn faction(&self) -> Faction {
        match self {
            Self::Sith => Faction::Sith,
            Self::Jedi | Self::Rebel => Faction::Rebels,
        }
    }
}

impl TryFrom<char> for Piece {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'S' => Ok(Self::Sith),
            'J' => Ok(Self::Jedi),
            'R' => Ok(Self::Rebel),
            _ => Err(anyhow::anyhow!("invalid piece {:?}", c)),
        }
    }
}

impl TryFrom<&str> for Piece {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(anyhow::anyhow!("expected a single piece letter, found {:?}", s)),
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sith => write!(f, "S"),
            Self::Jedi => write!(f, "J"),
            Self::Rebel => write!(f, "R"),
        }
    }
}

/// The two sides.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
pub enum Faction {
    /// Rebels and Jedi, playing Max.
    Rebels,
    /// Sith, playing Min.
    Sith,
}

impl From<Faction> for Player {
    fn from(faction: Faction) -> Self {
        match faction {
            Faction::Rebels => Player::Max,
            Faction::Sith => Player::Min,
        }
    }
}

impl From<Player> for Faction {
    fn from(player: Player) -> Self {
        match player {
            Player::Max => Faction::Rebels,
            Player::Min => Faction::Sith,
        }
    }
}

/// A faction is named by the letter of any piece it fields: `R` or `J` for
/// the Rebel forces, `S` for the Sith.
impl TryFrom<&str> for Faction {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Piece::try_from(s).map(|piece| piece.faction())
    }
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rebels => write!(f, "Rebel forces"),
            Self::Sith => write!(f, "Sith"),
        }
    }
}
