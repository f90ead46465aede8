use crate::*;
use gambit_core::JEDI_BOARD_MAX;
use gambit_core::JEDI_BOARD_MIN;
use gambit_search::Player;
use gambit_search::SearchState;

const CELLS: usize = JEDI_BOARD_MAX * JEDI_BOARD_MAX;

/// A Jedi chess position.
///
/// Squares are packed row-major into a fixed array so positions are `Copy`
/// and successors never share storage with their parents.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct JediState {
    cells: [Option<Piece>; CELLS],
    size: usize,
    turn: Player,
    plies: usize,
}

impl JediState {
    /// The starting position: one Sith top-middle, a row of Rebels at the
    /// bottom, Rebel forces to move. `size` must already lie within
    /// `JEDI_BOARD_MIN..=JEDI_BOARD_MAX`.
    pub(crate) fn opening(size: usize) -> Self {
        let mut state = Self::empty(size);
        state.put(Square::new(0, size / 2), Some(Piece::Sith));
        for col in 0..size {
            state.put(Square::new(size - 1, col), Some(Piece::Rebel));
        }
        state
    }

    fn empty(size: usize) -> Self {
        Self {
            cells: [None; CELLS],
            size,
            turn: Player::Max,
            plies: 0,
        }
    }

    /// Same position with `turn` to move.
    pub fn with_turn(mut self, turn: Player) -> Self {
        self.turn = turn;
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }
    pub fn turn(&self) -> Player {
        self.turn
    }
    /// Plies played since the opening.
    pub fn plies(&self) -> usize {
        self.plies
    }

    pub fn at(&self, square: Square) -> Option<Piece> {
        self.cells[square.index(self.size)]
    }

    fn put(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.index(self.size)] = piece;
    }

    /// Every square, row by row from the top.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Square::new(row, col)))
    }

    /// Squares holding `piece`, row by row from the top.
    pub fn occupied(&self, piece: Piece) -> impl Iterator<Item = Square> + '_ {
        self.squares().filter(move |s| self.at(*s) == Some(piece))
    }

    pub fn count(&self, piece: Piece) -> usize {
        self.occupied(piece).count()
    }

    /// Rebels and Jedi still on the board.
    pub fn forces(&self) -> usize {
        self.count(Piece::Rebel) + self.count(Piece::Jedi)
    }

    /// The position after `edge`, which must be legal here.
    ///
    /// - A Rebel reaching row 0 becomes a Jedi.
    /// - A Sith landing on a Jedi converts it into a Sith and stays put.
    /// - Every other move vacates `from` and overwrites `to`, capturing.
    pub fn apply(&self, edge: &JediMove) -> Self {
        let mut next = *self;
        match (edge.piece, self.at(edge.to)) {
            (Piece::Sith, Some(Piece::Jedi)) => {
                next.put(edge.to, Some(Piece::Sith));
            }
            (Piece::Rebel, _) if edge.to.row == 0 => {
                next.put(edge.from, None);
                next.put(edge.to, Some(Piece::Jedi));
            }
            (piece, _) => {
                next.put(edge.from, None);
                next.put(edge.to, Some(piece));
            }
        }
        next.turn = self.turn.flip();
        next.plies = self.plies + 1;
        next
    }
}

impl SearchState for JediState {}

impl TryFrom<&str> for JediState {
    type Error = anyhow::Error;
    /// Parse a diagram: one whitespace-separated token per row, `.` for an
    /// empty square and `S`/`J`/`R` for pieces. Rebel forces move first.
    fn try_from(diagram: &str) -> Result<Self, Self::Error> {
        let rows = diagram.split_whitespace().collect::<Vec<_>>();
        let size = rows.len();
        anyhow::ensure!(
            (JEDI_BOARD_MIN..=JEDI_BOARD_MAX).contains(&size),
            "board must have {}..={} rows, found {}",
            JEDI_BOARD_MIN,
            JEDI_BOARD_MAX,
            size
        );
        let mut state = Self::empty(size);
        for (row, line) in rows.iter().enumerate() {
            anyhow::ensure!(
                line.chars().count() == size,
                "row {} has {} squares, expected {}",
                row,
                line.chars().count(),
                size
            );
            for (col, c) in line.chars().enumerate() {
                let piece = match c {
                    '.' => None,
                    c => Some(Piece::try_from(c)?),
                };
                state.put(Square::new(row, col), piece);
            }
        }
        Ok(state)
    }
}

impl std::fmt::Display for JediState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let border = "+--".repeat(self.size) + "+";
        for row in 0..self.size {
            writeln!(f, "{}", border)?;
            write!(f, "|")?;
            for col in 0..self.size {
                match self.at(Square::new(row, col)) {
                    Some(piece) => write!(f, "{} |", piece)?,
                    None => write!(f, "  |")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "{}", border)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_layout() {
        let state = JediState::opening(5);
        assert_eq!(state.at(Square::new(0, 2)), Some(Piece::Sith));
        assert_eq!(state.count(Piece::Rebel), 5);
        assert_eq!(state.count(Piece::Sith), 1);
        assert_eq!(state.count(Piece::Jedi), 0);
        assert_eq!(state.turn(), Player::Max);
        assert_eq!(state.plies(), 0);
    }

    #[test]
    fn diagram_matches_opening() {
        let parsed = JediState::try_from("..S.. ..... ..... ..... RRRRR").unwrap();
        assert_eq!(parsed, JediState::opening(5));
    }

    #[test]
    fn rejects_bad_diagrams() {
        assert!(JediState::try_from("... ...").is_err());
        assert!(JediState::try_from("... .... ...").is_err());
        assert!(JediState::try_from("..S .X. RRR").is_err());
    }

    #[test]
    fn rebel_promotes_on_the_top_row() {
        let state = JediState::try_from("..S .R. ...").unwrap();
        let edge = JediMove {
            piece: Piece::Rebel,
            from: Square::new(1, 1),
            to: Square::new(0, 1),
        };
        let next = state.apply(&edge);
        assert_eq!(next.at(Square::new(0, 1)), Some(Piece::Jedi));
        assert_eq!(next.at(Square::new(1, 1)), None);
        assert_eq!(next.turn(), Player::Min);
        assert_eq!(next.plies(), 1);
    }

    #[test]
    fn sith_converts_jedi_in_place() {
        let state = JediState::try_from("... .SJ R..").unwrap().with_turn(Player::Min);
        let edge = JediMove {
            piece: Piece::Sith,
            from: Square::new(1, 1),
            to: Square::new(1, 2),
        };
        let next = state.apply(&edge);
        assert_eq!(next.at(Square::new(1, 1)), Some(Piece::Sith));
        assert_eq!(next.at(Square::new(1, 2)), Some(Piece::Sith));
        assert_eq!(next.count(Piece::Jedi), 0);
        assert_eq!(next.turn(), Player::Max);
    }

    #[test]
    fn sith_captures_rebel_by_moving() {
        let state = JediState::try_from("... .S. ..R").unwrap().with_turn(Player::Min);
        let edge = JediMove {
            piece: Piece::Sith,
            from: Square::new(1, 1),
            to: Square::new(2, 2),
        };
        let next = state.apply(&edge);
        assert_eq!(next.at(Square::new(1, 1)), None);
        assert_eq!(next.at(Square::new(2, 2)), Some(Piece::Sith));
        assert_eq!(next.forces(), 0);
    }

    #[test]
    fn apply_leaves_the_parent_alone() {
        let state = JediState::opening(5);
        let before = state;
        let edge = JediMove {
            piece: Piece::Rebel,
            from: Square::new(4, 0),
            to: Square::new(3, 0),
        };
        let _ = state.apply(&edge);
        assert_eq!(state, before);
    }

    #[test]
    fn renders_a_grid() {
        let state = JediState::try_from(".S. ... RJR").unwrap();
        let expected = "\
+--+--+--+
|  |S |  |
+--+--+--+
|  |  |  |
+--+--+--+
|R |J |R |
+--+--+--+";
        assert_eq!(state.to_string(), expected);
    }
}
