use crate::*;
use gambit_search::SearchEdge;

/// One piece moving from one square to another.
///
/// Captures, promotions and conversions are not spelled out: they follow
/// from what stands on `to` when the move is applied.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
pub struct JediMove {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
}

impl SearchEdge for JediMove {}

impl std::fmt::Display for JediMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}->{}", self.piece, self.from, self.to)
    }
}
