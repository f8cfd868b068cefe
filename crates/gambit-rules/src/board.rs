//! Dense 8x8 board storage.

use gambit_core::{Piece, PieceKind, Pos};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when placing a piece.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid designator")]
    InvalidDesignator,

    #[error("position is occupied")]
    PositionOccupied,

    #[error("invalid position")]
    OutOfBounds,
}

/// An 8x8 chess board.
///
/// Storage is a dense 64-slot array indexed `rank * 8 + file`, so iterating
/// slots in index order visits squares a1, b1, ..., h1, a2, ..., h8, the
/// enumeration order every "scan the whole board" operation relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Board {
            squares: [None; 64],
        }
    }
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the piece at `pos`, or `None` for an empty square or an
    /// off-board position.
    #[inline]
    pub fn piece_at(&self, pos: Pos) -> Option<Piece> {
        self.squares[pos.index()?]
    }

    /// Returns the square of the first piece with the given designator,
    /// scanning in board order. `None` if no such piece exists.
    pub fn find(&self, designator: char) -> Option<Pos> {
        self.pieces()
            .find(|(_, piece)| piece.designator() == designator)
            .map(|(pos, _)| pos)
    }

    /// Places a new piece described by `designator` at `pos`.
    pub fn place(&mut self, pos: Pos, designator: char) -> Result<(), BoardError> {
        let piece = Piece::from_designator(designator).ok_or(BoardError::InvalidDesignator)?;
        let index = pos.index().ok_or(BoardError::OutOfBounds)?;
        if self.squares[index].is_some() {
            return Err(BoardError::PositionOccupied);
        }
        self.squares[index] = Some(piece);
        Ok(())
    }

    /// Removes and returns the piece at `pos`. No-op (returning `None`)
    /// when the square is empty or off the board.
    pub fn remove(&mut self, pos: Pos) -> Option<Piece> {
        self.squares[pos.index()?].take()
    }

    /// Overwrites the slot at `pos` with `piece`, ignoring occupancy.
    /// No-op off the board.
    pub(crate) fn set(&mut self, pos: Pos, piece: Piece) {
        if let Some(index) = pos.index() {
            self.squares[index] = Some(piece);
        }
    }

    /// Removes every piece from the board.
    pub fn clear(&mut self) {
        self.squares = [None; 64];
    }

    /// Returns true if the board holds exactly one king per side.
    ///
    /// Checked on demand rather than enforced on mutation: positions built
    /// up piece by piece, or mid-simulation states, may transiently
    /// violate it.
    pub fn has_valid_kings(&self) -> bool {
        let mut white_kings = 0;
        let mut black_kings = 0;
        for (_, piece) in self.pieces() {
            if piece.kind == PieceKind::King {
                if piece.is_white() {
                    white_kings += 1;
                } else {
                    black_kings += 1;
                }
            }
        }
        white_kings == 1 && black_kings == 1
    }

    /// Iterates all 64 squares in board order, occupied or not.
    pub fn squares(&self) -> impl Iterator<Item = (Pos, Option<Piece>)> + '_ {
        Pos::all().map(|pos| (pos, self.piece_at(pos)))
    }

    /// Iterates the occupied squares in board order.
    pub fn pieces(&self) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        self.squares()
            .filter_map(|(pos, piece)| piece.map(|p| (pos, p)))
    }
}

/// Renders the save-format grid: eight lines from rank 8 down to rank 1,
/// `-` for empty squares, each line newline-terminated.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0i8..8).rev() {
            for file in 0i8..8 {
                match self.piece_at(Pos::new(file, rank)) {
                    Some(piece) => write!(f, "{}", piece.designator())?,
                    None => write!(f, "-")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
