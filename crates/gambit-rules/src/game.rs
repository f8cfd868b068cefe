//! Game state and the move-legality pipeline.

use crate::{Board, BoardError};
use gambit_core::{Color, Piece, PieceKind, Pos, SaveData, TextError};
use std::fmt;
use thiserror::Error;

/// Reasons a move attempt is rejected.
///
/// These are ordinary outcomes of play, not faults: a rejected move leaves
/// the game exactly as it was, and the game stays playable.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("start position is not on board")]
    StartNotOnBoard,

    #[error("end position is not on board")]
    EndNotOnBoard,

    #[error("no piece at start position")]
    NoPieceAtStart,

    #[error("piece color and turn do not match")]
    WrongSideToMove,

    #[error("cannot capture own piece")]
    CannotCaptureOwnPiece,

    #[error("illegal capture shape")]
    IllegalCaptureShape,

    #[error("illegal move shape")]
    IllegalMoveShape,

    #[error("path is not clear")]
    PathNotClear,

    #[error("this move causes a check")]
    MoveCausesCheck,
}

/// Errors that can occur when loading a saved game.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("malformed save text: {0}")]
    Format(#[from] TextError),

    #[error("invalid board contents: {0}")]
    Placement(#[from] BoardError),
}

/// Back-rank piece order, file a through file h.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A chess game: a board plus the side to move.
///
/// [`make_move`](Game::make_move) is the only mutating transition; it either
/// fully succeeds (board updated, turn flipped) or fully fails with no
/// mutation at all. Every "what if" question (check simulation, mate and
/// stalemate enumeration) runs against a disposable clone, so the real
/// game is never observed in a partial state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Color,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game in the standard opening position, white to move.
    pub fn new() -> Self {
        let mut board = Board::new();
        for (file, &kind) in (0i8..).zip(BACK_RANK.iter()) {
            board.set(Pos::new(file, 0), Piece::new(kind, Color::White));
            board.set(Pos::new(file, 1), Piece::new(PieceKind::Pawn, Color::White));
            board.set(Pos::new(file, 6), Piece::new(PieceKind::Pawn, Color::Black));
            board.set(Pos::new(file, 7), Piece::new(kind, Color::Black));
        }
        Game {
            board,
            side_to_move: Color::White,
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns true if the board holds exactly one king per side.
    pub fn is_valid(&self) -> bool {
        self.board.has_valid_kings()
    }

    /// Attempts to move the piece at `from` to `to`.
    ///
    /// Validation runs in a fixed order and the first failing check aborts
    /// the whole move with no mutation: bounds, piece presence, turn,
    /// capture or movement shape, path clearance for linear moves, and
    /// finally the self-check simulation. On success the captured piece (if
    /// any) is removed, a pawn reaching its promotion rank becomes a queen,
    /// the piece is relocated, and the turn flips.
    pub fn make_move(&mut self, from: Pos, to: Pos) -> Result<(), MoveError> {
        if !from.on_board() {
            return Err(MoveError::StartNotOnBoard);
        }
        if !to.on_board() {
            return Err(MoveError::EndNotOnBoard);
        }

        let piece = self.board.piece_at(from).ok_or(MoveError::NoPieceAtStart)?;
        if piece.color != self.side_to_move {
            return Err(MoveError::WrongSideToMove);
        }

        match self.board.piece_at(to) {
            Some(target) => {
                if target.color == piece.color {
                    return Err(MoveError::CannotCaptureOwnPiece);
                }
                if !piece.capture_shape_ok(from, to) {
                    return Err(MoveError::IllegalCaptureShape);
                }
            }
            None => {
                if !piece.movement_shape_ok(from, to) {
                    return Err(MoveError::IllegalMoveShape);
                }
            }
        }

        // Linearity is a property of the squares, not the piece kind, so
        // knight-shaped moves skip the scan: they have no intermediate
        // squares.
        if is_linear(from, to) && !self.path_clear(from, to) {
            return Err(MoveError::PathNotClear);
        }

        if self.would_cause_check(from, to) {
            return Err(MoveError::MoveCausesCheck);
        }

        let moved = if self.promotes(piece, to) {
            Piece::new(PieceKind::Queen, piece.color)
        } else {
            piece
        };
        self.board.remove(to);
        self.board.remove(from);
        self.board.set(to, moved);
        self.side_to_move = self.side_to_move.opposite();
        Ok(())
    }

    /// Returns true if moving `piece` to `to` promotes it.
    fn promotes(&self, piece: Piece, to: Pos) -> bool {
        piece.kind == PieceKind::Pawn && to.rank() == piece.color.promotion_rank()
    }

    /// Returns true if the strictly-between squares of a linear move are
    /// all empty. Endpoints are never examined: the start square holds the
    /// moving piece, and the end square may hold a capture target.
    fn path_clear(&self, from: Pos, to: Pos) -> bool {
        let file_step = (to.file() - from.file()).signum();
        let rank_step = (to.rank() - from.rank()).signum();
        let distance = (to.file() - from.file())
            .abs()
            .max((to.rank() - from.rank()).abs());
        (1..distance).all(|i| {
            self.board
                .piece_at(from.offset(file_step * i, rank_step * i))
                .is_none()
        })
    }

    /// Returns true if `color`'s king is currently attacked.
    ///
    /// A board with no king of that color (an invalid game) reports "not in
    /// check" rather than failing.
    pub fn in_check(&self, color: Color) -> bool {
        let king = Piece::new(PieceKind::King, color);
        let Some(king_pos) = self.board.find(king.designator()) else {
            return false;
        };
        self.board.pieces().any(|(pos, piece)| {
            piece.color != color
                && piece.capture_shape_ok(pos, king_pos)
                && (!is_linear(pos, king_pos) || self.path_clear(pos, king_pos))
        })
    }

    /// Returns true if relocating the piece at `from` to `to` would leave
    /// its own king attacked.
    ///
    /// The relocation is applied raw on a disposable clone, with no
    /// legality re-check and any occupant of `to` removed, so this answers
    /// only the king-safety question the caller has left open.
    pub fn would_cause_check(&self, from: Pos, to: Pos) -> bool {
        let Some(piece) = self.board.piece_at(from) else {
            return false;
        };
        let mut probe = self.clone();
        probe.board.remove(to);
        probe.board.remove(from);
        probe.board.set(to, piece);
        probe.in_check(piece.color)
    }

    /// Returns true if the piece at `pos` has at least one legal move.
    ///
    /// Brute force: every board square is tried as a destination on a
    /// disposable clone whose turn is forced to the piece's color, so the
    /// answer is meaningful for either side. Any attempt that succeeds
    /// proves a legal move exists.
    pub fn has_any_legal_move(&self, pos: Pos) -> bool {
        let Some(piece) = self.board.piece_at(pos) else {
            return false;
        };
        Pos::all().any(|target| {
            let mut probe = self.clone();
            probe.side_to_move = piece.color;
            probe.make_move(pos, target).is_ok()
        })
    }

    /// Returns true if `color` is checkmated: in check now, with no legal
    /// move by any of its pieces.
    pub fn in_checkmate(&self, color: Color) -> bool {
        if !self.in_check(color) {
            return false;
        }
        !self.color_has_legal_move(color)
    }

    /// Returns true if `color` is stalemated: not in check, but without a
    /// legal move anywhere.
    pub fn in_stalemate(&self, color: Color) -> bool {
        if self.in_check(color) {
            return false;
        }
        !self.color_has_legal_move(color)
    }

    fn color_has_legal_move(&self, color: Color) -> bool {
        self.board
            .pieces()
            .filter(|(_, piece)| piece.color == color)
            .any(|(pos, _)| self.has_any_legal_move(pos))
    }

    /// Returns the total material point value of `color`'s pieces.
    pub fn material_value(&self, color: Color) -> i32 {
        self.board
            .pieces()
            .filter(|(_, piece)| piece.color == color)
            .map(|(_, piece)| piece.point_value())
            .sum()
    }

    /// Renders the game in the save format: the 8-line board grid followed
    /// by the turn character.
    pub fn to_text(&self) -> String {
        format!("{}{}", self.board, self.side_to_move.to_turn_char())
    }

    /// Reconstructs a game from save text.
    ///
    /// Shape errors come from the parse layer; unknown designators and
    /// other placement problems surface as board errors.
    pub fn from_text(input: &str) -> Result<Self, LoadError> {
        let data = SaveData::parse(input)?;
        let mut board = Board::new();
        for (pos, designator) in data.placements() {
            board.place(pos, designator)?;
        }
        Ok(Game {
            board,
            side_to_move: data.turn(),
        })
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

/// Returns true if `from` -> `to` lies on a rank, file, or diagonal.
fn is_linear(from: Pos, to: Pos) -> bool {
    let file_delta = to.file() - from.file();
    let rank_delta = to.rank() - from.rank();
    file_delta == 0 || rank_delta == 0 || file_delta.abs() == rank_delta.abs()
}
