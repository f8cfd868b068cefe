//! Chess piece representation and per-kind move geometry.

use crate::{Color, Pos};

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns the material point value of this kind.
    ///
    /// The king is unvalued: material totals count capturable force.
    #[inline]
    pub const fn point_value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A piece on the board: a kind together with its color.
///
/// Pieces are plain values; identity is irrelevant, only kind, color, and
/// current square matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    /// Creates a piece of the given kind and color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    /// Returns the display designator: `PNBRQK` for white, `pnbrqk` for black.
    pub const fn designator(self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parses a designator character into a piece.
    pub const fn from_designator(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Piece { kind, color })
    }

    /// Returns true if this piece is white.
    #[inline]
    pub const fn is_white(self) -> bool {
        matches!(self.color, Color::White)
    }

    /// Returns the material point value of this piece.
    #[inline]
    pub const fn point_value(self) -> i32 {
        self.kind.point_value()
    }

    /// Pure geometric test: can this piece move `from` -> `to` on an
    /// otherwise empty board?
    ///
    /// Ignores obstructions, occupancy, and whose turn it is. The king rule
    /// deliberately admits the zero-displacement "move"; callers that want
    /// to forbid `from == to` must do so themselves.
    pub fn movement_shape_ok(self, from: Pos, to: Pos) -> bool {
        let file_delta = to.file() - from.file();
        let rank_delta = to.rank() - from.rank();
        match self.kind {
            PieceKind::Rook => file_delta == 0 || rank_delta == 0,
            PieceKind::Bishop => file_delta.abs() == rank_delta.abs(),
            PieceKind::Queen => {
                file_delta == 0 || rank_delta == 0 || file_delta.abs() == rank_delta.abs()
            }
            PieceKind::King => file_delta.abs() < 2 && rank_delta.abs() < 2,
            // Only {1,2} and {2,1} deltas multiply to 2, which captures the
            // L-shape in one test.
            PieceKind::Knight => (file_delta * rank_delta).abs() == 2,
            PieceKind::Pawn => {
                if file_delta != 0 {
                    return false;
                }
                let forward = rank_delta * self.color.pawn_direction();
                let range = if from.rank() == self.color.home_rank() {
                    2
                } else {
                    1
                };
                (0..=range).contains(&forward)
            }
        }
    }

    /// Pure geometric test for a capturing move.
    ///
    /// Identical to [`movement_shape_ok`](Self::movement_shape_ok) for every
    /// kind except the pawn, which captures exactly one square diagonally
    /// forward.
    pub fn capture_shape_ok(self, from: Pos, to: Pos) -> bool {
        match self.kind {
            PieceKind::Pawn => {
                let file_delta = to.file() - from.file();
                let rank_delta = to.rank() - from.rank();
                file_delta.abs() == 1 && rank_delta == self.color.pawn_direction()
            }
            _ => self.movement_shape_ok(from, to),
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.designator())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Pos {
        Pos::from_algebraic(s).unwrap()
    }

    fn white(kind: PieceKind) -> Piece {
        Piece::new(kind, Color::White)
    }

    #[test]
    fn designator_roundtrip() {
        for kind in PieceKind::ALL {
            for color in [Color::White, Color::Black] {
                let piece = Piece::new(kind, color);
                assert_eq!(Piece::from_designator(piece.designator()), Some(piece));
            }
        }
        assert_eq!(Piece::from_designator('x'), None);
        assert_eq!(Piece::from_designator('-'), None);
    }

    #[test]
    fn designator_case() {
        assert_eq!(Piece::new(PieceKind::Pawn, Color::White).designator(), 'P');
        assert_eq!(Piece::new(PieceKind::Pawn, Color::Black).designator(), 'p');
        assert_eq!(Piece::new(PieceKind::King, Color::White).designator(), 'K');
        assert_eq!(Piece::new(PieceKind::Queen, Color::Black).designator(), 'q');
    }

    #[test]
    fn point_values() {
        assert_eq!(PieceKind::Pawn.point_value(), 1);
        assert_eq!(PieceKind::Knight.point_value(), 3);
        assert_eq!(PieceKind::Bishop.point_value(), 3);
        assert_eq!(PieceKind::Rook.point_value(), 5);
        assert_eq!(PieceKind::Queen.point_value(), 9);
        assert_eq!(PieceKind::King.point_value(), 0);
    }

    #[test]
    fn rook_shape() {
        let rook = white(PieceKind::Rook);
        let d4 = pos("d4");
        for target in ["d8", "d1", "a4", "h4"] {
            assert!(rook.movement_shape_ok(d4, pos(target)), "d4 -> {}", target);
        }
        assert!(!rook.movement_shape_ok(d4, pos("e5")));
    }

    #[test]
    fn bishop_shape() {
        let bishop = white(PieceKind::Bishop);
        let d4 = pos("d4");
        assert!(bishop.movement_shape_ok(d4, pos("a1")));
        assert!(bishop.movement_shape_ok(d4, pos("g7")));
        assert!(!bishop.movement_shape_ok(d4, pos("d5")));
    }

    #[test]
    fn knight_shape() {
        let knight = white(PieceKind::Knight);
        let d4 = pos("d4");
        let reachable = ["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"];
        for target in reachable {
            assert!(
                knight.movement_shape_ok(d4, pos(target)),
                "d4 -> {}",
                target
            );
        }
        // Every other square is unreachable.
        let count = Pos::all()
            .filter(|&sq| knight.movement_shape_ok(d4, sq))
            .count();
        assert_eq!(count, 8);
    }

    #[test]
    fn king_shape() {
        let king = white(PieceKind::King);
        let d4 = pos("d4");
        for target in ["c3", "c4", "c5", "d3", "d5", "e3", "e4", "e5"] {
            assert!(king.movement_shape_ok(d4, pos(target)), "d4 -> {}", target);
        }
        assert!(!king.movement_shape_ok(d4, pos("c2")));
        // The null move is within shape; rejecting it is the caller's call.
        assert!(king.movement_shape_ok(d4, d4));
    }

    #[test]
    fn queen_shape() {
        let queen = white(PieceKind::Queen);
        let d4 = pos("d4");
        assert!(queen.movement_shape_ok(d4, pos("d8")));
        assert!(queen.movement_shape_ok(d4, pos("h4")));
        assert!(queen.movement_shape_ok(d4, pos("g7")));
        assert!(!queen.movement_shape_ok(d4, pos("e6")));
    }

    #[test]
    fn pawn_advance() {
        let pawn = white(PieceKind::Pawn);
        let b2 = pos("b2");
        assert!(pawn.movement_shape_ok(b2, pos("b3")));
        assert!(pawn.movement_shape_ok(b2, pos("b4")));
        assert!(!pawn.movement_shape_ok(b2, pos("b5")));
        assert!(!pawn.movement_shape_ok(b2, pos("b1")));
        assert!(!pawn.movement_shape_ok(b2, pos("a3")));
        // Double step only from the home rank.
        assert!(!pawn.movement_shape_ok(pos("b3"), pos("b5")));
    }

    #[test]
    fn pawn_advance_black() {
        let pawn = Piece::new(PieceKind::Pawn, Color::Black);
        let g7 = pos("g7");
        assert!(pawn.movement_shape_ok(g7, pos("g6")));
        assert!(pawn.movement_shape_ok(g7, pos("g5")));
        assert!(!pawn.movement_shape_ok(g7, pos("g4")));
        assert!(!pawn.movement_shape_ok(g7, pos("g8")));
    }

    #[test]
    fn pawn_capture() {
        let pawn = white(PieceKind::Pawn);
        let b2 = pos("b2");
        assert!(pawn.capture_shape_ok(b2, pos("a3")));
        assert!(pawn.capture_shape_ok(b2, pos("c3")));
        assert!(!pawn.capture_shape_ok(b2, pos("b3")));
        assert!(!pawn.capture_shape_ok(b2, pos("a1")));

        let black_pawn = Piece::new(PieceKind::Pawn, Color::Black);
        assert!(black_pawn.capture_shape_ok(pos("g7"), pos("f6")));
        assert!(!black_pawn.capture_shape_ok(pos("g7"), pos("f8")));
    }

    #[test]
    fn capture_shape_matches_movement_for_non_pawns() {
        let d4 = pos("d4");
        for kind in [
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
            PieceKind::King,
        ] {
            let piece = white(kind);
            for sq in Pos::all() {
                assert_eq!(
                    piece.movement_shape_ok(d4, sq),
                    piece.capture_shape_ok(d4, sq),
                    "{:?} d4 -> {}",
                    kind,
                    sq
                );
            }
        }
    }
}
