//! Interactive board rendering.
//!
//! This display is for play only and is deliberately different from the
//! save-format grid: empty squares print as `x`, and pieces are colored by
//! side (white red, black blue) with rank and file legends around the
//! board.

use gambit_core::Pos;
use gambit_rules::Game;
use std::io::{self, Write};
use yansi::Paint;

/// Writes the colored board to `out`, rank 8 at the top.
pub fn draw(game: &Game, out: &mut impl Write) -> io::Result<()> {
    write!(out, "  ")?;
    for file in b'A'..=b'H' {
        write!(out, "{} ", file as char)?;
    }
    writeln!(out)?;

    for rank in (0i8..8).rev() {
        write!(out, "{} ", rank + 1)?;
        for file in 0i8..8 {
            match game.board().piece_at(Pos::new(file, rank)) {
                Some(piece) if piece.is_white() => {
                    write!(out, "{} ", piece.designator().red())?;
                }
                Some(piece) => {
                    write!(out, "{} ", piece.designator().blue())?;
                }
                None => {
                    write!(out, "x ")?;
                }
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
