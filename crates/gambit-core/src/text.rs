//! Save-file text format parsing.
//!
//! The save format is eight 8-character lines, one per rank from rank 8
//! down to rank 1, each character either a piece designator or `-` for an
//! empty square, followed by a final line holding the turn character
//! (`w` or `b`).
//!
//! This module validates the raw shape only. Designator characters are not
//! checked here: the board rejects unknown ones at placement time, so the
//! engine surfaces those as placement errors when it loads a game.

use crate::{Color, Pos};
use thiserror::Error;

/// Width and height of the board grid in the save format.
pub const BOARD_SIZE: usize = 8;

/// Errors that can occur when parsing save text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextError {
    #[error("expected 9 lines, got {0}")]
    WrongLineCount(usize),

    #[error("rank {rank} has {got} columns, expected 8")]
    WrongLineWidth { rank: u8, got: usize },

    #[error("invalid turn character: expected 'w' or 'b', got {0:?}")]
    InvalidTurnChar(String),
}

/// Parsed save data: the raw designator grid plus the side to move.
///
/// The engine is responsible for turning this into board state; placement
/// errors (unknown designators and the like) are reported there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveData {
    /// Cell contents indexed `[rank][file]`, `None` for `-`.
    cells: [[Option<char>; BOARD_SIZE]; BOARD_SIZE],
    /// Side to move.
    turn: Color,
}

impl SaveData {
    /// Parses save text into a grid and turn color.
    pub fn parse(input: &str) -> Result<Self, TextError> {
        let lines: Vec<&str> = input.lines().collect();
        if lines.len() != BOARD_SIZE + 1 {
            return Err(TextError::WrongLineCount(lines.len()));
        }

        let mut cells = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (i, line) in lines[..BOARD_SIZE].iter().enumerate() {
            // The first line holds rank 8, the last rank 1.
            let rank = BOARD_SIZE - 1 - i;
            let row: Vec<char> = line.chars().collect();
            if row.len() != BOARD_SIZE {
                return Err(TextError::WrongLineWidth {
                    rank: rank as u8 + 1,
                    got: row.len(),
                });
            }
            for (file, &c) in row.iter().enumerate() {
                if c != '-' {
                    cells[rank][file] = Some(c);
                }
            }
        }

        let turn_line = lines[BOARD_SIZE];
        let mut chars = turn_line.chars();
        let turn = match (chars.next().and_then(Color::from_turn_char), chars.next()) {
            (Some(color), None) => color,
            _ => return Err(TextError::InvalidTurnChar(turn_line.to_string())),
        };

        Ok(SaveData { cells, turn })
    }

    /// Returns the designator at `pos`, or `None` for an empty cell or an
    /// off-board position.
    pub fn cell(&self, pos: Pos) -> Option<char> {
        if !pos.on_board() {
            return None;
        }
        self.cells[pos.rank() as usize][pos.file() as usize]
    }

    /// Iterates the occupied cells in board order (a1, b1, ..., h8).
    pub fn placements(&self) -> impl Iterator<Item = (Pos, char)> + '_ {
        Pos::all().filter_map(|pos| self.cell(pos).map(|c| (pos, c)))
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }
}
