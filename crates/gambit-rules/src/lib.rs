//! Board state and move legality rules for standard chess.
//!
//! This crate provides:
//! - [`Board`] - dense 8x8 piece storage with placement validation and
//!   ordered square iteration
//! - [`Game`] - a board plus a turn flag, with the full move-legality
//!   pipeline, check/checkmate/stalemate evaluation, pawn promotion, and
//!   save/load of the text format
//!
//! # Example
//!
//! ```
//! use gambit_core::{Color, Pos};
//! use gambit_rules::Game;
//!
//! let mut game = Game::new();
//! let e2 = Pos::from_algebraic("e2").unwrap();
//! let e4 = Pos::from_algebraic("e4").unwrap();
//! game.make_move(e2, e4).unwrap();
//! assert_eq!(game.side_to_move(), Color::Black);
//! ```

mod board;
mod game;

pub use board::{Board, BoardError};
pub use game::{Game, LoadError, MoveError};
