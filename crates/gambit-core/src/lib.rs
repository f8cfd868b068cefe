//! Core types for the gambit chess rule engine.
//!
//! This crate provides the fundamental types used across the engine:
//! - [`Color`] for the two sides
//! - [`Pos`] for board coordinates
//! - [`Piece`] and [`PieceKind`] for piece representation, including the
//!   per-kind movement and capture shape predicates
//! - Parsing and rendering of the plain-text save format

mod color;
mod piece;
mod pos;
mod text;

pub use color::Color;
pub use piece::{Piece, PieceKind};
pub use pos::Pos;
pub use text::{SaveData, TextError, BOARD_SIZE};
