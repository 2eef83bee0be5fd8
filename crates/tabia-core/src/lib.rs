//! Core piece-evaluation types: piece kinds, colors, and their parse errors.

mod color;
mod error;
mod piece_kind;

pub use color::Color;
pub use error::{ParseColorError, ParsePieceError};
pub use piece_kind::PieceKind;
