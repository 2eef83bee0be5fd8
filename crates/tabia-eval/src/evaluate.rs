//! Static value of a single piece on a square.
//!
//! The value is the piece kind's base material value plus the
//! piece-square bonus for the square it stands on. Pure lookups over
//! `const` data; safe for any number of concurrent callers.

use tabia_core::{Color, PieceKind};

use crate::error::EvalError;
use crate::tables::square_bonus;

/// Base material values indexed by [`PieceKind::index()`].
///
/// | Piece  | Value |
/// |--------|-------|
/// | Pawn   |    10 |
/// | Knight |    30 |
/// | Bishop |    30 |
/// | Rook   |    50 |
/// | Queen  |    90 |
/// | King   |   900 |
pub const BASE_VALUE: [i32; PieceKind::COUNT] = [
    10,  // Pawn
    30,  // Knight
    30,  // Bishop
    50,  // Rook
    90,  // Queen
    900, // King
];

/// Evaluate a piece of the given kind and color at `(x, y)`.
///
/// Returns `BASE_VALUE[kind] + square_bonus(kind, color, x, y)`.
///
/// # Errors
///
/// [`EvalError::CoordinateOutOfRange`] if `x` or `y` falls outside `0..=7`.
#[inline]
pub fn evaluate(kind: PieceKind, color: Color, x: u8, y: u8) -> Result<i32, EvalError> {
    if x > 7 || y > 7 {
        return Err(EvalError::CoordinateOutOfRange { x, y });
    }
    Ok(BASE_VALUE[kind.index()] + square_bonus(kind, color, x, y))
}

/// Evaluate a piece identified by its raw tag character at `(x, y)`.
///
/// Boundary entry for callers holding an untyped piece descriptor. The tag
/// is matched case-insensitively against the six known piece tags
/// (`p n b r q k`), then the lookup proceeds as in [`evaluate`].
///
/// # Errors
///
/// [`EvalError::UnrecognizedPiece`] if `tag` names no known piece kind;
/// [`EvalError::CoordinateOutOfRange`] as in [`evaluate`].
pub fn evaluate_tag(tag: char, color: Color, x: u8, y: u8) -> Result<i32, EvalError> {
    let kind = PieceKind::from_tag(tag).ok_or(EvalError::UnrecognizedPiece { tag })?;
    evaluate(kind, color, x, y)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
