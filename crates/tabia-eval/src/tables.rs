//! Piece-square tables for all six piece types.
//!
//! Each table is an 8x8 grid indexed `[y][x]`: `y` selects the row, `x` the
//! column. Row 0 is Black's back rank (the top of the board as the tables
//! are written), row 7 is White's back rank.
//!
//! The pawn, bishop, rook, and king tables are written from White's
//! perspective; Black's variant is the vertical mirror (row `y` becomes row
//! `7 - y`). The knight and queen tables are shared by both colors and are
//! never mirrored. Use [`square_bonus`] rather than indexing the tables
//! directly, so the color rule is applied consistently.

use tabia_core::{Color, PieceKind};

// ---------------------------------------------------------------------------
// Individual piece-square tables
// ---------------------------------------------------------------------------

/// Pawn table. Rows 0 and 7 are zero, pawns never sit on a back rank.
#[rustfmt::skip]
const PAWN_TABLE: [[i32; 8]; 8] = [
    // y = 0 (rank 8) — never used
    [  0,   0,   0,   0,   0,   0,   0,   0],
    // y = 1 (rank 7) — one step from promotion
    [ 50,  50,  50,  50,  50,  50,  50,  50],
    // y = 2 (rank 6)
    [ 10,  10,  20,  30,  30,  20,  10,  10],
    // y = 3 (rank 5)
    [  5,   5,  10,  25,  25,  10,   5,   5],
    // y = 4 (rank 4)
    [  0,   0,   0,  20,  20,   0,   0,   0],
    // y = 5 (rank 3)
    [  5,  -5, -10,   0,   0, -10,  -5,   5],
    // y = 6 (rank 2)
    [  5,  10,  10, -20, -20,  10,  10,   5],
    // y = 7 (rank 1) — never used
    [  0,   0,   0,   0,   0,   0,   0,   0],
];

/// Knight table. Rank-symmetric and shared by both colors.
#[rustfmt::skip]
const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   0,   0,   0,   0, -20, -40],
    [-30,   0,  10,  15,  15,  10,   0, -30],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-30,   0,  15,  20,  20,  15,   0, -30],
    [-30,   5,  10,  15,  15,  10,   5, -30],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

#[rustfmt::skip]
const BISHOP_TABLE: [[i32; 8]; 8] = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,   5,  10,  10,   5,   0, -10],
    [-10,   5,   5,  10,  10,   5,   5, -10],
    [-10,   0,  10,  10,  10,  10,   0, -10],
    [-10,  10,  10,  10,  10,  10,  10, -10],
    [-10,   5,   0,   0,   0,   0,   5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

#[rustfmt::skip]
const ROOK_TABLE: [[i32; 8]; 8] = [
    [  0,   0,   0,   0,   0,   0,   0,   0],
    // y = 1 (rank 7) — rook on the seventh
    [  5,  10,  10,  10,  10,  10,  10,   5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [  0,   0,   0,   5,   5,   0,   0,   0],
];

/// Queen table. Shared by both colors and, unlike the knight table, not
/// rank-symmetric, so the two colors genuinely see the same grid.
#[rustfmt::skip]
const QUEEN_TABLE: [[i32; 8]; 8] = [
    [-20, -10, -10,  -5,  -5, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,   5,   5,   5,   5,   0, -10],
    [ -5,   0,   5,   5,   5,   5,   0,  -5],
    [  0,   0,   5,   5,   5,   5,   0,  -5],
    [-10,   5,   5,   5,   5,   5,   0, -10],
    [-10,   0,   5,   0,   0,   0,   0, -10],
    [-20, -10, -10,  -5,  -5, -10, -10, -20],
];

/// King table. Rewards the castled corners on White's own two ranks and
/// penalizes walks toward the middle of the board.
#[rustfmt::skip]
const KING_TABLE: [[i32; 8]; 8] = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    // y = 6 (rank 2)
    [ 20,  20,   0,   0,   0,   0,  20,  20],
    // y = 7 (rank 1) — castled corners
    [ 20,  30,  10,   0,   0,  10,  30,  20],
];

// ---------------------------------------------------------------------------
// Master table
// ---------------------------------------------------------------------------

/// Piece-square tables indexed `[piece_kind][y][x]`.
///
/// Use [`square_bonus`] rather than indexing this directly, so that color
/// mirroring is handled correctly.
pub static TABLES: [[[i32; 8]; 8]; PieceKind::COUNT] = [
    PAWN_TABLE,
    KNIGHT_TABLE,
    BISHOP_TABLE,
    ROOK_TABLE,
    QUEEN_TABLE,
    KING_TABLE,
];

// ---------------------------------------------------------------------------
// Lookup helper
// ---------------------------------------------------------------------------

/// Look up the square bonus for a piece of the given kind and color at `(x, y)`.
///
/// For Black pawns, bishops, rooks, and kings the row is mirrored
/// (`7 - y`) so that the tables, which are written from White's
/// perspective, apply symmetrically. Knights and queens consult the same
/// grid for both colors.
///
/// Coordinates must already be in range; callers needing a checked lookup
/// go through [`evaluate`](crate::evaluate::evaluate).
#[inline]
pub fn square_bonus(kind: PieceKind, color: Color, x: u8, y: u8) -> i32 {
    debug_assert!(x < 8 && y < 8);
    let row = match (kind, color) {
        (PieceKind::Knight | PieceKind::Queen, _) => y,
        (_, Color::White) => y,
        (_, Color::Black) => 7 - y,
    };
    TABLES[kind.index()][row as usize][x as usize]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
