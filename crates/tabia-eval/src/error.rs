//! Error types for piece evaluation.

/// Errors from evaluating a piece on a square.
///
/// Both variants signal a contract violation by the caller; neither is
/// recoverable locally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// The piece tag matches none of the six known piece kinds.
    #[error("unrecognized piece tag: '{tag}'")]
    UnrecognizedPiece {
        /// The unrecognized tag character.
        tag: char,
    },
    /// A coordinate falls outside the 8x8 board.
    #[error("coordinate ({x}, {y}) is outside the 8x8 board")]
    CoordinateOutOfRange {
        /// The x (column) coordinate as given.
        x: u8,
        /// The y (row) coordinate as given.
        y: u8,
    },
}
