//! Parse errors for piece and color tags.

/// The string is not a single recognized piece tag character.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid piece tag: \"{found}\"")]
pub struct ParsePieceError {
    /// The invalid input.
    pub found: String,
}

/// The string is not "w" or "b".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color: \"{found}\"")]
pub struct ParseColorError {
    /// The invalid input.
    pub found: String,
}

#[cfg(test)]
mod tests {
    use super::{ParseColorError, ParsePieceError};

    #[test]
    fn piece_error_display() {
        let err = ParsePieceError {
            found: "xx".to_string(),
        };
        assert_eq!(format!("{err}"), "invalid piece tag: \"xx\"");
    }

    #[test]
    fn color_error_display() {
        let err = ParseColorError {
            found: "white".to_string(),
        };
        assert_eq!(format!("{err}"), "invalid color: \"white\"");
    }
}
