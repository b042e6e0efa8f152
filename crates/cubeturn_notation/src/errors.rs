use thiserror::Error;

/// Error produced when parsing move notation.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// Move does not start with a face letter
    #[error("unknown face {symbol:?} at offset {offset}")]
    UnknownFace {
        /// Character where a face letter was expected.
        symbol: char,
        /// Byte offset of the move in the input string.
        offset: usize,
    },
    /// Text after the face letter is not a multiplier
    #[error("invalid multiplier {text:?} at offset {offset}")]
    BadMultiplier {
        /// Text after the face letter.
        text: String,
        /// Byte offset of the move in the input string.
        offset: usize,
    },
}

/// Error produced when inverting a move sequence.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum InvertError {
    /// Integer overflow
    ///
    /// This occurs when negating the minimum integer value.
    #[error("integer overflow")]
    IntegerOverflow,
}
