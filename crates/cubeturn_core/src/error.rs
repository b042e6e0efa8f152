use thiserror::Error;

use crate::{Color, Cubie, Position};

/// Error produced when parsing a face symbol.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("unknown face {0:?}; expected one of U, D, F, B, L, R")]
pub struct ParseFaceError(pub String);

/// Error produced when parsing a turn direction.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("unknown direction {0:?}; expected clockwise or counterclockwise")]
pub struct ParseDirectionError(pub String);

/// Broken invariant of the cubie set.
///
/// Turns never produce these; they indicate a state that was constructed or
/// deserialized incorrectly.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum InvariantError {
    /// Coordinate outside `{-1, 0, 1}`
    #[error("cubie {cubie} has out-of-range position {position}")]
    PositionOutOfRange {
        /// Offending cubie.
        cubie: Cubie,
        /// Its position.
        position: Position,
    },
    /// Two cubies at the same position
    #[error("cubies {a} and {b} are both at {position}")]
    DuplicatePosition {
        /// First cubie at the position.
        a: Cubie,
        /// Second cubie at the position.
        b: Cubie,
        /// Shared position.
        position: Position,
    },
    /// Color multiset differs from the solved state
    #[error("expected {expected} {color} stickers, found {actual}")]
    ColorCount {
        /// Color whose count is wrong.
        color: Color,
        /// Count in the solved state.
        expected: usize,
        /// Count in the checked state.
        actual: usize,
    },
}
