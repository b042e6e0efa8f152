//! State model and face turn engine for a 3x3x3 twisty puzzle.
//!
//! The puzzle is a set of 27 [`Cubie`]s, each with a [`Position`] and six
//! [`Color`]s. A [`Turn`] rotates one face layer by a quarter turn, updating
//! the position and color order of every cubie in that layer.
//!
//! ```
//! use cubeturn_core::prelude::*;
//!
//! let mut cube = CubeState::new();
//! cube.apply_turn(Turn::new(Face::R, Direction::Clockwise));
//! assert!(!cube.is_solved());
//! cube.apply_turn(Turn::new(Face::R, Direction::CounterClockwise));
//! assert!(cube.is_solved());
//! ```

mod color;
mod cubie;
mod error;
mod face;
mod state;

pub use prelude::*;

/// Prelude of common imports.
pub mod prelude {
    pub use crate::color::{Color, ColorSlot};
    pub use crate::cubie::{Cubie, CubieInfo, PerCubie, Position};
    pub use crate::error::{InvariantError, ParseDirectionError, ParseFaceError};
    pub use crate::face::{Axis, Direction, Face, Turn};
    pub use crate::state::CubeState;
}

/// Number of cubies in the puzzle.
pub const CUBIE_COUNT: usize = 27;

/// Number of colors stored on each cubie.
pub const COLORS_PER_CUBIE: usize = 6;

/// Coordinate values along each axis, from lowest to highest.
pub const COORDS: [i8; 3] = [-1, 0, 1];

#[cfg(test)]
mod tests;
