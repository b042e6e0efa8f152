use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::color::ColorSlot;
use crate::error::{ParseDirectionError, ParseFaceError};

/// Coordinate axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Left (-1) to right (+1).
    X,
    /// Up (-1) to down (+1).
    Y,
    /// Front (-1) to back (+1).
    Z,
}

impl Axis {
    /// Returns the index of the axis in a position tuple.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Returns the 4-cycle of color slots perpendicular to the axis, in the
    /// order that a clockwise turn moves colors through them.
    ///
    /// The two slots along the axis are not included; turns around the axis
    /// never move them.
    pub fn color_cycle(self) -> [ColorSlot; 4] {
        use ColorSlot::*;

        match self {
            Axis::X => [Up, Front, Down, Back],
            Axis::Y => [Right, Front, Left, Back],
            Axis::Z => [Up, Right, Down, Left],
        }
    }
}

/// Face of the puzzle, each of which can be turned.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Face {
    /// Up face (`y = -1`).
    U,
    /// Down face (`y = 1`).
    D,
    /// Front face (`z = -1`).
    F,
    /// Back face (`z = 1`).
    B,
    /// Left face (`x = -1`).
    L,
    /// Right face (`x = 1`).
    R,
}

impl Face {
    /// All faces in the order `U D F B L R`.
    pub const ALL: [Self; 6] = [Self::U, Self::D, Self::F, Self::B, Self::L, Self::R];

    /// Returns the axis perpendicular to the face.
    pub fn axis(self) -> Axis {
        match self {
            Face::U | Face::D => Axis::Y,
            Face::F | Face::B => Axis::Z,
            Face::L | Face::R => Axis::X,
        }
    }

    /// Returns the coordinate along [`Face::axis()`] shared by every cubie in
    /// the face's layer.
    pub fn layer(self) -> i8 {
        match self {
            Face::U | Face::F | Face::L => -1,
            Face::D | Face::B | Face::R => 1,
        }
    }

    /// Returns the face on the other end of the same axis.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Face::U => Face::D,
            Face::D => Face::U,
            Face::F => Face::B,
            Face::B => Face::F,
            Face::L => Face::R,
            Face::R => Face::L,
        }
    }

    /// Returns the color slot that is visible on this face of the puzzle.
    pub fn color_slot(self) -> ColorSlot {
        match self {
            Face::U => ColorSlot::Up,
            Face::D => ColorSlot::Down,
            Face::F => ColorSlot::Front,
            Face::B => ColorSlot::Back,
            Face::L => ColorSlot::Left,
            Face::R => ColorSlot::Right,
        }
    }

    /// Returns the letter used for the face in move notation.
    pub fn symbol(self) -> char {
        match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::F => 'F',
            Face::B => 'B',
            Face::L => 'L',
            Face::R => 'R',
        }
    }

    /// Returns the face with the given notation letter, or `None` if there is
    /// none.
    pub fn from_symbol(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|face| face.symbol() == c)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Face {
    type Err = ParseFaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_symbol(c).ok_or_else(|| ParseFaceError(s.to_owned())),
            _ => Err(ParseFaceError(s.to_owned())),
        }
    }
}

/// Direction of a quarter turn, as seen from the turned face.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Clockwise quarter turn.
    #[default]
    Clockwise,
    /// Counterclockwise quarter turn.
    CounterClockwise,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("clockwise") || s.eq_ignore_ascii_case("cw") {
            Ok(Direction::Clockwise)
        } else if s.eq_ignore_ascii_case("counterclockwise") || s.eq_ignore_ascii_case("ccw") {
            Ok(Direction::CounterClockwise)
        } else {
            Err(ParseDirectionError(s.to_owned()))
        }
    }
}

/// Quarter turn of one face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Turn {
    /// Face whose layer is turned.
    pub face: Face,
    /// Direction to turn it.
    pub direction: Direction,
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face)?;
        if self.direction == Direction::CounterClockwise {
            write!(f, "'")?;
        }
        Ok(())
    }
}

impl Turn {
    /// Constructs a turn.
    pub fn new(face: Face, direction: Direction) -> Self {
        Self { face, direction }
    }

    /// Returns the turn that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            face: self.face,
            direction: self.direction.rev(),
        }
    }
}
