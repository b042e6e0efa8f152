use std::fmt;
use std::ops::{Index, IndexMut};

use itertools::{Itertools, iproduct};
use serde::{Deserialize, Serialize};

use crate::{Axis, COLORS_PER_CUBIE, COORDS, CUBIE_COUNT, Color, ColorSlot, Direction, Face, Turn};

/// Location of a cubie in the grid. Each coordinate is `-1`, `0`, or `1`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Left (-1) to right (+1).
    pub x: i8,
    /// Up (-1) to down (+1).
    pub y: i8,
    /// Front (-1) to back (+1).
    pub z: i8,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { x, y, z } = self;
        write!(f, "({x}, {y}, {z})")
    }
}

impl From<[i8; 3]> for Position {
    fn from([x, y, z]: [i8; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Position> for [i8; 3] {
    fn from(Position { x, y, z }: Position) -> Self {
        [x, y, z]
    }
}

impl Position {
    /// Constructs a position.
    pub const fn new(x: i8, y: i8, z: i8) -> Self {
        Self { x, y, z }
    }

    /// Returns an iterator over all 27 positions with `x` varying slowest and
    /// `z` varying fastest.
    pub fn iter_all() -> impl Iterator<Item = Self> {
        iproduct!(COORDS, COORDS, COORDS).map(|(x, y, z)| Self { x, y, z })
    }

    /// Returns the coordinate along `axis`.
    pub fn coord(self, axis: Axis) -> i8 {
        [self.x, self.y, self.z][axis.index()]
    }

    /// Returns whether every coordinate is in range.
    pub fn is_valid(self) -> bool {
        [self.x, self.y, self.z].iter().all(|c| COORDS.contains(c))
    }

    /// Returns the position after a quarter turn around `axis`. The coordinate
    /// along `axis` is unchanged.
    #[must_use]
    pub fn turned(self, axis: Axis, direction: Direction) -> Self {
        let Self { x, y, z } = self;
        match (axis, direction) {
            (Axis::X, Direction::Clockwise) => Self { x, y: z, z: -y },
            (Axis::X, Direction::CounterClockwise) => Self { x, y: -z, z: y },
            (Axis::Y, Direction::Clockwise) => Self { x: -z, y, z: x },
            (Axis::Y, Direction::CounterClockwise) => Self { x: z, y, z: -x },
            (Axis::Z, Direction::Clockwise) => Self { x: y, y: -x, z },
            (Axis::Z, Direction::CounterClockwise) => Self { x: -y, y: x, z },
        }
    }
}

/// Stable ID of a cubie, derived from the position it starts at.
///
/// IDs are assigned in the same order as [`Position::iter_all()`].
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cubie(u8);

impl fmt::Display for Cubie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl Cubie {
    /// Returns the cubie with index `i`, or `None` if it is out of range.
    pub fn try_from_index(i: usize) -> Option<Self> {
        (i < CUBIE_COUNT).then(|| Self(i as u8))
    }

    /// Returns the index of the cubie.
    pub fn to_index(self) -> usize {
        self.0 as usize
    }

    /// Returns an iterator over all cubies.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..CUBIE_COUNT as u8).map(Self)
    }

    /// Returns the position of the cubie in the solved state.
    pub fn home(self) -> Position {
        let i = self.0 as i8;
        Position {
            x: i / 9 - 1,
            y: i / 3 % 3 - 1,
            z: i % 3 - 1,
        }
    }

    /// Returns the cubie whose solved position is `position`, or `None` if the
    /// position is out of range.
    pub fn from_home(position: Position) -> Option<Self> {
        if !position.is_valid() {
            return None;
        }
        let Position { x, y, z } = position;
        Some(Self(((x + 1) * 9 + (y + 1) * 3 + (z + 1)) as u8))
    }
}

/// Value for each cubie, stored in a fixed array indexed by [`Cubie`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerCubie<T>([T; CUBIE_COUNT]);

impl<T> Index<Cubie> for PerCubie<T> {
    type Output = T;

    fn index(&self, cubie: Cubie) -> &Self::Output {
        &self.0[cubie.to_index()]
    }
}

impl<T> IndexMut<Cubie> for PerCubie<T> {
    fn index_mut(&mut self, cubie: Cubie) -> &mut Self::Output {
        &mut self.0[cubie.to_index()]
    }
}

impl<T> PerCubie<T> {
    /// Constructs a list by calling `f` for each cubie.
    pub fn from_fn(mut f: impl FnMut(Cubie) -> T) -> Self {
        Self(std::array::from_fn(|i| f(Cubie(i as u8))))
    }

    /// Constructs a new list by calling `f` on each element by reference.
    pub fn map_ref<U>(&self, mut f: impl FnMut(Cubie, &T) -> U) -> PerCubie<U> {
        PerCubie::from_fn(|cubie| f(cubie, &self[cubie]))
    }

    /// Returns an iterator over cubies and their values.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Cubie, &T)> + ExactSizeIterator {
        Cubie::iter().zip(&self.0)
    }

    /// Returns an iterator over values, in cubie order.
    pub fn iter_values(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Returns an iterator over cubies whose value matches `pred`.
    pub fn iter_filter<'a>(
        &'a self,
        mut pred: impl 'a + FnMut(Cubie, &T) -> bool,
    ) -> impl 'a + Iterator<Item = Cubie> {
        self.iter()
            .filter(move |(cubie, value)| pred(*cubie, *value))
            .map(|(cubie, _)| cubie)
    }
}

/// Current state of one cubie.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CubieInfo {
    /// Where the cubie is.
    pub position: Position,
    /// Color in each slot, indexed by [`ColorSlot`].
    pub colors: [Color; COLORS_PER_CUBIE],
}

impl CubieInfo {
    /// Returns the cubie that starts at `position` in the solved state.
    ///
    /// Each slot shows the color of the puzzle face it points toward. Slots
    /// that point inward get the color of the opposite face.
    pub fn solved(position: Position) -> Self {
        let Position { x, y, z } = position;
        let pick = |cond: bool, a: Color, b: Color| if cond { a } else { b };
        Self {
            position,
            colors: [
                pick(y == -1, Color::White, Color::Yellow),
                pick(x == 1, Color::Red, Color::Orange),
                pick(z == -1, Color::Blue, Color::Green),
                pick(x == -1, Color::Orange, Color::Red),
                pick(z == 1, Color::Green, Color::Blue),
                pick(y == 1, Color::Yellow, Color::White),
            ],
        }
    }

    /// Returns the color in `slot`.
    pub fn color(&self, slot: ColorSlot) -> Color {
        self.colors[slot.index()]
    }

    /// Returns whether the cubie is in the layer that `face` turns.
    pub fn is_in_layer(&self, face: Face) -> bool {
        self.position.coord(face.axis()) == face.layer()
    }

    /// Returns the cubie after `turn`, regardless of whether it is in the
    /// turned layer.
    #[must_use]
    pub fn turned(&self, turn: Turn) -> Self {
        let axis = turn.face.axis();
        let cycle = axis.color_cycle();

        let mut colors = self.colors;
        for (a, b) in cycle.into_iter().circular_tuple_windows() {
            let (from, to) = match turn.direction {
                Direction::Clockwise => (a, b),
                Direction::CounterClockwise => (b, a),
            };
            colors[to.index()] = self.colors[from.index()];
        }

        Self {
            position: self.position.turned(axis, turn.direction),
            colors,
        }
    }
}
