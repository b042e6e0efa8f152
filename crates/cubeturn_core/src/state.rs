use std::collections::BTreeMap;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};

use crate::{
    COLORS_PER_CUBIE, CUBIE_COUNT, Color, Cubie, CubieInfo, Direction, Face, InvariantError, PerCubie,
    Position, Turn,
};

/// State of the whole puzzle: the current [`CubieInfo`] of every cubie.
///
/// Turns never modify a cubie while other cubies still need to read the old
/// state. Instead, a new list is computed from the old one and swapped in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubeState {
    cubies: PerCubie<CubieInfo>,
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeState {
    /// Constructs a new solved puzzle state.
    pub fn new() -> Self {
        Self {
            cubies: PerCubie::from_fn(|cubie| CubieInfo::solved(cubie.home())),
        }
    }

    /// Constructs a puzzle state from a list of cubies. Returns an error if
    /// [`CubeState::check_invariants()`] fails.
    pub fn from_cubies(cubies: PerCubie<CubieInfo>) -> Result<Self, InvariantError> {
        let ret = Self { cubies };
        ret.check_invariants()?;
        Ok(ret)
    }

    /// Resets the puzzle to the solved state.
    pub fn reset(&mut self) {
        log::debug!("resetting puzzle state");
        *self = Self::new();
    }

    /// Returns the state of every cubie.
    pub fn cubies(&self) -> &PerCubie<CubieInfo> {
        &self.cubies
    }

    /// Returns the state of one cubie.
    pub fn cubie(&self, cubie: Cubie) -> &CubieInfo {
        &self.cubies[cubie]
    }

    /// Returns the cubie currently at `position`, or `None` if the position is
    /// out of range.
    pub fn cubie_at(&self, position: Position) -> Option<Cubie> {
        self.cubies
            .iter_filter(|_, info| info.position == position)
            .next()
    }

    /// Returns the cubies currently in the layer turned by `face`.
    pub fn grip(&self, face: Face) -> impl '_ + Iterator<Item = Cubie> {
        self.cubies.iter_filter(move |_, info| info.is_in_layer(face))
    }

    /// Returns the state after applying `turn`, leaving `self` unchanged.
    ///
    /// Every cubie in the turned layer is recomputed from `self`, so the
    /// order in which cubies are visited does not matter.
    #[must_use]
    pub fn do_turn(&self, turn: Turn) -> Self {
        let cubies = self.cubies.map_ref(|_, info| match info.is_in_layer(turn.face) {
            true => info.turned(turn),
            false => *info,
        });
        Self { cubies }
    }

    /// Applies `turn` to the puzzle.
    pub fn apply_turn(&mut self, turn: Turn) {
        log::trace!("applying turn {turn}");
        *self = self.do_turn(turn);
    }

    /// Applies each turn in order.
    pub fn apply_turns(&mut self, turns: impl IntoIterator<Item = Turn>) {
        for turn in turns {
            self.apply_turn(turn);
        }
    }

    /// Applies a turn given as a face symbol (such as `"R"`) and a direction
    /// (such as `"clockwise"`).
    ///
    /// If either one is not recognized, the state is left unchanged and this
    /// returns `false`.
    pub fn apply_command(&mut self, face: &str, direction: &str) -> bool {
        let face = match Face::from_str(face) {
            Ok(face) => face,
            Err(e) => {
                log::warn!("ignoring turn command: {e}");
                return false;
            }
        };
        let direction = match Direction::from_str(direction) {
            Ok(direction) => direction,
            Err(e) => {
                log::warn!("ignoring turn command: {e}");
                return false;
            }
        };
        self.apply_turn(Turn::new(face, direction));
        true
    }

    /// Returns the color visible on each of the nine stickers of `face`.
    ///
    /// The grid is laid out as the face appears in an unfolded net: `U` with
    /// `B` above it, `D` with `F` above it, and the four side faces upright.
    /// Rows are listed top to bottom and columns left to right.
    pub fn face_stickers(&self, face: Face) -> [[Color; 3]; 3] {
        let by_position: BTreeMap<Position, &CubieInfo> = self
            .cubies
            .iter_values()
            .map(|info| (info.position, info))
            .collect();
        let slot = face.color_slot();
        std::array::from_fn(|row| {
            std::array::from_fn(|col| {
                let position = net_position(face, row, col);
                match by_position.get(&position) {
                    Some(info) => info.color(slot),
                    // Only reachable if the position invariant is broken.
                    None => CubieInfo::solved(position).color(slot),
                }
            })
        })
    }

    /// Returns whether every face shows only one color.
    ///
    /// This only looks at visible stickers, so states that differ in the
    /// orientation of center cubies may both count as solved.
    pub fn is_solved(&self) -> bool {
        Face::ALL.into_iter().all(|face| {
            self.face_stickers(face)
                .iter()
                .flatten()
                .all_equal()
        })
    }

    /// Returns the number of times each color appears across every slot of
    /// every cubie.
    pub fn color_counts(&self) -> BTreeMap<Color, usize> {
        let mut counts: BTreeMap<Color, usize> = Color::iter().map(|c| (c, 0)).collect();
        for &color in self.cubies.iter_values().flat_map(|info| &info.colors) {
            *counts.entry(color).or_default() += 1;
        }
        counts
    }

    /// Checks that the cubies occupy every position exactly once and that no
    /// color has been created or lost.
    ///
    /// This can only fail for states constructed from external data.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let mut seen: BTreeMap<Position, Cubie> = BTreeMap::new();
        for (cubie, info) in self.cubies.iter() {
            let position = info.position;
            if !position.is_valid() {
                return Err(InvariantError::PositionOutOfRange { cubie, position });
            }
            if let Some(&a) = seen.get(&position) {
                return Err(InvariantError::DuplicatePosition { a, b: cubie, position });
            }
            seen.insert(position, cubie);
        }

        let expected = CUBIE_COUNT * COLORS_PER_CUBIE / Color::COUNT;
        for (color, actual) in self.color_counts() {
            if actual != expected {
                return Err(InvariantError::ColorCount {
                    color,
                    expected,
                    actual,
                });
            }
        }

        Ok(())
    }
}

/// Returns the position of the sticker at `row` and `col` of `face` in the
/// unfolded net.
fn net_position(face: Face, row: usize, col: usize) -> Position {
    let r = row as i8 - 1;
    let c = col as i8 - 1;
    match face {
        Face::U => Position::new(c, -1, -r),
        Face::D => Position::new(c, 1, r),
        Face::F => Position::new(c, r, -1),
        Face::B => Position::new(-c, r, 1),
        Face::L => Position::new(-1, r, -c),
        Face::R => Position::new(1, r, c),
    }
}
