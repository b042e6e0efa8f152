use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter};

/// Sticker color.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// Color of the `U` face when solved.
    White,
    /// Color of the `R` face when solved.
    Red,
    /// Color of the `F` face when solved.
    Blue,
    /// Color of the `L` face when solved.
    Orange,
    /// Color of the `B` face when solved.
    Green,
    /// Color of the `D` face when solved.
    Yellow,
}

/// Index into the six colors of a cubie.
///
/// Each slot is tied to the side of the cubie it is drawn on, which does not
/// depend on where the cubie currently is. Turns move colors between slots.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum ColorSlot {
    /// Up-facing side (index 0).
    Up = 0,
    /// Right-facing side (index 1).
    Right = 1,
    /// Front-facing side (index 2).
    Front = 2,
    /// Left-facing side (index 3).
    Left = 3,
    /// Back-facing side (index 4).
    Back = 4,
    /// Down-facing side (index 5).
    Down = 5,
}

impl ColorSlot {
    /// Returns the numeric index of the slot.
    pub fn index(self) -> usize {
        self as usize
    }
}
