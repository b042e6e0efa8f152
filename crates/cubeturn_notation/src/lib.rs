//! Move notation parser and serializer.
//!
//! A move sequence is a whitespace-separated list of moves. Each move is a
//! face letter followed by an optional [`Multiplier`]:
//!
//! - `R` turns the right face clockwise
//! - `R'` turns it counterclockwise
//! - `R2` turns it twice
//! - `R3'` turns it counterclockwise three times

use std::fmt;
use std::str::FromStr;

use cubeturn_core::{Direction, Face, Turn};
use itertools::Itertools;

mod errors;

pub use errors::{InvertError, ParseError};

/// Multiplier suffix using `'` for negative numbers.
///
/// The default multiplier is `Multiplier(1)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Multiplier(pub i32);

impl Default for Multiplier {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.unsigned_abs();
        if abs != 1 {
            write!(f, "{abs}")?;
        }
        if self.0 < 0 {
            write!(f, "'")?;
        }
        Ok(())
    }
}

impl From<i32> for Multiplier {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl FromStr for Multiplier {
    type Err = ();

    /// Parses a multiplier. Unlike [`Multiplier::to_string()`], this accepts
    /// the empty string (meaning `1`) and `'` (meaning `-1`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (digits, negative) = match s.strip_suffix('\'') {
            Some(rest) => (rest, true),
            None => (s, false),
        };
        let abs = match digits {
            "" => 1,
            _ if digits.bytes().all(|b| b.is_ascii_digit()) => {
                i32::try_from(digits.parse::<u32>().map_err(|_| ())?).map_err(|_| ())?
            }
            _ => return Err(()),
        };
        Ok(Self(if negative { -abs } else { abs }))
    }
}

impl Multiplier {
    /// Returns the equivalent number of clockwise quarter turns, from 0 to 3.
    pub fn quarter_turns(self) -> u8 {
        self.0.rem_euclid(4) as u8
    }

    /// Returns the negated multiplier, or an error in case of overflow.
    pub fn checked_neg(self) -> Result<Self, InvertError> {
        self.0
            .checked_neg()
            .map(Self)
            .ok_or(InvertError::IntegerOverflow)
    }
}

/// Turn of one face, possibly repeated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Face to turn.
    pub face: Face,
    /// Number of clockwise quarter turns.
    pub multiplier: Multiplier,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.multiplier)
    }
}

impl From<Turn> for Move {
    fn from(turn: Turn) -> Self {
        let multiplier = match turn.direction {
            Direction::Clockwise => Multiplier(1),
            Direction::CounterClockwise => Multiplier(-1),
        };
        Self {
            face: turn.face,
            multiplier,
        }
    }
}

impl Move {
    /// Constructs a move.
    pub fn new(face: Face, multiplier: impl Into<Multiplier>) -> Self {
        Self {
            face,
            multiplier: multiplier.into(),
        }
    }

    /// Returns the shortest list of quarter turns equivalent to the move.
    ///
    /// A half turn is two clockwise quarter turns.
    pub fn turns(self) -> impl Iterator<Item = Turn> {
        let (direction, count) = match self.multiplier.quarter_turns() {
            3 => (Direction::CounterClockwise, 1),
            n => (Direction::Clockwise, n as usize),
        };
        std::iter::repeat_n(Turn::new(self.face, direction), count)
    }

    /// Returns the move that undoes this one.
    pub fn inverse(self) -> Result<Self, InvertError> {
        Ok(Self {
            face: self.face,
            multiplier: self.multiplier.checked_neg()?,
        })
    }
}

/// Sequence of moves.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct MoveSequence(pub Vec<Move>);

impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

impl FromStr for MoveSequence {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_notation(s)
    }
}

impl FromIterator<Move> for MoveSequence {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl MoveSequence {
    /// Returns the number of moves in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the sequence has no moves.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends every move from `other`.
    pub fn extend(&mut self, other: MoveSequence) {
        self.0.extend(other.0);
    }

    /// Returns the sequence as a list of quarter turns.
    pub fn turns(&self) -> impl '_ + Iterator<Item = Turn> {
        self.0.iter().flat_map(|m| m.turns())
    }

    /// Returns the sequence that undoes this one.
    pub fn inverse(&self) -> Result<Self, InvertError> {
        self.0.iter().rev().map(|m| m.inverse()).collect()
    }
}

/// Parses a whitespace-separated move sequence.
pub fn parse_notation(s: &str) -> Result<MoveSequence, ParseError> {
    s.split_whitespace()
        .map(|token| {
            // `token` is a substring of `s`.
            let offset = token.as_ptr() as usize - s.as_ptr() as usize;
            parse_move(token, offset)
        })
        .collect()
}

fn parse_move(token: &str, offset: usize) -> Result<Move, ParseError> {
    let mut chars = token.chars();
    let symbol = chars.next().ok_or(ParseError::UnknownFace {
        symbol: ' ',
        offset,
    })?;
    let face = Face::from_symbol(symbol).ok_or(ParseError::UnknownFace { symbol, offset })?;
    let rest = chars.as_str();
    let multiplier = rest.parse().map_err(|()| ParseError::BadMultiplier {
        text: rest.to_owned(),
        offset,
    })?;
    Ok(Move { face, multiplier })
}
