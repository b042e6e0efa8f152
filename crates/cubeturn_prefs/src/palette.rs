//! Sticker color palette.

use std::collections::BTreeMap;

use cubeturn_core::Color;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 8-bit sRGB components.
pub type Rgb = [u8; 3];

/// Display color for each sticker color.
///
/// Serialized as a map from color name to a hex string such as `"#0051ba"`.
/// A bad entry fails to deserialize with an error naming its color.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Palette(BTreeMap<Color, Rgb>);

impl Palette {
    /// Light gray, used for colors missing from the palette.
    pub const FALLBACK: Rgb = [0xc0; 3];

    /// Returns the display color for `color`, if there is one.
    pub fn get(&self, color: Color) -> Option<Rgb> {
        self.0.get(&color).copied()
    }

    /// Sets the display color for `color`.
    pub fn set(&mut self, color: Color, rgb: Rgb) {
        self.0.insert(color, rgb);
    }

    /// Returns the number of colors in the palette.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(color, &rgb)| (color, hex_string(rgb))))
    }
}

impl<'de> Deserialize<'de> for Palette {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        BTreeMap::<Color, String>::deserialize(deserializer)?
            .into_iter()
            .map(|(color, s)| match parse_hex(&s) {
                Some(rgb) => Ok((color, rgb)),
                None => Err(D::Error::custom(format!(
                    "palette entry for {color} is {s:?}, expected \"#rrggbb\"",
                ))),
            })
            .collect::<Result<_, _>>()
            .map(Palette)
    }
}

/// Formats a color like `"#0051ba"`.
fn hex_string(rgb: Rgb) -> String {
    format!("#{}", hex::encode(rgb))
}

/// Parses a color like `"#0051ba"`. The `#` is optional.
fn parse_hex(s: &str) -> Option<Rgb> {
    let mut rgb = [0; 3];
    hex::decode_to_slice(s.strip_prefix('#').unwrap_or(s), &mut rgb).ok()?;
    Some(rgb)
}
