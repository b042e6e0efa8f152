//! Unfolded net rendering.
//!
//! ```text
//!       U
//!     L F R B
//!       D
//! ```

use cubeturn_core::{Color, CubeState, Face};
use cubeturn_prefs::Preferences;
use owo_colors::OwoColorize;

/// Faces in each band of the net, top to bottom. `None` is a blank gap.
const NET_LAYOUT: [[Option<Face>; 4]; 3] = [
    [None, Some(Face::U), None, None],
    [Some(Face::L), Some(Face::F), Some(Face::R), Some(Face::B)],
    [None, Some(Face::D), None, None],
];

/// Width of one sticker in terminal columns.
const STICKER_WIDTH: usize = 2;

/// Renders the puzzle as an unfolded net, one line per row of stickers.
pub(crate) fn render(cube: &CubeState, prefs: &Preferences, colored: bool) -> String {
    let mut out = String::new();
    for band in NET_LAYOUT {
        let stickers = band.map(|face| face.map(|f| cube.face_stickers(f)));
        for row in 0..3 {
            let mut line = String::new();
            for face in &stickers {
                match face {
                    Some(grid) => {
                        for &color in &grid[row] {
                            line += &sticker(prefs, color, colored);
                        }
                    }
                    None => line += &" ".repeat(STICKER_WIDTH * 3),
                }
            }
            out += line.trim_end();
            out.push('\n');
        }
    }
    out
}

fn sticker(prefs: &Preferences, color: Color, colored: bool) -> String {
    let letter = prefs.letter(color);
    match colored {
        true => {
            let [r, g, b] = prefs.rgb(color);
            format!("{letter} ").black().on_truecolor(r, g, b).to_string()
        }
        false => format!("{letter} "),
    }
}
