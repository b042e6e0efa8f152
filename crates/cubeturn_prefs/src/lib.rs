//! User preferences for cubeturn.
//!
//! Preferences are stored as YAML. Missing fields are filled in from the
//! built-in defaults in `default.yaml`.

#[macro_use]
extern crate lazy_static;

use std::collections::BTreeMap;
use std::path::Path;

use cubeturn_core::Color;
use serde::{Deserialize, Serialize};

mod palette;
pub mod paths;

pub use palette::{Palette, Rgb};

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    /// Built-in default preferences.
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

/// User preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Whether to draw stickers with terminal colors.
    pub colored_output: bool,
    /// Display color for each sticker color.
    pub palette: Palette,
    /// Letter for each sticker color when drawing without terminal colors.
    pub sticker_letters: BTreeMap<Color, char>,
}

impl Default for Preferences {
    fn default() -> Self {
        DEFAULT_PREFS.clone()
    }
}

impl Preferences {
    /// Loads preferences from the user preferences file. If loading fails,
    /// logs a warning and returns the default preferences.
    pub fn load() -> Self {
        match paths::prefs_file() {
            Ok(path) => Self::load_from(Some(path)),
            Err(e) => {
                log::warn!("Error locating user preferences: {e}");
                Self::load_from(None)
            }
        }
    }

    /// Loads preferences from `path` layered over the defaults. A missing file
    /// is not an error. If loading fails, logs a warning and returns the
    /// default preferences.
    pub fn load_from(path: Option<&Path>) -> Self {
        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));
        if let Some(path) = path {
            config = config.add_source(
                config::File::from(path)
                    .format(PREFS_FILE_FORMAT)
                    .required(false),
            );
        }

        config
            .build()
            .and_then(|c| c.try_deserialize::<Preferences>())
            .unwrap_or_else(|e| {
                log::warn!("Error loading preferences: {e}");
                Self::default()
            })
    }

    /// Saves preferences to the user preferences file.
    pub fn save(&self) -> eyre::Result<()> {
        self.save_to(paths::prefs_file()?)
    }

    /// Saves preferences to `path`, creating parent directories if needed.
    pub fn save_to(&self, path: &Path) -> eyre::Result<()> {
        if let Some(p) = path.parent() {
            std::fs::create_dir_all(p)?;
        }
        serde_norway::to_writer(std::fs::File::create(path)?, self)?;
        log::info!("Saved preferences to {}", path.display());
        Ok(())
    }

    /// Returns the display color for a sticker color.
    pub fn rgb(&self, color: Color) -> Rgb {
        self.palette
            .get(color)
            .or_else(|| DEFAULT_PREFS.palette.get(color))
            .unwrap_or(Palette::FALLBACK)
    }

    /// Returns the letter for a sticker color.
    pub fn letter(&self, color: Color) -> char {
        self.sticker_letters
            .get(&color)
            .or_else(|| DEFAULT_PREFS.sticker_letters.get(&color))
            .copied()
            .unwrap_or('?')
    }
}
