//! Locations of files read and written by cubeturn.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use eyre::{OptionExt, Result};

/// Whether this is an official build of the software (as opposed to a local
/// build).
pub const IS_OFFICIAL_BUILD: bool = std::option_env!("CUBETURN_OFFICIAL_BUILD").is_some();

const PREFS_FILE_NAME: &str = "cubeturn-prefs";
const PREFS_FILE_EXTENSION: &str = "yaml";

lazy_static! {
    static ref PATHS: Option<AppPaths> = app_paths();
}

/// Returns the user preferences file.
pub fn prefs_file() -> Result<&'static Path> {
    Ok(&PATHS.as_ref().ok_or_eyre("no paths")?.prefs_file)
}

/// Paths to external files read by cubeturn.
struct AppPaths {
    /// Path to the user preferences file.
    prefs_file: PathBuf,
}

/// Returns the app paths.
///
/// - For dev builds, uses the workspace directory.
/// - For official builds, uses the system configuration directory.
fn app_paths() -> Option<AppPaths> {
    match IS_OFFICIAL_BUILD {
        true => nonportable_paths().or_else(portable_paths),
        false => portable_paths().or_else(nonportable_paths),
    }
}

fn nonportable_paths() -> Option<AppPaths> {
    match ProjectDirs::from("", "", "cubeturn") {
        Some(dirs) => {
            log::info!("Using nonportable paths");
            Some(AppPaths {
                prefs_file: dirs
                    .config_dir()
                    .join(format!("{PREFS_FILE_NAME}.{PREFS_FILE_EXTENSION}")),
            })
        }
        None => {
            log::error!("Error getting nonportable directories");
            None
        }
    }
}

fn portable_paths() -> Option<AppPaths> {
    // `crates/cubeturn_prefs/` -> workspace root
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).parent()?.parent()?;
    log::info!("Using portable paths");
    Some(AppPaths {
        prefs_file: dir.join(format!("{PREFS_FILE_NAME}.{PREFS_FILE_EXTENSION}")),
    })
}
