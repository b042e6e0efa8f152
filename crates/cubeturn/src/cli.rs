use std::io::Read;

use cubeturn_core::CubeState;
use cubeturn_notation::MoveSequence;
use cubeturn_prefs::Preferences;
use eyre::{Context, Result};
use itertools::Itertools;
use serde::Serialize;

/// cubeturn command-line interface
///
/// Moves are written in standard notation, such as `R U' F2`.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Apply moves to a solved puzzle and print every cubie as JSON.
    State {
        #[command(flatten)]
        moves: MovesArgs,
    },
    /// Apply moves to a solved puzzle and print it as an unfolded net.
    Net {
        #[command(flatten)]
        moves: MovesArgs,

        /// Print sticker letters without terminal colors.
        #[arg(long)]
        plain: bool,
    },
    /// Apply moves, then one turn command, and print every cubie as JSON.
    ///
    /// An unrecognized face or direction leaves the puzzle unchanged.
    Turn {
        /// Face symbol (such as `R`)
        face: String,
        /// Direction (`clockwise`, `cw`, `counterclockwise`, or `ccw`)
        direction: String,

        #[command(flatten)]
        moves: MovesArgs,
    },
    /// Print the effective preferences as YAML.
    Prefs {
        /// Also write them to the preferences file, filling in any missing
        /// fields with defaults.
        #[arg(long)]
        save: bool,
    },
}

/// Moves to apply before running a subcommand.
#[derive(clap::Args, Debug)]
pub(crate) struct MovesArgs {
    /// Moves to apply, starting from the solved state.
    moves: Vec<String>,

    /// File containing more moves to apply afterward, use '-' for stdin.
    #[arg(short, long, value_parser)]
    input: Option<clio::Input>,
}

impl MovesArgs {
    /// Reads and parses all the moves.
    fn read(self) -> Result<MoveSequence> {
        let mut seq = parse_moves(&self.moves.iter().join(" "))?;
        if let Some(mut input) = self.input {
            let mut buffer = String::new();
            input
                .read_to_string(&mut buffer)
                .context("error reading input file")?;
            seq.extend(parse_moves(&buffer)?);
        }
        Ok(seq)
    }

    /// Returns the puzzle state after all the moves.
    fn into_state(self) -> Result<CubeState> {
        let seq = self.read()?;
        log::info!("applying {} moves", seq.len());
        let mut cube = CubeState::new();
        cube.apply_turns(seq.turns());
        Ok(cube)
    }
}

pub(crate) fn exec(subcommand: Subcommand) -> Result<()> {
    match subcommand {
        Subcommand::State { moves } => {
            let cube = moves.into_state()?;
            debug_check(&cube)?;
            write_json_output(&cube)
        }

        Subcommand::Net { moves, plain } => {
            let cube = moves.into_state()?;
            debug_check(&cube)?;
            let prefs = Preferences::load();
            let colored = !plain && prefs.colored_output;
            print!("{}", crate::net::render(&cube, &prefs, colored));
            Ok(())
        }

        Subcommand::Turn {
            face,
            direction,
            moves,
        } => {
            let mut cube = moves.into_state()?;
            if !cube.apply_command(&face, &direction) {
                log::warn!("puzzle state unchanged");
            }
            debug_check(&cube)?;
            write_json_output(&cube)
        }

        Subcommand::Prefs { save } => {
            let prefs = Preferences::load();
            if save {
                prefs.save().context("error saving preferences")?;
            }
            match cubeturn_prefs::paths::prefs_file() {
                Ok(path) => println!("# {}", path.display()),
                Err(e) => log::warn!("error locating preferences file: {e}"),
            }
            serde_norway::to_writer(std::io::stdout(), &prefs)
                .context("error serializing preferences and writing to stdout")?;
            Ok(())
        }
    }
}

fn parse_moves(s: &str) -> Result<MoveSequence> {
    cubeturn_notation::parse_notation(s).with_context(|| format!("error parsing moves {s:?}"))
}

fn debug_check(cube: &CubeState) -> Result<()> {
    if cfg!(debug_assertions) {
        cube.check_invariants()
            .context("puzzle state is inconsistent")?;
    }
    Ok(())
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}
