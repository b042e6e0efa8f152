//! Command-line 3x3x3 twisty puzzle simulator.

mod cli;
mod net;

use clap::Parser;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    env_logger::builder().init();

    let args = cli::Args::parse();
    cli::exec(args.subcommand)
}
