//! Arena Binary
//!
//! Plays one computer-vs-computer Jedi chess match per depth limit and
//! prints an outcome table.
//!
//! Options: --size, --depths, --quiet, --json

mod args;
mod arena;
mod tally;

use args::*;
use arena::*;
use clap::Parser;
use tally::*;

fn main() -> anyhow::Result<()> {
    gambit_core::log()?;
    let args = Args::parse();
    log::info!("entering arena {:?}", args);
    let mut outcomes = Vec::with_capacity(args.depths.len());
    for &depth in args.depths.iter() {
        let arena = Arena::new(args.size, depth)?
            .quiet(args.quiet)
            .json(args.json);
        outcomes.push(arena.play()?);
    }
    println!("{}", Outcome::table(&outcomes));
    Ok(())
}
