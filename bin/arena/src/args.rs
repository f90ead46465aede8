use clap::Parser;
use gambit_core::ARENA_DEPTHS;
use gambit_core::Depth;
use gambit_core::JEDI_BOARD_SIZE;

/// Computer-vs-computer Jedi chess matches driven by alpha-beta search.
#[derive(Debug, Parser)]
#[command(name = "arena")]
pub struct Args {
    /// Side length of the square board.
    #[arg(long, env = "ARENA_SIZE", default_value_t = JEDI_BOARD_SIZE)]
    pub size: usize,
    /// Depth limits to play, one match each (0 searches to the end).
    #[arg(long, env = "ARENA_DEPTHS", value_delimiter = ',', default_values_t = ARENA_DEPTHS)]
    pub depths: Vec<Depth>,
    /// Skip rendering the board before every ply.
    #[arg(long, env = "ARENA_QUIET")]
    pub quiet: bool,
    /// Print every decision as a JSON line.
    #[arg(long, env = "ARENA_JSON")]
    pub json: bool,
}
