//! Core type aliases, traits, and constants for gambit.
//!
//! This crate provides the foundational types and configuration parameters
//! shared by the search engine, the game adapters, and the arena driver.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Terminal payoffs and heuristic estimates, from Max's point of view.
pub type Utility = f32;
/// Plies below the root of a search.
pub type Depth = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// JEDI CHESS RULES
// ============================================================================
/// Default side length of the square board.
pub const JEDI_BOARD_SIZE: usize = 5;
/// Smallest playable board (needs a middle column and a gap between armies).
pub const JEDI_BOARD_MIN: usize = 3;
/// Largest board that fits the packed square representation.
pub const JEDI_BOARD_MAX: usize = 8;
/// Plies after which an undecided game is scored as a draw.
pub const JEDI_PLY_LIMIT: usize = 40;
/// Utility of a Rebel victory. A Sith victory scores the negation.
pub const JEDI_WIN_UTILITY: Utility = 61.0;
/// Utility of a draw.
pub const JEDI_DRAW_UTILITY: Utility = 0.0;

// ============================================================================
// JEDI CHESS HEURISTIC
// Material count seen from Max (the Rebel forces), plus a tempo bonus.
// ============================================================================
/// Material weight of a Sith (counted against Max).
pub const WEIGHT_SITH: Utility = 10.0;
/// Material weight of a Jedi.
pub const WEIGHT_JEDI: Utility = 8.0;
/// Material weight of a Rebel.
pub const WEIGHT_REBEL: Utility = 1.0;
/// Bonus for the side to move (positive when Max moves).
pub const TURN_BONUS: Utility = 10.0;
/// Largest magnitude a heuristic estimate may take.
/// Stays strictly inside the utility range so no guess outranks a known result.
pub const EVAL_CEILING: Utility = JEDI_WIN_UTILITY - 1.0;

// ============================================================================
// ARENA DEFAULTS
// ============================================================================
/// Depth limits played by default, one match each. Zero means unlimited.
pub const ARENA_DEPTHS: [Depth; 2] = [1, 2];

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> std::io::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::AlreadyExists, e))
}
