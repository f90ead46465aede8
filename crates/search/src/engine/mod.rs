//! The alpha-beta search itself.
//!
//! - `engine` — Root decisions and the pruned recursion
//! - `result` — The record a root decision hands back
//! - `telemetry` — Node and timing reporting shared with callers

mod engine;
mod result;
mod telemetry;

pub use engine::*;
pub use result::*;
pub use telemetry::*;
