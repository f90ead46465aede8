//! Values and search windows.
//!
//! - `bound` — Finite utilities extended with two infinite sentinels
//! - `window` — The alpha-beta interval carried down the recursion

mod bound;
mod window;

pub use bound::*;
pub use window::*;
