use std::time::Duration;

/// Search effort reporting shared by single decisions and whole matches.
///
/// # Required Methods
///
/// - `nodes()` — Nodes expanded
/// - `elapsed()` — Monotonic time spent searching
///
/// # Provided Methods
///
/// - `rate()` — Expansions per second
/// - `format()` — Aligned columns with throughput
pub trait Telemetry {
    /// Nodes that were expanded (terminal and cutoff leaves excluded).
    fn nodes(&self) -> usize;
    /// Time spent searching, measured with a monotonic clock.
    fn elapsed(&self) -> Duration;
    /// Expansions per second; zero when no measurable time has passed.
    fn rate(&self) -> f64 {
        match self.elapsed().as_secs_f64() {
            secs if secs > 0. => self.nodes() as f64 / secs,
            _ => 0.,
        }
    }
    fn format(&self) -> String {
        format!(
            "{:<20}{:<20}{:<20}",
            format!("nodes {}", self.nodes()),
            format!("secs {:.4}", self.elapsed().as_secs_f64()),
            format!("N/sec {:.1}", self.rate()),
        )
    }
}
