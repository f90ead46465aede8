use gambit_search::Telemetry;
use std::time::Duration;

/// Search effort accumulated by one side over a match.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tally {
    decisions: usize,
    nodes: usize,
    elapsed: Duration,
}

impl Tally {
    pub fn record(&mut self, decision: &impl Telemetry) {
        self.decisions += 1;
        self.nodes += decision.nodes();
        self.elapsed += decision.elapsed();
    }
    pub fn decisions(&self) -> usize {
        self.decisions
    }
}

impl std::ops::Add for Tally {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            decisions: self.decisions + other.decisions,
            nodes: self.nodes + other.nodes,
            elapsed: self.elapsed + other.elapsed,
        }
    }
}

impl Telemetry for Tally {
    fn nodes(&self) -> usize {
        self.nodes
    }
    fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
