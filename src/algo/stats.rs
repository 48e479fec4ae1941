use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// Compare and exchange counters for a single sort run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub compares: usize,
    pub exchanges: usize,
}

impl Stats {
    pub fn record_compare(&mut self) {
        self.compares += 1;
    }

    pub fn record_exchange(&mut self) {
        self.exchanges += 1;
    }
}

/// Actual counters of a run next to the counts selection sort should produce
/// for a range of `len` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub len: usize,
    pub expected_compares: usize,
    pub actual_compares: usize,
    pub expected_exchanges: usize,
    pub actual_exchanges: usize,
}

impl Report {
    pub fn new(len: usize, stats: &Stats) -> Report {
        Report {
            len,
            expected_compares: len * len.saturating_sub(1) / 2,
            actual_compares: stats.compares,
            expected_exchanges: len.saturating_sub(1),
            actual_exchanges: stats.exchanges,
        }
    }

    /// Percentage by which the compare count misses the expected count.
    pub fn compare_deviation(&self) -> f64 {
        deviation(self.expected_compares, self.actual_compares)
    }

    pub fn exchange_deviation(&self) -> f64 {
        deviation(self.expected_exchanges, self.actual_exchanges)
    }

    pub fn matches_expected(&self) -> bool {
        self.expected_compares == self.actual_compares
            && self.expected_exchanges == self.actual_exchanges
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn deviation(expected: usize, actual: usize) -> f64 {
    if expected == 0 {
        0.0
    } else {
        100.0 * (actual as f64 - expected as f64) / expected as f64
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Expected Compares = {}", self.expected_compares)?;
        writeln!(f, "Actual Compares = {}", self.actual_compares)?;
        writeln!(f, "Error in Compares = {:.2}%", self.compare_deviation())?;
        writeln!(f, "Expected Swaps = {}", self.expected_exchanges)?;
        writeln!(f, "Actual Swaps = {}", self.actual_exchanges)?;
        write!(f, "Error in Swaps = {:.2}%", self.exchange_deviation())
    }
}
