// src/analysis/mod.rs

//! Measurement statistics: outcome tallying, textual bar charts, and the
//! sample-key listing.
//!
//! The tally is built in a single pass and keeps first-seen order, so the
//! chart rows and the key listing reflect the order outcomes appeared in
//! the run, not their frequency.

use crate::simulation::SimulationResult;
use std::collections::HashMap;
use std::fmt;

/// Frequency count of distinct bit-string outcomes across a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeTally {
    /// Distinct outcome strings in first-seen order.
    order: Vec<String>,
    /// Occurrence count per distinct outcome string.
    counts: HashMap<String, u64>,
}

impl OutcomeTally {
    /// Creates a new, empty tally.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            counts: HashMap::new(),
        }
    }

    /// Tallies every outcome of a simulation run, in one pass.
    pub fn from_result(result: &SimulationResult) -> Self {
        let mut tally = Self::new();
        for bitstring in result.bitstrings() {
            tally.record(bitstring);
        }
        tally
    }

    /// Tallies an iterator of outcome strings, in one pass.
    pub fn from_bitstrings<I>(bitstrings: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut tally = Self::new();
        for bitstring in bitstrings {
            tally.record(bitstring);
        }
        tally
    }

    /// Records one observed outcome.
    pub fn record(&mut self, bitstring: String) {
        if !self.counts.contains_key(&bitstring) {
            self.order.push(bitstring.clone());
        }
        *self.counts.entry(bitstring).or_insert(0) += 1;
    }

    /// Occurrence count of one outcome string (0 if never seen).
    pub fn count(&self, bitstring: &str) -> u64 {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Sum of all counts; equals the run's repetition count.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct outcome strings observed.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// `true` when no outcomes have been recorded.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Distinct outcome strings in first-seen order.
    pub fn keys(&self) -> &[String] {
        &self.order
    }

    /// The first `limit` distinct outcome strings, in first-seen order.
    ///
    /// These are raw measurement records: no key derivation, stretching,
    /// or entropy extraction is applied to them.
    pub fn first_distinct(&self, limit: usize) -> &[String] {
        &self.order[..limit.min(self.order.len())]
    }

    /// Iterates `(outcome, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.order
            .iter()
            .map(|key| (key.as_str(), self.counts[key]))
    }

    /// Renders the tally as a textual bar chart, one row per distinct
    /// outcome in first-seen order. `width` is the bar length of the most
    /// frequent outcome; other bars scale proportionally (minimum one
    /// block for any observed outcome).
    pub fn histogram(&self, width: usize) -> String {
        let mut chart = String::new();
        if self.order.is_empty() {
            chart.push_str("(no outcomes)\n");
            return chart;
        }

        let max_count = self.order.iter().map(|k| self.counts[k]).max().unwrap_or(1);
        let label_width = self.order.iter().map(|k| k.len()).max().unwrap_or(0);
        let count_width = max_count.to_string().len();

        for key in &self.order {
            let count = self.counts[key];
            let bar_len = ((count as usize * width) / max_count as usize).max(1);
            let bar: String = "█".repeat(bar_len);
            chart.push_str(&format!(
                "{:>label_width$} | {:>count_width$} {}\n",
                key, count, bar
            ));
        }
        chart
    }
}

impl Default for OutcomeTally {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OutcomeTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Outcome Tally ({} distinct, {} total):",
            self.len(),
            self.total()
        )?;
        write!(f, "{}", self.histogram(40))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally_of(outcomes: &[&str]) -> OutcomeTally {
        OutcomeTally::from_bitstrings(outcomes.iter().map(|s| s.to_string()))
    }

    #[test]
    fn counts_accumulate_in_one_pass() {
        let tally = tally_of(&["01", "01", "10", "01"]);
        assert_eq!(tally.count("01"), 3);
        assert_eq!(tally.count("10"), 1);
        assert_eq!(tally.count("11"), 0);
        assert_eq!(tally.total(), 4);
        assert_eq!(tally.len(), 2);
    }

    #[test]
    fn keys_keep_first_seen_order() {
        // "10" is most frequent but was seen second; order must not change.
        let tally = tally_of(&["01", "10", "10", "10", "00"]);
        assert_eq!(tally.keys(), &["01", "10", "00"]);
        let pairs: Vec<(&str, u64)> = tally.iter().collect();
        assert_eq!(pairs, vec![("01", 1), ("10", 3), ("00", 1)]);
    }

    #[test]
    fn first_distinct_clamps_to_available_keys() {
        let tally = tally_of(&["111", "000"]);
        assert_eq!(tally.first_distinct(5), &["111", "000"]);
        assert_eq!(tally.first_distinct(1), &["111"]);
        assert!(tally.first_distinct(0).is_empty());
    }

    #[test]
    fn histogram_scales_bars_to_width() {
        let tally = tally_of(&["0", "0", "0", "0", "1"]);
        let chart = tally.histogram(20);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].matches('█').count(), 20);
        // Rare outcomes still get a visible bar.
        assert_eq!(lines[1].matches('█').count(), 5);
        assert!(lines[0].starts_with("0 | 4"));
    }

    #[test]
    fn histogram_of_empty_tally_is_placeholder() {
        let tally = OutcomeTally::new();
        assert_eq!(tally.histogram(10), "(no outcomes)\n");
    }
}
