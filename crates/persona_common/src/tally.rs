//! Axis tally - per-letter score counts for one diagnosis run.

use crate::axis::{Axis, AxisPair};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Counts per axis letter, freshly created for each scoring run.
///
/// Counts only ever increase: once by the accumulator per answered
/// question, and once per resolved tie. Serializes as a letter -> count
/// map, which is also the shape stored in the diagnosis database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AxisTally {
    counts: BTreeMap<Axis, u32>,
}

impl AxisTally {
    /// Fresh tally with all eight letters at zero.
    pub fn new() -> Self {
        let mut counts = BTreeMap::new();
        for axis in Axis::ALL {
            counts.insert(axis, 0);
        }
        Self { counts }
    }

    /// Count for one letter.
    pub fn get(&self, axis: Axis) -> u32 {
        self.counts.get(&axis).copied().unwrap_or(0)
    }

    /// Add one point to a letter.
    pub fn credit(&mut self, axis: Axis) {
        *self.counts.entry(axis).or_insert(0) += 1;
    }

    /// Counts for a pair as `(first, second)`.
    pub fn pair_counts(&self, pair: AxisPair) -> (u32, u32) {
        (self.get(pair.first()), self.get(pair.second()))
    }

    /// Total number of points credited to a pair.
    pub fn pair_total(&self, pair: AxisPair) -> u32 {
        let (a, b) = self.pair_counts(pair);
        a + b
    }

    /// Whether the pair's two counts are equal (includes the 0-0 case).
    pub fn is_tied(&self, pair: AxisPair) -> bool {
        let (a, b) = self.pair_counts(pair);
        a == b
    }

    /// All pairs whose counts are currently equal, in derivation order.
    pub fn tied_pairs(&self) -> Vec<AxisPair> {
        AxisPair::ALL
            .into_iter()
            .filter(|pair| self.is_tied(*pair))
            .collect()
    }

    /// Iterate `(letter, count)` in canonical letter order.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, u32)> + '_ {
        Axis::ALL.into_iter().map(move |axis| (axis, self.get(axis)))
    }
}

impl Default for AxisTally {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AxisTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (axis, count) in self.iter() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}:{}", axis, count)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tally_is_all_zero() {
        let tally = AxisTally::new();
        for axis in Axis::ALL {
            assert_eq!(tally.get(axis), 0);
        }
        // All four pairs start tied at 0-0
        assert_eq!(tally.tied_pairs().len(), 4);
    }

    #[test]
    fn test_credit_increments_single_letter() {
        let mut tally = AxisTally::new();
        tally.credit(Axis::E);
        tally.credit(Axis::E);
        tally.credit(Axis::F);

        assert_eq!(tally.get(Axis::E), 2);
        assert_eq!(tally.get(Axis::F), 1);
        assert_eq!(tally.get(Axis::I), 0);
        assert_eq!(tally.pair_counts(AxisPair::EI), (2, 0));
        assert!(!tally.is_tied(AxisPair::EI));
        assert!(tally.is_tied(AxisPair::SN));
    }

    #[test]
    fn test_serializes_as_letter_map() {
        let mut tally = AxisTally::new();
        tally.credit(Axis::J);

        let json = serde_json::to_string(&tally).unwrap();
        assert!(json.contains("\"J\":1"));
        assert!(json.contains("\"E\":0"));

        let back: AxisTally = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tally);
    }

    #[test]
    fn test_display_lists_all_letters() {
        let tally = AxisTally::new();
        assert_eq!(tally.to_string(), "E:0 I:0 S:0 N:0 T:0 F:0 J:0 P:0");
    }
}
