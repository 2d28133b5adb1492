use std::collections::HashMap;

/// Occurrence count per symbol of one input sequence
///
/// Holds one entry per distinct symbol present; absent symbols never appear.
/// Iteration order is unspecified, use [`FrequencyTable::sorted`] when a
/// stable order matters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<u8, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self { counts: HashMap::new() }
    }

    /// Count every symbol of `input`
    pub fn from_symbols(input: &[u8]) -> Self {
        let mut table = Self::new();
        table.count(input);
        table
    }

    /// Add the symbols of `input` to the running counts
    pub fn count(&mut self, input: &[u8]) {
        for &symbol in input {
            *self.counts.entry(symbol).or_insert(0) += 1;
        }
    }

    /// Count for `symbol`, or `None` if it never occurred
    pub fn get(&self, symbol: u8) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts (the input length)
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }

    /// Entries in ascending symbol order
    pub fn sorted(&self) -> Vec<(u8, u64)> {
        let mut entries: Vec<(u8, u64)> = self.iter().collect();
        entries.sort_unstable_by_key(|&(symbol, _)| symbol);
        entries
    }
}

impl FromIterator<(u8, u64)> for FrequencyTable {
    /// Build from explicit `(symbol, count)` pairs; zero counts are dropped
    /// and repeated symbols accumulate.
    fn from_iter<I: IntoIterator<Item = (u8, u64)>>(iter: I) -> Self {
        let mut counts = HashMap::new();
        for (symbol, count) in iter.into_iter().filter(|&(_, count)| count > 0) {
            *counts.entry(symbol).or_insert(0) += count;
        }
        Self { counts }
    }
}

/// Count symbol occurrences in `input`
pub fn frequencies(input: &[u8]) -> FrequencyTable {
    FrequencyTable::from_symbols(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_abracadabra() {
        let freq = frequencies(b"ABRACADABRA");
        assert_eq!(freq.len(), 5);
        assert_eq!(freq.get(b'A'), Some(5));
        assert_eq!(freq.get(b'B'), Some(2));
        assert_eq!(freq.get(b'R'), Some(2));
        assert_eq!(freq.get(b'C'), Some(1));
        assert_eq!(freq.get(b'D'), Some(1));
        assert_eq!(freq.get(b'Z'), None);
        assert_eq!(freq.total(), 11);
    }

    #[test]
    fn test_empty_input() {
        let freq = frequencies(b"");
        assert!(freq.is_empty());
        assert_eq!(freq.total(), 0);
        assert!(freq.sorted().is_empty());
    }

    #[test]
    fn test_incremental_count() {
        let mut freq = FrequencyTable::new();
        freq.count(b"ab");
        freq.count(b"bb");
        assert_eq!(freq.get(b'a'), Some(1));
        assert_eq!(freq.get(b'b'), Some(3));
    }

    #[test]
    fn test_sorted_order() {
        let freq = frequencies(b"zyxzy");
        assert_eq!(freq.sorted(), vec![(b'x', 1), (b'y', 2), (b'z', 2)]);
    }

    #[test]
    fn test_from_pairs_drops_zero_counts() {
        let freq: FrequencyTable = [(b'a', 3), (b'b', 0), (b'a', 2)].into_iter().collect();
        assert_eq!(freq.len(), 1);
        assert_eq!(freq.get(b'a'), Some(5));
    }
}
