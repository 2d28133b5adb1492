use std::collections::BTreeMap;

use super::tree::{HuffmanTree, Node};
use crate::bits::BitString;

/// Symbol to code mapping derived from a Huffman tree
///
/// Codes are the root-to-leaf paths (left = 0, right = 1); the table is
/// prefix-free because every symbol sits at a distinct leaf.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, BitString>,
}

impl CodeTable {
    /// Derive codes by depth-first traversal of `tree`
    ///
    /// Uses an explicit stack since a skewed tree is as deep as its alphabet.
    /// A single-leaf root gets the code `0`.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = BTreeMap::new();

        if let Node::Leaf { symbol, .. } = tree.root() {
            codes.insert(*symbol, BitString::from_iter([false]));
            return Self { codes };
        }

        let mut stack = vec![(tree.root(), BitString::new())];
        while let Some((node, path)) = stack.pop() {
            match node {
                Node::Leaf { symbol, .. } => {
                    codes.insert(*symbol, path);
                }
                Node::Internal { left, right, .. } => {
                    let mut right_path = path.clone();
                    right_path.push(true);
                    let mut left_path = path;
                    left_path.push(false);

                    stack.push((right, right_path));
                    stack.push((left, left_path));
                }
            }
        }

        Self { codes }
    }

    pub fn get(&self, symbol: u8) -> Option<&BitString> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Codes in ascending symbol order
    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitString)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }

    /// Longest code length (0 for an empty table)
    pub fn max_len(&self) -> usize {
        self.codes.values().map(BitString::len).max().unwrap_or(0)
    }

    /// True if no code is a prefix of another
    pub fn is_prefix_free(&self) -> bool {
        // In lexicographic order a prefix sorts directly before its extensions
        let mut sorted: Vec<&BitString> = self.codes.values().collect();
        sorted.sort_by(|a, b| a.as_slice().cmp(b.as_slice()));
        sorted.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }
}

/// Derive the code table of `tree`
pub fn code_table(tree: &HuffmanTree) -> CodeTable {
    CodeTable::from_tree(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::frequency::frequencies;
    use crate::huffman::tree::build_tree;

    fn table_for(input: &[u8]) -> CodeTable {
        code_table(&build_tree(&frequencies(input)).unwrap())
    }

    #[test]
    fn test_single_symbol_gets_zero() {
        let table = table_for(b"AAAA");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(b'A').map(ToString::to_string), Some("0".to_string()));
    }

    #[test]
    fn test_two_symbols_one_bit_each() {
        let table = table_for(b"xxxxxxxy");
        assert_eq!(table.get(b'x').map(BitString::len), Some(1));
        assert_eq!(table.get(b'y').map(BitString::len), Some(1));
        assert_ne!(table.get(b'x'), table.get(b'y'));
    }

    #[test]
    fn test_abracadabra() {
        let table = table_for(b"ABRACADABRA");
        assert_eq!(table.len(), 5);
        assert!(table.is_prefix_free());
        // A outweighs the other four combined
        assert_eq!(table.get(b'A').map(BitString::len), Some(1));
        assert!(table.iter().all(|(_, code)| !code.is_empty()));
    }

    #[test]
    fn test_one_entry_per_leaf() {
        let tree = build_tree(&frequencies(b"hello world")).unwrap();
        let table = code_table(&tree);
        assert_eq!(table.len(), tree.leaf_count());
        for (symbol, _, depth) in tree.leaves() {
            assert_eq!(table.get(symbol).map(BitString::len), Some(depth));
        }
    }

    #[test]
    fn test_prefix_check_detects_violation() {
        let mut codes = BTreeMap::new();
        codes.insert(b'a', "01".parse().unwrap());
        codes.insert(b'b', "011".parse().unwrap());
        let table = CodeTable { codes };
        assert!(!table.is_prefix_free());
    }

    #[test]
    fn test_full_byte_alphabet() {
        let input: Vec<u8> = (0..=255u8).collect();
        let table = table_for(&input);
        assert_eq!(table.len(), 256);
        assert!(table.is_prefix_free());
        // Uniform weights over 256 symbols give a perfectly balanced tree
        assert!(table.iter().all(|(_, code)| code.len() == 8));
    }
}
