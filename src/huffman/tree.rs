use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use log::{debug, trace};

use super::frequency::FrequencyTable;
use crate::error::{Error, Result};

/// Huffman tree node
///
/// Internal nodes own both children exclusively; only leaves carry a symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Leaf { symbol: u8, weight: u64 },
    Internal { weight: u64, left: Box<Node>, right: Box<Node> },
}

impl Node {
    /// Combined occurrence count of this subtree
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    pub fn symbol(&self) -> Option<u8> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    /// Child reached by `bit` (false = left, true = right); leaves have none
    #[inline]
    pub fn child(&self, bit: bool) -> Option<&Node> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some(if bit { right } else { left }),
        }
    }
}

/// Priority queue entry: ordered by weight, ties broken by creation order
struct HeapNode {
    weight: u64,
    seq: usize,
    node: Node,
}

impl PartialEq for HeapNode {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}
impl Eq for HeapNode {}
impl PartialOrd for HeapNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for HeapNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight.cmp(&other.weight).then(self.seq.cmp(&other.seq))
    }
}

/// A complete Huffman tree, read-only once built
///
/// For a single-symbol alphabet the root is the lone leaf itself; its code is
/// `0` (see [`crate::huffman::codes::CodeTable`]) and the decoder accepts only
/// `0` digits against it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    /// Build the tree by repeatedly merging the two lightest nodes
    ///
    /// Leaves are seeded in ascending symbol order, so equal weights resolve
    /// the same way on every run. The first node popped becomes the left child.
    pub fn build(frequencies: &FrequencyTable) -> Result<Self> {
        let entries = frequencies.sorted();

        match entries.as_slice() {
            [] => return Err(Error::EmptyAlphabet),
            &[(symbol, weight)] => {
                debug!("single-symbol alphabet: leaf 0x{:02x} is the root", symbol);
                return Ok(Self { root: Node::Leaf { symbol, weight } });
            }
            _ => {}
        }

        let mut heap: BinaryHeap<Reverse<HeapNode>> = entries
            .iter()
            .enumerate()
            .map(|(seq, &(symbol, weight))| {
                Reverse(HeapNode { weight, seq, node: Node::Leaf { symbol, weight } })
            })
            .collect();
        let mut next_seq = heap.len();

        let root = loop {
            let Reverse(left) = heap.pop().ok_or(Error::EmptyAlphabet)?;
            let Some(Reverse(right)) = heap.pop() else {
                break left.node;
            };

            let weight = left.weight + right.weight;
            trace!("merge {} + {} -> {}", left.weight, right.weight, weight);

            heap.push(Reverse(HeapNode {
                weight,
                seq: next_seq,
                node: Node::Internal {
                    weight,
                    left: Box::new(left.node),
                    right: Box::new(right.node),
                },
            }));
            next_seq += 1;
        };

        let tree = Self { root };
        debug!(
            "built Huffman tree: {} symbols, weight {}, depth {}",
            entries.len(),
            tree.weight(),
            tree.depth()
        );
        Ok(tree)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Root weight (the input length)
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    /// True when the root is itself a leaf
    pub fn is_single_symbol(&self) -> bool {
        self.root.is_leaf()
    }

    /// Every leaf as `(symbol, weight, depth)`, left to right
    pub fn leaves(&self) -> Vec<(u8, u64, usize)> {
        let mut leaves = Vec::new();
        let mut stack = vec![(&self.root, 0usize)];

        while let Some((node, depth)) = stack.pop() {
            match node {
                Node::Leaf { symbol, weight } => leaves.push((*symbol, *weight, depth)),
                Node::Internal { left, right, .. } => {
                    // Right pushed first so left is visited first
                    stack.push((right, depth + 1));
                    stack.push((left, depth + 1));
                }
            }
        }
        leaves
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().len()
    }

    /// Longest root-to-leaf path (0 for a single-leaf tree)
    pub fn depth(&self) -> usize {
        self.leaves().iter().map(|&(_, _, depth)| depth).max().unwrap_or(0)
    }
}

/// Build a Huffman tree from symbol frequencies
pub fn build_tree(frequencies: &FrequencyTable) -> Result<HuffmanTree> {
    HuffmanTree::build(frequencies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::frequency::frequencies;

    fn assert_full_binary(node: &Node) {
        if let Node::Internal { weight, left, right } = node {
            assert_eq!(*weight, left.weight() + right.weight());
            assert_full_binary(left);
            assert_full_binary(right);
        }
    }

    #[test]
    fn test_empty_alphabet() {
        let result = build_tree(&FrequencyTable::new());
        assert!(matches!(result, Err(Error::EmptyAlphabet)));
    }

    #[test]
    fn test_single_symbol() {
        let tree = build_tree(&frequencies(b"AAAA")).unwrap();
        assert!(tree.is_single_symbol());
        assert_eq!(tree.root().symbol(), Some(b'A'));
        assert_eq!(tree.weight(), 4);
        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn test_two_symbols() {
        let tree = build_tree(&frequencies(b"aaab")).unwrap();
        assert!(!tree.is_single_symbol());
        assert_eq!(tree.depth(), 1);
        // Lighter node is popped first and becomes the left child
        assert_eq!(tree.root().child(false).and_then(Node::symbol), Some(b'b'));
        assert_eq!(tree.root().child(true).and_then(Node::symbol), Some(b'a'));
    }

    #[test]
    fn test_abracadabra_structure() {
        let tree = build_tree(&frequencies(b"ABRACADABRA")).unwrap();
        assert_eq!(tree.weight(), 11);
        assert_eq!(tree.leaf_count(), 5);
        assert_full_binary(tree.root());

        let cost: u64 = tree.leaves().iter().map(|&(_, w, d)| w * d as u64).sum();
        assert_eq!(cost, 23);
    }

    #[test]
    fn test_leaf_weights_sum_to_root() {
        let input = b"the quick brown fox jumps over the lazy dog";
        let tree = build_tree(&frequencies(input)).unwrap();
        let leaf_sum: u64 = tree.leaves().iter().map(|&(_, w, _)| w).sum();
        assert_eq!(leaf_sum, tree.weight());
        assert_eq!(tree.weight(), input.len() as u64);
    }

    #[test]
    fn test_deterministic() {
        let freq = frequencies(b"abcdabcdabcd");
        assert_eq!(build_tree(&freq).unwrap(), build_tree(&freq).unwrap());
    }

    #[test]
    fn test_skewed_weights_depth() {
        // Fibonacci weights produce a maximally deep tree
        let freq: FrequencyTable =
            [(0u8, 1), (1, 1), (2, 2), (3, 3), (4, 5), (5, 8), (6, 13)].into_iter().collect();
        let tree = build_tree(&freq).unwrap();
        assert_eq!(tree.depth(), 6);
        assert_full_binary(tree.root());
    }
}
