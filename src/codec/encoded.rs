use crate::bits::BitString;
use crate::error::Result;
use crate::huffman::{CodeTable, HuffmanDecoder, HuffmanTree};
use crate::CodingStats;

/// Output of one pipeline run: the tree, its code table and the encoded stream
///
/// The tree stays in memory for decoding; nothing here is a wire format.
/// Empty input has no tree, an empty table and an empty stream.
#[derive(Clone, Debug)]
pub struct Encoded {
    tree: Option<HuffmanTree>,
    table: CodeTable,
    stream: BitString,
    input_symbols: u64,
}

impl Encoded {
    pub(crate) fn new(
        tree: Option<HuffmanTree>,
        table: CodeTable,
        stream: BitString,
        input_symbols: u64,
    ) -> Self {
        Self { tree, table, stream, input_symbols }
    }

    pub fn tree(&self) -> Option<&HuffmanTree> {
        self.tree.as_ref()
    }

    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    pub fn stream(&self) -> &BitString {
        &self.stream
    }

    /// Reconstruct the original input
    pub fn decode(&self) -> Result<Vec<u8>> {
        match &self.tree {
            Some(tree) => HuffmanDecoder::new(tree).decode(&self.stream),
            None => Ok(Vec::new()),
        }
    }

    /// The stream packed MSB-first into bytes, with its bit length
    pub fn packed(&self) -> (Vec<u8>, usize) {
        (self.stream.to_bytes(), self.stream.len())
    }

    pub fn stats(&self) -> CodingStats {
        let fixed_width = CodingStats::fixed_width(self.table.len()) as u64;
        let encoded_bits = self.stream.len() as u64;
        CodingStats {
            input_symbols: self.input_symbols,
            distinct_symbols: self.table.len(),
            encoded_bits,
            fixed_width_bits: self.input_symbols * fixed_width,
            packed_bytes: (encoded_bits + 7) / 8,
        }
    }
}
