use super::tree::{HuffmanTree, Node};
use crate::bits::{BitReader, BitString};
use crate::error::{Error, Result};

/// Tree-walking Huffman decoder
pub struct HuffmanDecoder<'a> {
    tree: &'a HuffmanTree,
}

impl<'a> HuffmanDecoder<'a> {
    pub fn new(tree: &'a HuffmanTree) -> Self {
        Self { tree }
    }

    /// Decode a digit stream produced with this tree's code table
    pub fn decode(&self, stream: &BitString) -> Result<Vec<u8>> {
        self.decode_bits(stream.iter().map(Ok), stream.len())
    }

    /// Decode the first `bit_len` bits of an MSB-first packed stream
    pub fn decode_packed(&self, bytes: &[u8], bit_len: usize) -> Result<Vec<u8>> {
        let mut reader = BitReader::new(bytes);
        self.decode_bits((0..bit_len).map(|_| reader.read_bit()), bit_len)
    }

    fn decode_bits<I>(&self, bits: I, bit_len: usize) -> Result<Vec<u8>>
    where
        I: Iterator<Item = Result<bool>>,
    {
        let root = self.tree.root();
        let mut output = Vec::new();

        if let Node::Leaf { symbol, .. } = root {
            // Single-symbol tree: the only code is `0`
            for (position, bit) in bits.enumerate() {
                if bit? {
                    return Err(Error::InvalidStream { position });
                }
                output.push(*symbol);
            }
            return Ok(output);
        }

        let mut current = root;
        let mut path_len = 0usize;

        for (position, bit) in bits.enumerate() {
            current = current.child(bit?).ok_or(Error::InvalidStream { position })?;
            path_len += 1;

            if let Node::Leaf { symbol, .. } = current {
                output.push(*symbol);
                current = root;
                path_len = 0;
            }
        }

        if path_len > 0 {
            return Err(Error::TruncatedStream { bit_len, dangling_bits: path_len });
        }

        Ok(output)
    }
}

/// Decode `stream` by walking `tree` from the root for every symbol
pub fn decode(stream: &BitString, tree: &HuffmanTree) -> Result<Vec<u8>> {
    HuffmanDecoder::new(tree).decode(stream)
}
