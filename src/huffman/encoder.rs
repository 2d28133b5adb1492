use super::codes::CodeTable;
use crate::bits::{BitString, BitWriter};
use crate::error::{Error, Result};

/// Encodes symbol sequences with a fixed code table
pub struct HuffmanEncoder<'a> {
    table: &'a CodeTable,
}

impl<'a> HuffmanEncoder<'a> {
    pub fn new(table: &'a CodeTable) -> Self {
        Self { table }
    }

    /// Concatenate the code of every input symbol, in input order
    pub fn encode(&self, input: &[u8]) -> Result<BitString> {
        let mut output = BitString::with_capacity(input.len() * self.table.max_len().max(1));
        for (position, &symbol) in input.iter().enumerate() {
            output.extend_from(self.code_for(symbol, position)?);
        }
        Ok(output)
    }

    /// Encode straight into MSB-first packed bytes
    ///
    /// Returns the bytes and the number of meaningful bits; the last byte is
    /// zero-padded.
    pub fn encode_packed(&self, input: &[u8]) -> Result<(Vec<u8>, usize)> {
        let mut writer = BitWriter::with_capacity(input.len());
        for (position, &symbol) in input.iter().enumerate() {
            for bit in self.code_for(symbol, position)?.iter() {
                writer.write_bit(bit);
            }
        }
        let bit_len = writer.bit_len();
        Ok((writer.finish(), bit_len))
    }

    #[inline]
    fn code_for(&self, symbol: u8, position: usize) -> Result<&'a BitString> {
        self.table.get(symbol).ok_or(Error::MissingCode { symbol, position })
    }
}

/// Encode `input` with `table`
pub fn encode(input: &[u8], table: &CodeTable) -> Result<BitString> {
    HuffmanEncoder::new(table).encode(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::codes::code_table;
    use crate::huffman::frequency::frequencies;
    use crate::huffman::tree::build_tree;

    fn table_for(input: &[u8]) -> CodeTable {
        code_table(&build_tree(&frequencies(input)).unwrap())
    }

    #[test]
    fn test_encode_concatenates_codes() {
        let input = b"ABRACADABRA";
        let table = table_for(input);
        let encoded = encode(input, &table).unwrap();

        let expected: String =
            input.iter().map(|&s| table.get(s).unwrap().to_string()).collect();
        assert_eq!(encoded.to_string(), expected);
        assert_eq!(encoded.len(), 23);
    }

    #[test]
    fn test_encode_single_symbol() {
        let table = table_for(b"AAAA");
        assert_eq!(encode(b"AAAA", &table).unwrap().to_string(), "0000");
    }

    #[test]
    fn test_encode_empty_input() {
        let table = table_for(b"ab");
        assert!(encode(b"", &table).unwrap().is_empty());
    }

    #[test]
    fn test_missing_code() {
        let table = table_for(b"aabb");
        let err = encode(b"abc", &table).unwrap_err();
        assert!(matches!(err, Error::MissingCode { symbol: b'c', position: 2 }));
    }

    #[test]
    fn test_encode_packed_matches_bit_string() {
        let input = b"mississippi river";
        let table = table_for(input);
        let encoder = HuffmanEncoder::new(&table);

        let bits = encoder.encode(input).unwrap();
        let (packed, bit_len) = encoder.encode_packed(input).unwrap();
        assert_eq!(bit_len, bits.len());
        assert_eq!(packed, bits.to_bytes());
    }
}
