use log::debug;

use super::encoded::Encoded;
use crate::bits::BitString;
use crate::error::{Error, Result};
use crate::huffman::{frequencies, CodeTable, HuffmanDecoder, HuffmanEncoder, HuffmanTree};
use crate::{BatchEncoder, CodecConfig};

/// Single-threaded pipeline: count, build, derive codes, encode
pub struct HuffmanCodec {
    config: CodecConfig,
}

impl HuffmanCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Run the whole pipeline on `input`
    ///
    /// Empty input has no valid tree, so it short-circuits to an empty result
    /// instead of reaching the tree builder.
    pub fn compress(&self, input: &[u8]) -> Result<Encoded> {
        if input.is_empty() {
            return Ok(Encoded::new(None, CodeTable::default(), BitString::new(), 0));
        }

        // Phase 1: frequencies and tree
        let freq = frequencies(input);
        let tree = HuffmanTree::build(&freq)?;

        // Phase 2: codes and stream
        let table = CodeTable::from_tree(&tree);
        let stream = HuffmanEncoder::new(&table).encode(input)?;

        if self.config.verify {
            let decoded = HuffmanDecoder::new(&tree).decode(&stream)?;
            check_roundtrip(input, &decoded)?;
        }

        debug!(
            "encoded {} symbols ({} distinct) into {} bits",
            input.len(),
            table.len(),
            stream.len()
        );

        Ok(Encoded::new(Some(tree), table, stream, input.len() as u64))
    }
}

impl BatchEncoder for HuffmanCodec {
    fn compress_batch<I: AsRef<[u8]> + Sync>(
        &self,
        inputs: &[I],
    ) -> Result<Vec<Result<Encoded>>> {
        Ok(inputs.iter().map(|input| self.compress(input.as_ref())).collect())
    }
}

/// Fail with the first differing position, if any
fn check_roundtrip(input: &[u8], decoded: &[u8]) -> Result<()> {
    if input == decoded {
        return Ok(());
    }
    let position = input
        .iter()
        .zip(decoded)
        .position(|(a, b)| a != b)
        .unwrap_or_else(|| input.len().min(decoded.len()));
    Err(Error::RoundTripMismatch { position })
}
