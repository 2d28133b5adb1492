pub mod bits;
pub mod codec;
pub mod error;
pub mod huffman;

pub use bits::BitString;
pub use codec::{encoded::Encoded, parallel::ParallelCodec, single::HuffmanCodec};
pub use error::{Error, Result};
pub use huffman::{
    build_tree, code_table, decode, encode, frequencies, CodeTable, FrequencyTable, HuffmanDecoder,
    HuffmanEncoder, HuffmanTree, Node,
};

/// Configuration for the coding pipeline
#[derive(Clone, Debug, Default)]
pub struct CodecConfig {
    /// Decode every stream after encoding and fail on any difference
    pub verify: bool,
    /// Number of threads for batch coding (0 = auto, 1 = single-threaded)
    pub num_threads: usize,
}

/// Size figures for one encoded input
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodingStats {
    /// Symbols in the input
    pub input_symbols: u64,
    /// Distinct symbols (code table entries)
    pub distinct_symbols: usize,
    /// Length of the encoded stream in bits
    pub encoded_bits: u64,
    /// Bits a fixed-width code over the same alphabet would need
    pub fixed_width_bits: u64,
    /// Encoded stream length once packed into bytes
    pub packed_bytes: u64,
}

impl CodingStats {
    /// Bits per symbol of the smallest fixed-width code for `distinct` symbols
    pub fn fixed_width(distinct: usize) -> u32 {
        match distinct {
            0 => 0,
            1 => 1,
            n => usize::BITS - (n - 1).leading_zeros(),
        }
    }

    /// Average encoded bits per input symbol
    pub fn bits_per_symbol(&self) -> f64 {
        if self.input_symbols == 0 {
            0.0
        } else {
            self.encoded_bits as f64 / self.input_symbols as f64
        }
    }
}

/// Trait for coding many independent inputs
pub trait BatchEncoder {
    /// Run the full pipeline on every input, returning results in input order
    ///
    /// The outer error reports a failure of the batch machinery itself; each
    /// inner result belongs to one input.
    fn compress_batch<I: AsRef<[u8]> + Sync>(
        &self,
        inputs: &[I],
    ) -> Result<Vec<Result<Encoded>>>;
}
