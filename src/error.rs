use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Tree construction errors
    #[error("Empty alphabet: cannot build a Huffman tree from zero symbols")]
    EmptyAlphabet,

    // Encoding errors
    #[error("No code for symbol 0x{symbol:02x} at input position {position}")]
    MissingCode { symbol: u8, position: usize },

    // Decoding errors
    #[error("Stream ended mid-code: {dangling_bits} trailing bit(s) after {bit_len} bits")]
    TruncatedStream { bit_len: usize, dangling_bits: usize },

    #[error("Invalid stream for this tree: no child for bit at position {position}")]
    InvalidStream { position: usize },

    #[error("Invalid binary digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },

    #[error("Unexpected end of input")]
    UnexpectedEof,

    // Verification errors
    #[error("Round-trip mismatch: decoded output differs from input at position {position}")]
    RoundTripMismatch { position: usize },

    // Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
