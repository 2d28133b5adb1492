//! Owned sequence of binary digits.
//!
//! Used both for individual codes (root-to-leaf paths) and for whole encoded
//! streams. Renders as a string of `'0'`/`'1'` characters.

use std::fmt;
use std::str::FromStr;

use super::{BitReader, BitWriter};
use crate::error::{Error, Result};

/// A sequence of binary digits, `false` = 0, `true` = 1
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { bits: Vec::with_capacity(capacity) }
    }

    #[inline]
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<bool> {
        self.bits.pop()
    }

    /// Append every digit of `other`
    pub fn extend_from(&mut self, other: &BitString) {
        self.bits.extend_from_slice(&other.bits);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// True if `prefix` is a (not necessarily proper) prefix of this string
    pub fn starts_with(&self, prefix: &BitString) -> bool {
        self.bits.starts_with(&prefix.bits)
    }

    /// Shorten to the first `len` digits
    pub fn truncate(&mut self, len: usize) {
        self.bits.truncate(len);
    }

    /// Pack the digits MSB-first into bytes, zero-padding the last byte
    ///
    /// The bit length is not recorded; keep `len()` alongside the bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = BitWriter::with_capacity((self.bits.len() + 7) / 8);
        for &bit in &self.bits {
            writer.write_bit(bit);
        }
        writer.finish()
    }

    /// Unpack the first `bit_len` digits from MSB-first packed bytes
    pub fn from_bytes(bytes: &[u8], bit_len: usize) -> Result<Self> {
        let mut reader = BitReader::new(bytes);
        let mut bits = Vec::with_capacity(bit_len);
        for _ in 0..bit_len {
            bits.push(reader.read_bit()?);
        }
        Ok(Self { bits })
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for BitString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .enumerate()
            .map(|(position, digit)| match digit {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(Error::InvalidDigit { digit, position }),
            })
            .collect()
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self { bits: iter.into_iter().collect() }
    }
}

impl Extend<bool> for BitString {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        self.bits.extend(iter);
    }
}
