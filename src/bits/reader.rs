use crate::error::{Error, Result};
use std::io::Read;

/// Bit-level reader for packed Huffman streams
///
/// Bits are read MSB-first within each byte, matching `BitWriter`, so the
/// first bit of a code is the root-most branch of its path.
pub struct BitReader<R: Read> {
    reader: R,
    /// Buffer holding up to 64 bits; the oldest unread bit is the highest valid bit
    buffer: u64,
    /// Number of valid bits in buffer (0-64)
    bits_available: u8,
    /// Total bits handed out to the caller
    bits_consumed: u64,
}

impl<R: Read> BitReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, buffer: 0, bits_available: 0, bits_consumed: 0 }
    }

    /// Ensure at least `n` bits are available in buffer
    ///
    /// Refills in bulk (up to 8 bytes per read) and falls back to single bytes
    /// for EOF detection.
    fn fill_buffer(&mut self, n: u8) -> Result<()> {
        debug_assert!(n <= 57, "Cannot request more than 57 bits at once");

        if self.bits_available >= n {
            return Ok(());
        }

        if self.bits_available <= 56 {
            let bytes_to_read = ((64 - self.bits_available) / 8) as usize;
            let mut bulk_buf = [0u8; 8];

            match self.reader.read(&mut bulk_buf[..bytes_to_read]) {
                Ok(0) => {}
                Ok(bytes_read) => {
                    for &byte in &bulk_buf[..bytes_read] {
                        self.push_byte(byte);
                    }
                    if self.bits_available >= n {
                        return Ok(());
                    }
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(e) => return Err(Error::Io(e)),
            }
        }

        while self.bits_available < n {
            let mut byte = [0u8; 1];
            match self.reader.read_exact(&mut byte) {
                Ok(()) => self.push_byte(byte[0]),
                Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                    return Err(Error::UnexpectedEof);
                }
                Err(e) => return Err(Error::Io(e)),
            }
        }
        Ok(())
    }

    #[inline]
    fn push_byte(&mut self, byte: u8) {
        debug_assert!(self.bits_available <= 56);
        self.buffer = (self.buffer << 8) | byte as u64;
        self.bits_available += 8;
    }

    /// Read `n` bits (1-32), first bit read becomes the most significant
    pub fn read_bits(&mut self, n: u8) -> Result<u32> {
        debug_assert!(n <= 32, "Cannot read more than 32 bits at once");

        if n == 0 {
            return Ok(0);
        }

        self.fill_buffer(n)?;

        let remaining = self.bits_available - n;
        let result = ((self.buffer >> remaining) & low_mask(n)) as u32;
        self.buffer &= low_mask(remaining);
        self.bits_available = remaining;
        self.bits_consumed += n as u64;

        Ok(result)
    }

    /// Read a single bit
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        Ok(self.read_bits(1)? != 0)
    }

    /// Total bits read so far
    pub fn bits_consumed(&self) -> u64 {
        self.bits_consumed
    }

    /// Get the inner reader (consumes self)
    pub fn into_inner(self) -> R {
        self.reader
    }
}

#[inline]
fn low_mask(n: u8) -> u64 {
    if n >= 64 {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}
