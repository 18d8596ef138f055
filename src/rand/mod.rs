//! Entropy sources and unbiased index selection.

mod os;
mod urand;

use crate::error::EntropyError;

pub use os::OsEntropy;
pub use urand::{ReaderEntropy, URANDOM_PATH, urandom};

// =============================================================================
// Source
// =============================================================================

/// A supplier of uniformly random bytes.
///
/// The default is [`OsEntropy`]. Tests inject a [`ReaderEntropy`] over a fixed
/// byte string to get reproducible output.
pub trait EntropySource {
    /// Fill `dest` completely or fail. A short fill is an error.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }
}

impl<S: EntropySource + ?Sized> EntropySource for Box<S> {
    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }
}

// =============================================================================
// Index selection
// =============================================================================

/// Draw a uniformly random index in `[0, n)`.
///
/// Masked rejection sampling: read just enough big-endian bytes to cover the
/// bit length of `n - 1`, clear the bits above it, and retry until the value
/// lands below `n`. A range of one consumes no entropy.
pub fn uniform_index<S: EntropySource + ?Sized>(
    source: &mut S,
    n: usize,
) -> Result<usize, EntropyError> {
    if n == 0 {
        return Err(EntropyError::EmptyRange);
    }

    let bits = usize::BITS - (n - 1).leading_zeros();
    if bits == 0 {
        return Ok(0);
    }

    let len = bits.div_ceil(8) as usize;
    let top_bits = match bits % 8 {
        0 => 8,
        b => b,
    };
    let mask = ((1u16 << top_bits) - 1) as u8;

    let mut buf = [0u8; size_of::<usize>()];
    let buf = &mut buf[..len];
    loop {
        source.fill_bytes(buf)?;
        buf[0] &= mask;

        let value = buf.iter().fold(0usize, |acc, &b| (acc << 8) | b as usize);
        if value < n {
            return Ok(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hands out a fixed byte script and counts how much was read.
    struct Script {
        bytes: Vec<u8>,
        pos: usize,
    }

    impl Script {
        fn new(bytes: &[u8]) -> Self {
            Script {
                bytes: bytes.to_vec(),
                pos: 0,
            }
        }
    }

    impl EntropySource for Script {
        fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
            let end = self.pos + dest.len();
            if end > self.bytes.len() {
                return Err(EntropyError::Io(std::io::ErrorKind::UnexpectedEof.into()));
            }
            dest.copy_from_slice(&self.bytes[self.pos..end]);
            self.pos = end;
            Ok(())
        }
    }

    #[test]
    fn empty_range_is_rejected() {
        let mut src = Script::new(&[0]);
        assert!(matches!(
            uniform_index(&mut src, 0),
            Err(EntropyError::EmptyRange)
        ));
        assert_eq!(src.pos, 0);
    }

    #[test]
    fn single_value_range_reads_nothing() {
        let mut src = Script::new(&[]);
        assert_eq!(uniform_index(&mut src, 1).unwrap(), 0);
        assert_eq!(src.pos, 0);
    }

    #[test]
    fn masks_to_bit_length() {
        // n = 26 needs 5 bits: 0x55 & 0x1f = 21
        let mut src = Script::new(&[0x55]);
        assert_eq!(uniform_index(&mut src, 26).unwrap(), 21);
    }

    #[test]
    fn rejects_out_of_range_values() {
        // 0x7a & 0x1f = 26 is out of range for n = 26, so the next byte is used
        let mut src = Script::new(&[0x7a, 0x4a]);
        assert_eq!(uniform_index(&mut src, 26).unwrap(), 10);
        assert_eq!(src.pos, 2);
    }

    #[test]
    fn full_byte_range_uses_every_bit() {
        let mut src = Script::new(&[0xff]);
        assert_eq!(uniform_index(&mut src, 256).unwrap(), 255);
    }

    #[test]
    fn multi_byte_values_are_big_endian() {
        // n = 1000 needs 10 bits over two bytes: top byte masked to 0b11
        let mut src = Script::new(&[0xfe, 0x0a]);
        assert_eq!(uniform_index(&mut src, 1000).unwrap(), 0x20a);
        assert_eq!(src.pos, 2);
    }

    #[test]
    fn exhausted_source_propagates() {
        let mut src = Script::new(&[0x7a]);
        assert!(matches!(
            uniform_index(&mut src, 26),
            Err(EntropyError::Io(_))
        ));
    }

    #[test]
    fn os_draws_stay_in_range() {
        let mut src = OsEntropy;
        for n in [2, 10, 26, 31, 94, 300] {
            for _ in 0..200 {
                assert!(uniform_index(&mut src, n).unwrap() < n);
            }
        }
    }
}
