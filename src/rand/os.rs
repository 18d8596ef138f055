//! Operating system entropy.

use super::EntropySource;
use crate::error::EntropyError;

/// The operating system's CSPRNG (`getrandom(2)`, `BCryptGenRandom`, ...).
///
/// Stateless, so one value can be shared freely between threads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        getrandom::fill(dest).map_err(EntropyError::Os)
    }
}
