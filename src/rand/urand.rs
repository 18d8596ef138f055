//! Byte-stream entropy: `/dev/urandom` or any replayed reader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::EntropySource;
use crate::error::{ConfigError, EntropyError};

pub const URANDOM_PATH: &str = "/dev/urandom";

/// Entropy read from a byte stream.
///
/// Each draw reads exactly the bytes it needs. Running out of input is an
/// [`EntropyError::Io`], never a silent short read.
#[derive(Debug)]
pub struct ReaderEntropy<R> {
    reader: R,
}

impl<R: Read> ReaderEntropy<R> {
    pub fn new(reader: R) -> Self {
        ReaderEntropy { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl ReaderEntropy<File> {
    /// Open a file or device as an entropy stream.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::Source {
            path: path.to_path_buf(),
            source,
        })?;

        let is_dir = file
            .metadata()
            .map_err(|source| ConfigError::Source {
                path: path.to_path_buf(),
                source,
            })?
            .is_dir();
        if is_dir {
            return Err(ConfigError::NotAFile(path.to_path_buf()));
        }

        log::debug!("entropy stream opened: {}", path.display());
        Ok(ReaderEntropy::new(file))
    }
}

impl<R: Read> EntropySource for ReaderEntropy<R> {
    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.reader.read_exact(dest)?;
        Ok(())
    }
}

/// Open `/dev/urandom` directly.
pub fn urandom() -> Result<ReaderEntropy<File>, ConfigError> {
    ReaderEntropy::open(URANDOM_PATH)
}
