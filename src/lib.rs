//! Random passwords from configurable character classes.
//!
//! A [`Generator`] owns an [`EntropySource`] and turns a
//! [`GenerationRequest`] into a password. Every index is drawn with
//! rejection sampling, so no character is favoured by modulo bias.
//!
//! The default policy is [`Policy::Flat`]: all enabled characters form one
//! alphabet and each position is sampled uniformly from it. A generator built
//! with [`Policy::Balanced`] instead picks a class first, then a character in
//! that class.
//!
//! ```
//! use passgen::{GenerationRequest, Generator};
//!
//! let request = GenerationRequest::new(20).uppercase(true).digits(true);
//! let password = Generator::new().generate(&request)?;
//! assert_eq!(password.len(), 20);
//! # Ok::<(), passgen::Error>(())
//! ```

pub mod error;
pub mod pass;
pub mod rand;

pub use error::{ConfigError, EntropyError, Error};
pub use pass::{CharClass, DynGenerator, GenerationRequest, Generator, Options, Policy, SourceKind};
pub use rand::{EntropySource, OsEntropy, ReaderEntropy};

/// Generate one password with a fresh OS-backed generator.
pub fn generate(request: &GenerationRequest) -> Result<String, Error> {
    Generator::new().generate(request)
}
