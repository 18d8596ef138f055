//! Password generation.

use std::io::Read;
use std::path::PathBuf;

use zeroize::Zeroize;

use super::charset;
use super::request::GenerationRequest;
use crate::error::{ConfigError, EntropyError, Error};
use crate::rand::{EntropySource, OsEntropy, ReaderEntropy, uniform_index};

/// How a position's character is chosen from the enabled classes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// One alphabet of every enabled character, sampled uniformly. Larger
    /// classes contribute proportionally more characters.
    #[default]
    Flat,
    /// Pick an enabled class uniformly, then a character within it. Each class
    /// contributes about `1/k` of the output whatever its size.
    Balanced,
}

/// Which entropy source a runtime-configured generator reads from.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum SourceKind {
    #[default]
    Os,
    Urandom,
    File(PathBuf),
}

/// Runtime generator configuration, see [`Generator::from_options`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Options {
    pub source: SourceKind,
    pub policy: Policy,
}

pub type DynGenerator = Generator<Box<dyn EntropySource + Send>>;

/// Produces passwords from an owned entropy source.
///
/// Holds no per-call state. The policy is fixed when the generator is built;
/// [`Policy::Flat`] unless changed with [`Generator::with_policy`].
#[derive(Debug)]
pub struct Generator<S = OsEntropy> {
    source: S,
    policy: Policy,
}

impl Generator<OsEntropy> {
    pub fn new() -> Self {
        Self::with_source(OsEntropy)
    }
}

impl Default for Generator<OsEntropy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Read> Generator<ReaderEntropy<R>> {
    /// Read entropy from a byte stream. Mostly useful for reproducible tests.
    pub fn with_reader(reader: R) -> Self {
        Self::with_source(ReaderEntropy::new(reader))
    }
}

impl DynGenerator {
    /// Build a generator from runtime options. Sources are opened here, so a
    /// bad path fails now rather than on the first draw.
    pub fn from_options(options: &Options) -> Result<Self, ConfigError> {
        let source: Box<dyn EntropySource + Send> = match &options.source {
            SourceKind::Os => Box::new(OsEntropy),
            SourceKind::Urandom => Box::new(crate::rand::urandom()?),
            SourceKind::File(path) => Box::new(ReaderEntropy::open(path)?),
        };
        log::debug!(
            "generator configured: source={:?} policy={:?}",
            options.source,
            options.policy
        );
        Ok(Generator::with_source(source).with_policy(options.policy))
    }
}

impl<S: EntropySource> Generator<S> {
    pub fn with_source(source: S) -> Self {
        Generator {
            source,
            policy: Policy::Flat,
        }
    }

    pub fn with_policy(self, policy: Policy) -> Self {
        Generator { policy, ..self }
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Generate one password.
    ///
    /// Checks the length, then the pool, before touching the entropy source.
    /// Characters are emitted in draw order.
    pub fn generate(&mut self, request: &GenerationRequest) -> Result<String, Error> {
        if request.length < 1 {
            return Err(Error::InvalidLength);
        }

        let classes = charset::enabled(request);
        if classes.is_empty() {
            return Err(Error::NoCategoriesSelected);
        }

        let mut password = String::with_capacity(request.length);
        let filled = match self.policy {
            Policy::Flat => {
                let pool = charset::build(request);
                log::trace!("flat pool of {} chars", pool.len());
                self.fill_flat(&pool, request.length, &mut password)
            }
            Policy::Balanced => {
                log::trace!("balanced over {} classes", classes.len());
                self.fill_balanced(&classes, request.length, &mut password)
            }
        };

        if let Err(e) = filled {
            password.zeroize();
            return Err(e.into());
        }
        Ok(password)
    }

    /// Like [`Generator::generate`], for callers that have already validated
    /// the request.
    ///
    /// # Panics
    ///
    /// Panics on any error `generate` would return.
    pub fn generate_or_panic(&mut self, request: &GenerationRequest) -> String {
        match self.generate(request) {
            Ok(password) => password,
            Err(e) => panic!("password generation failed: {e}"),
        }
    }

    fn fill_flat(
        &mut self,
        pool: &[u8],
        length: usize,
        out: &mut String,
    ) -> Result<(), EntropyError> {
        for _ in 0..length {
            let i = uniform_index(&mut self.source, pool.len())?;
            out.push(char::from(pool[i]));
        }
        Ok(())
    }

    fn fill_balanced(
        &mut self,
        classes: &[&[u8]],
        length: usize,
        out: &mut String,
    ) -> Result<(), EntropyError> {
        for _ in 0..length {
            let class = classes[uniform_index(&mut self.source, classes.len())?];
            let i = uniform_index(&mut self.source, class.len())?;
            out.push(char::from(class[i]));
        }
        Ok(())
    }
}
