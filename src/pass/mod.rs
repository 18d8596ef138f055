//! Character classes, requests, and password generation.

pub mod charset;
mod generate;
mod request;

pub use charset::CharClass;
pub use generate::{DynGenerator, Generator, Options, Policy, SourceKind};
pub use request::GenerationRequest;
