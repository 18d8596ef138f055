//! Error types for construction and generation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A generation call failed. No partial password accompanies any variant.
#[derive(Debug, Error)]
pub enum Error {
    #[error("length must be greater than 0")]
    InvalidLength,

    #[error("no character categories selected")]
    NoCategoriesSelected,

    #[error("error selecting character")]
    Entropy(#[from] EntropyError),
}

/// The entropy source could not produce a draw.
#[derive(Debug, Error)]
pub enum EntropyError {
    #[error("entropy stream failed")]
    Io(#[from] io::Error),

    #[error("os entropy unavailable")]
    Os(#[source] getrandom::Error),

    /// Asked for an index in `[0, 0)`.
    #[error("cannot draw from an empty range")]
    EmptyRange,
}

/// A generator option could not be applied.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("error applying option: cannot open entropy source {}", path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error applying option: entropy source {} is not a file", .0.display())]
    NotAFile(PathBuf),
}

impl Error {
    /// True for errors the caller can fix by changing the request.
    pub fn is_request_error(&self) -> bool {
        matches!(self, Error::InvalidLength | Error::NoCategoriesSelected)
    }
}

/// Render an error and its `source()` chain on one line.
pub fn report(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut cause = err.source();
    while let Some(e) = cause {
        out.push_str(": ");
        out.push_str(&e.to_string());
        cause = e.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eof() -> io::Error {
        io::ErrorKind::UnexpectedEof.into()
    }

    #[test]
    fn entropy_cause_is_a_source_not_display() {
        let err = Error::from(EntropyError::Io(eof()));
        assert_eq!(err.to_string(), "error selecting character");
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(
            report(&err),
            format!("error selecting character: entropy stream failed: {}", eof())
        );
    }

    #[test]
    fn os_error_is_chained() {
        let err = EntropyError::Os(getrandom::Error::UNSUPPORTED);
        assert_eq!(err.to_string(), "os entropy unavailable");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn config_error_keeps_path_in_display() {
        let err = ConfigError::Source {
            path: "/missing".into(),
            source: io::ErrorKind::NotFound.into(),
        };
        assert_eq!(
            err.to_string(),
            "error applying option: cannot open entropy source /missing"
        );
        assert!(
            report(&err).starts_with("error applying option: cannot open entropy source /missing: ")
        );
    }

    #[test]
    fn request_errors() {
        assert!(Error::InvalidLength.is_request_error());
        assert!(Error::NoCategoriesSelected.is_request_error());
        assert!(!Error::from(EntropyError::EmptyRange).is_request_error());
    }
}
