//! Generation settings: defaults plus command-line overrides.

use std::path::PathBuf;

use passgen::{GenerationRequest, Options, Policy, SourceKind};

use crate::cli::CliFlags;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub policy: Policy,
    pub source: SourceKind,
    pub to_clipboard: bool,
}

impl Settings {
    /// Defaults overridden by whatever the flags set.
    pub fn from_flags(flags: &CliFlags) -> Self {
        let mut settings = Settings::default();

        if let Some(len) = flags.length {
            settings.pass_length = len;
        }
        if let Some(num) = flags.number {
            settings.number_of_passwords = num;
        }

        settings.uppercase &= !flags.no_upper;
        settings.lowercase &= !flags.no_lower;
        settings.digits &= !flags.no_digits;
        settings.symbols &= !flags.no_symbols;

        if flags.balanced {
            settings.policy = Policy::Balanced;
        }
        if flags.urandom {
            settings.source = SourceKind::Urandom;
        }
        if let Some(ref path) = flags.entropy_file {
            settings.source = SourceKind::File(PathBuf::from(path));
        }

        settings.to_clipboard = flags.clipboard;
        settings
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.pass_length)
            .uppercase(self.uppercase)
            .lowercase(self.lowercase)
            .digits(self.digits)
            .symbols(self.symbols)
    }

    pub fn options(&self) -> Options {
        Options {
            source: self.source.clone(),
            policy: self.policy,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 16,
            number_of_passwords: 1,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            policy: Policy::Flat,
            source: SourceKind::Os,
            to_clipboard: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_every_class() {
        let settings = Settings::from_flags(&CliFlags::default());
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.request(), GenerationRequest::all(16));
        assert_eq!(settings.options(), Options::default());
    }

    #[test]
    fn flags_override_defaults() {
        let flags = CliFlags {
            length: Some(32),
            number: Some(5),
            no_upper: true,
            no_symbols: true,
            balanced: true,
            entropy_file: Some("/dev/urandom".into()),
            ..Default::default()
        };
        let settings = Settings::from_flags(&flags);

        assert_eq!(
            settings.request(),
            GenerationRequest::new(32).lowercase(true).digits(true)
        );
        assert_eq!(settings.number_of_passwords, 5);
        assert_eq!(
            settings.options(),
            Options {
                source: SourceKind::File("/dev/urandom".into()),
                policy: Policy::Balanced,
            }
        );
    }

    #[test]
    fn urandom_flag_selects_device() {
        let flags = CliFlags {
            urandom: true,
            ..Default::default()
        };
        assert_eq!(Settings::from_flags(&flags).source, SourceKind::Urandom);
    }
}
