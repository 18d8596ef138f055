//! Character classes and pool building.

use super::request::GenerationRequest;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_{|}~"##;

/// One of the four fixed character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharClass {
    /// Pool order: uppercase, lowercase, digits, symbols.
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.chars().contains(c)
    }

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Uppercase => "uppercase",
            CharClass::Lowercase => "lowercase",
            CharClass::Digits => "digits",
            CharClass::Symbols => "symbols",
        }
    }
}

/// Enabled classes in pool order, skipping any that are empty.
pub fn enabled(request: &GenerationRequest) -> Vec<&'static [u8]> {
    CharClass::ALL
        .into_iter()
        .filter(|&class| request.includes(class))
        .map(|class| class.chars().as_bytes())
        .filter(|chars| !chars.is_empty())
        .collect()
}

/// Concatenate every enabled class into one alphabet.
pub fn build(request: &GenerationRequest) -> Vec<u8> {
    enabled(request).concat()
}
