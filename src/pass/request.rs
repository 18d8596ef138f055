//! The input to one generation call.

use super::charset::CharClass;

/// Length plus one include flag per character class.
///
/// [`GenerationRequest::new`] starts with every class excluded; callers opt
/// in explicitly. [`GenerationRequest::all`] is the explicit "everything"
/// request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl GenerationRequest {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            include_uppercase: false,
            include_lowercase: false,
            include_digits: false,
            include_symbols: false,
        }
    }

    pub fn all(length: usize) -> Self {
        Self {
            length,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_symbols: true,
        }
    }

    /// Every class enabled except the ones listed.
    pub fn from_exclusions(length: usize, exclusions: &[CharClass]) -> Self {
        exclusions
            .iter()
            .fold(Self::all(length), |request, &class| request.with(class, false))
    }

    pub fn uppercase(self, include: bool) -> Self {
        Self {
            include_uppercase: include,
            ..self
        }
    }

    pub fn lowercase(self, include: bool) -> Self {
        Self {
            include_lowercase: include,
            ..self
        }
    }

    pub fn digits(self, include: bool) -> Self {
        Self {
            include_digits: include,
            ..self
        }
    }

    pub fn symbols(self, include: bool) -> Self {
        Self {
            include_symbols: include,
            ..self
        }
    }

    pub fn with(self, class: CharClass, include: bool) -> Self {
        match class {
            CharClass::Uppercase => self.uppercase(include),
            CharClass::Lowercase => self.lowercase(include),
            CharClass::Digits => self.digits(include),
            CharClass::Symbols => self.symbols(include),
        }
    }

    pub fn includes(&self, class: CharClass) -> bool {
        match class {
            CharClass::Uppercase => self.include_uppercase,
            CharClass::Lowercase => self.include_lowercase,
            CharClass::Digits => self.include_digits,
            CharClass::Symbols => self.include_symbols,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_excludes_everything() {
        let request = GenerationRequest::new(12);
        assert_eq!(request.length, 12);
        assert!(CharClass::ALL.iter().all(|&c| !request.includes(c)));
    }

    #[test]
    fn exclusions_clear_named_classes() {
        let request =
            GenerationRequest::from_exclusions(8, &[CharClass::Symbols, CharClass::Digits]);
        assert!(request.include_uppercase);
        assert!(request.include_lowercase);
        assert!(!request.include_digits);
        assert!(!request.include_symbols);
    }

    #[test]
    fn repeated_exclusion_is_idempotent() {
        let once = GenerationRequest::from_exclusions(8, &[CharClass::Uppercase]);
        let twice =
            GenerationRequest::from_exclusions(8, &[CharClass::Uppercase, CharClass::Uppercase]);
        assert_eq!(once, twice);
    }
}
