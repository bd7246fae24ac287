use rand::{thread_rng, Rng};
use thiserror::Error;

/// Symbols drawn from when generating paste names.
pub const DEFAULT_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of generated paste names.
pub const DEFAULT_NAME_LENGTH: usize = 6;

const MAX_NAME_LENGTH: usize = 64;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NamesError {
    #[error("name alphabet is empty")]
    EmptyAlphabet,
    #[error("name length must be between 1 and 64")]
    BadLength,
    #[error("name alphabet contains unusable symbol {0:?}")]
    BadSymbol(char),
}

#[derive(Debug, Clone)]
pub struct NameGenerator {
    alphabet: Vec<char>,
    length: usize,
}

impl NameGenerator {
    pub fn new(alphabet: &str, length: usize) -> Result<Self, NamesError> {
        let alphabet: Vec<char> = alphabet.chars().collect();

        if alphabet.is_empty() {
            return Err(NamesError::EmptyAlphabet);
        }
        if length == 0 || length > MAX_NAME_LENGTH {
            return Err(NamesError::BadLength);
        }
        // every generated name has to be a usable file name
        if let Some(&c) = alphabet.iter().find(|c| !is_name_char(**c)) {
            return Err(NamesError::BadSymbol(c));
        }

        Ok(NameGenerator { alphabet, length })
    }

    /// Generate a random name. Uniqueness is only checked when the paste is stored.
    pub fn generate_name(&self) -> String {
        let mut rng = thread_rng();
        (0..self.length)
            .map(|_| self.alphabet[rng.gen_range(0..self.alphabet.len())])
            .collect()
    }
}

impl Default for NameGenerator {
    fn default() -> Self {
        NameGenerator {
            alphabet: DEFAULT_ALPHABET.chars().collect(),
            length: DEFAULT_NAME_LENGTH,
        }
    }
}

/// Whether `name` can be used as a file name directly under the paste directory.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.len() <= MAX_NAME_LENGTH && name.chars().all(is_name_char)
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_names_use_default_alphabet() {
        let generator = NameGenerator::default();
        for _ in 0..1000 {
            let name = generator.generate_name();
            assert_eq!(name.len(), 6);
            assert!(
                name.chars().all(|c| DEFAULT_ALPHABET.contains(c)),
                "unexpected symbol in {name}"
            );
            assert!(is_valid_name(&name));
        }
    }

    #[test]
    fn generator_covers_digits_and_letters() {
        let generator = NameGenerator::default();
        let all: String = (0..500).map(|_| generator.generate_name()).collect();
        assert!(all.chars().any(|c| c.is_ascii_digit()));
        assert!(all.chars().any(|c| c.is_ascii_uppercase()));
        assert!(all.contains('0'));
    }

    #[test]
    fn custom_generator() {
        let generator = NameGenerator::new("ab", 10).unwrap();
        let name = generator.generate_name();
        assert_eq!(name.len(), 10);
        assert!(name.chars().all(|c| c == 'a' || c == 'b'));
    }

    #[test]
    fn rejects_bad_configuration() {
        assert_eq!(
            NameGenerator::new("", 6).unwrap_err(),
            NamesError::EmptyAlphabet
        );
        assert_eq!(NameGenerator::new("AB", 0).unwrap_err(), NamesError::BadLength);
        assert_eq!(
            NameGenerator::new("AB/", 6).unwrap_err(),
            NamesError::BadSymbol('/')
        );
    }

    #[test]
    fn name_validation() {
        assert!(is_valid_name("ABC123"));
        assert!(is_valid_name("imported-paste_1"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("../etc"));
        assert!(!is_valid_name("a/b"));
        assert!(!is_valid_name(".hidden"));
        assert!(!is_valid_name(&"A".repeat(65)));
    }
}
