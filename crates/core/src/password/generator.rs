//! Password generation.

use cambio_shared::PasswordConfig;
use rand::Rng;

use super::error::PasswordError;
use super::options::PasswordOptions;

/// Length bounds for generated passwords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// Shortest allowed length.
    pub min_length: usize,
    /// Longest allowed length.
    pub max_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 20,
        }
    }
}

impl From<&PasswordConfig> for PasswordPolicy {
    fn from(config: &PasswordConfig) -> Self {
        Self {
            min_length: config.min_length,
            max_length: config.max_length,
        }
    }
}

impl PasswordPolicy {
    /// Parses and bounds-checks the length field.
    pub fn parse_length(&self, raw: &str) -> Result<usize, PasswordError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PasswordError::LengthRequired);
        }
        let length: usize = trimmed
            .parse()
            .map_err(|_| PasswordError::InvalidLength)?;
        self.check_length(length)?;
        Ok(length)
    }

    /// Bounds-checks a length.
    pub fn check_length(&self, length: usize) -> Result<(), PasswordError> {
        if length < self.min_length {
            return Err(PasswordError::TooShort {
                min: self.min_length,
            });
        }
        if length > self.max_length {
            return Err(PasswordError::TooLong {
                max: self.max_length,
            });
        }
        Ok(())
    }

    /// Generates a password of `length` characters, each sampled uniformly
    /// from the enabled classes.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        length: usize,
        options: &PasswordOptions,
        rng: &mut R,
    ) -> Result<String, PasswordError> {
        self.check_length(length)?;
        let alphabet: Vec<char> = options.alphabet().chars().collect();
        if alphabet.is_empty() {
            return Err(PasswordError::NoCharacterClass);
        }
        Ok((0..length)
            .map(|_| alphabet[rng.random_range(0..alphabet.len())])
            .collect())
    }
}
