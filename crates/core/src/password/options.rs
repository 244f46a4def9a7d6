//! Character classes and the options form.

use serde::{Deserialize, Serialize};

/// A group of characters that can be toggled on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    /// `a-z`
    LowerCase,
    /// `A-Z`
    UpperCase,
    /// `0-9`
    Numbers,
    /// Punctuation.
    Symbols,
}

impl CharacterClass {
    /// All classes, in the order their characters are concatenated.
    pub const ALL: [Self; 4] = [
        Self::LowerCase,
        Self::UpperCase,
        Self::Numbers,
        Self::Symbols,
    ];

    /// Characters belonging to this class.
    #[must_use]
    pub const fn characters(self) -> &'static str {
        match self {
            Self::LowerCase => "abcdefghijklmnopqrstuvwxyz",
            Self::UpperCase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            Self::Numbers => "0123456789",
            Self::Symbols => "!@#$%^&*()_+[]{}|;:,.<>?",
        }
    }
}

/// Which character classes are enabled. All off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct PasswordOptions {
    /// Include `a-z`.
    #[serde(default)]
    pub lower_case: bool,
    /// Include `A-Z`.
    #[serde(default)]
    pub upper_case: bool,
    /// Include `0-9`.
    #[serde(default)]
    pub numbers: bool,
    /// Include punctuation.
    #[serde(default)]
    pub symbols: bool,
}

impl PasswordOptions {
    /// Every class enabled.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            lower_case: true,
            upper_case: true,
            numbers: true,
            symbols: true,
        }
    }

    /// Whether `class` is enabled.
    #[must_use]
    pub const fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::LowerCase => self.lower_case,
            CharacterClass::UpperCase => self.upper_case,
            CharacterClass::Numbers => self.numbers,
            CharacterClass::Symbols => self.symbols,
        }
    }

    /// Flips one class.
    pub fn toggle(&mut self, class: CharacterClass) {
        let flag = match class {
            CharacterClass::LowerCase => &mut self.lower_case,
            CharacterClass::UpperCase => &mut self.upper_case,
            CharacterClass::Numbers => &mut self.numbers,
            CharacterClass::Symbols => &mut self.symbols,
        };
        *flag = !*flag;
    }

    /// Turns every class off.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Enabled classes' characters, concatenated in `CharacterClass::ALL` order.
    #[must_use]
    pub fn alphabet(&self) -> String {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.is_enabled(*class))
            .map(CharacterClass::characters)
            .collect()
    }
}
