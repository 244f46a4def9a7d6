//! Password generator error types.

use cambio_shared::AppError;
use thiserror::Error;

/// Errors raised by the password generator form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    /// Length field was blank.
    #[error("Password length is required")]
    LengthRequired,

    /// Length field is not a whole number.
    #[error("Password length must be a whole number")]
    InvalidLength,

    /// Length is below the policy minimum.
    #[error("Password must be at least {min} characters")]
    TooShort {
        /// Policy minimum.
        min: usize,
    },

    /// Length is above the policy maximum.
    #[error("Password cannot exceed {max} characters")]
    TooLong {
        /// Policy maximum.
        max: usize,
    },

    /// No character class is enabled.
    #[error("Please select at least one character type")]
    NoCharacterClass,
}

impl From<PasswordError> for AppError {
    fn from(err: PasswordError) -> Self {
        Self::Validation(err.to_string())
    }
}
