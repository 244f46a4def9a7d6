//! Password length policy and generation.

pub mod error;
pub mod generator;
pub mod options;

pub use error::PasswordError;
pub use generator::PasswordPolicy;
pub use options::{CharacterClass, PasswordOptions};
