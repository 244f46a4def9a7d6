//! Shared errors and configuration for Cambio.
//!
//! This crate provides common types used across all other crates:
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;

pub use config::{AppConfig, ConverterConfig, CurrencyConfig, PasswordConfig, ServerConfig};
pub use error::{AppError, AppResult};
