//! Core logic for Cambio.
//!
//! This crate contains pure logic with ZERO web dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `currency` - Currency table, conversion, amount input rules, converter session
//! - `password` - Password length policy and generation
//! - `dice` - Six-sided die rolls
//! - `palette` - Random hex colors for the color changer

pub mod currency;
pub mod dice;
pub mod palette;
pub mod password;
