//! textstem core — shared error type and stemming configuration.

pub mod config;
pub mod error;

pub use config::{Language, StemConfig, LANGUAGE_ENV};
pub use error::{Error, Result};
