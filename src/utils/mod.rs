//! Utility modules for acme-extract
//!
//! This module contains the error types shared by the extractor.

pub mod error;

pub use error::{ConfigError, DecodeError, ExtractError, Result};
