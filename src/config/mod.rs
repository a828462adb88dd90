//! Configuration module for acme-extract
//!
//! Settings are assembled once at process entry and passed by reference.

pub mod settings;

pub use settings::Settings;
