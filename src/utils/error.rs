//! Custom error types for acme-extract
//!
//! This module defines the failure modes of an extraction run using
//! `thiserror`. "No domain matched" is not an error and has no variant here.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for an extraction run
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Failed to render report: {0}")]
    Render(#[from] serde_json::Error),

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Settings and store-shape errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required configuration: {key}")]
    MissingRequired { key: String },

    #[error("Invalid domain '{domain}': must be a single path segment")]
    InvalidDomain { domain: String },

    #[error("Failed to parse certificate store {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Resolver '{resolver}' not found in certificate store (available: {available})")]
    ResolverNotFound { resolver: String, available: String },

    #[error("Resolver '{resolver}' has no \"Certificates\" list")]
    MissingCertificates { resolver: String },

    #[error("Certificate entry for {domain} has no '{field}' value")]
    MissingField { domain: String, field: &'static str },

    #[error("Invalid certificate entry #{index} under resolver '{resolver}': {message}")]
    InvalidEntry {
        resolver: String,
        index: usize,
        message: String,
    },
}

/// Certificate material decoding errors
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Invalid base64 in '{field}' for {domain}: {message}")]
    Base64 {
        domain: String,
        field: &'static str,
        message: String,
    },

    #[error("Decoded '{field}' for {domain} is not valid UTF-8")]
    Utf8 { domain: String, field: &'static str },
}

/// Result type alias using ExtractError
pub type Result<T> = std::result::Result<T, ExtractError>;
