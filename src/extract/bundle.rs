//! Decoded certificate material
//!
//! Turns the base64 fields of a store entry into PEM text and separates the
//! leaf certificate from the rest of the chain.

use crate::store::CertificateEntry;
use crate::utils::{ConfigError, DecodeError, Result};
use base64::Engine;

/// Marker closing every PEM certificate block, newline included
pub const END_CERTIFICATE: &str = "-----END CERTIFICATE-----\n";

/// PEM material of one certificate entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateBundle {
    /// Decoded `certificate` field, verbatim
    pub fullchain: String,
    /// First certificate block of the chain
    pub leaf: String,
    /// Everything after the leaf; never written to disk
    pub chain: String,
    /// Decoded `key` field, verbatim
    pub private_key: String,
}

impl CertificateBundle {
    /// Decode both base64 fields of `entry`
    pub fn decode(entry: &CertificateEntry) -> Result<Self> {
        let domain = &entry.domain.main;
        let fullchain = decode_field(domain, "certificate", entry.certificate.as_deref())?;
        let private_key = decode_field(domain, "key", entry.key.as_deref())?;
        Ok(Self::from_pem(fullchain, private_key))
    }

    /// Build a bundle from already decoded PEM text
    pub fn from_pem(fullchain: String, private_key: String) -> Self {
        let (leaf, chain) = split_leaf(&fullchain);
        Self {
            fullchain,
            leaf,
            chain,
            private_key,
        }
    }

    /// Number of CERTIFICATE blocks the `pem` crate finds in the chain.
    ///
    /// Only used for diagnostics; unparseable text counts as zero.
    pub fn certificate_count(&self) -> usize {
        ::pem::parse_many(&self.fullchain)
            .map(|blocks| {
                blocks
                    .iter()
                    .filter(|block| block.tag() == "CERTIFICATE")
                    .count()
            })
            .unwrap_or(0)
    }
}

/// Split a PEM chain into the leaf certificate and the remainder.
///
/// The leaf is the text before the first [`END_CERTIFICATE`] marker with the
/// marker re-appended. Without any marker the whole text is taken as the
/// leaf and the marker is still appended.
pub fn split_leaf(fullchain: &str) -> (String, String) {
    match fullchain.split_once(END_CERTIFICATE) {
        Some((leaf, rest)) => (format!("{leaf}{END_CERTIFICATE}"), rest.to_string()),
        None => (format!("{fullchain}{END_CERTIFICATE}"), String::new()),
    }
}

/// Decode a standard-alphabet base64 field into UTF-8 text.
///
/// ASCII whitespace (line wrapping) is ignored.
fn decode_field(domain: &str, field: &'static str, value: Option<&str>) -> Result<String> {
    let value = value.ok_or_else(|| ConfigError::MissingField {
        domain: domain.to_string(),
        field,
    })?;
    let compact: String = value
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| DecodeError::Base64 {
            domain: domain.to_string(),
            field,
            message: e.to_string(),
        })?;

    let text = String::from_utf8(bytes).map_err(|_| DecodeError::Utf8 {
        domain: domain.to_string(),
        field,
    })?;
    Ok(text)
}
