//! Certificate store model
//!
//! Reads the `acme.json` document persisted by an ACME client and exposes
//! the certificate list of a single resolver. Only the fields needed for
//! extraction are modelled; everything else in the document is ignored.

use crate::utils::{ConfigError, ExtractError, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

/// Key under each resolver that holds its certificate list
pub const CERTIFICATES_KEY: &str = "Certificates";

/// Domain names covered by a certificate entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CertificateDomain {
    pub main: String,
    #[serde(default)]
    pub sans: Option<Vec<String>>,
}

/// One certificate entry of a resolver.
///
/// Only `domain` is required up front. The certificate material is checked
/// when the entry is extracted, so entries nobody asked for cannot fail a run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CertificateEntry {
    pub domain: CertificateDomain,
    /// Base64 of the PEM chain, leaf first
    #[serde(default)]
    pub certificate: Option<String>,
    /// Base64 of the PEM private key
    #[serde(default)]
    pub key: Option<String>,
    #[serde(rename = "Store", default)]
    pub store: Option<String>,
}

/// A parsed certificate store, keyed by resolver name
#[derive(Debug, Clone)]
pub struct CertificateStore {
    resolvers: Map<String, Value>,
}

impl CertificateStore {
    /// Read and parse a store file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ExtractError::io(path, e))?;
        Self::parse(&content, &path.display().to_string()).map_err(ExtractError::from)
    }

    /// Parse a store held in memory
    pub fn from_json(content: &str) -> std::result::Result<Self, ConfigError> {
        Self::parse(content, "<memory>")
    }

    fn parse(content: &str, origin: &str) -> std::result::Result<Self, ConfigError> {
        let document: Value =
            serde_json::from_str(content).map_err(|e| ConfigError::ParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        match document {
            Value::Object(resolvers) => Ok(Self { resolvers }),
            _ => Err(ConfigError::ParseError {
                path: origin.to_string(),
                message: "expected a JSON object keyed by resolver name".to_string(),
            }),
        }
    }

    /// Names of all resolvers in document order
    pub fn resolver_names(&self) -> impl Iterator<Item = &str> {
        self.resolvers.keys().map(String::as_str)
    }

    /// Certificate entries of `resolver`, in the order they are stored.
    ///
    /// A `null` certificate list is what ACME clients write for a resolver
    /// that never obtained a certificate, so it reads as empty. A missing
    /// key is an error.
    pub fn certificates(
        &self,
        resolver: &str,
    ) -> std::result::Result<Vec<CertificateEntry>, ConfigError> {
        let resolver_value =
            self.resolvers
                .get(resolver)
                .ok_or_else(|| ConfigError::ResolverNotFound {
                    resolver: resolver.to_string(),
                    available: self.resolver_names().collect::<Vec<_>>().join(", "),
                })?;

        let list = resolver_value
            .get(CERTIFICATES_KEY)
            .ok_or_else(|| ConfigError::MissingCertificates {
                resolver: resolver.to_string(),
            })?;

        let items = match list {
            Value::Null => return Ok(Vec::new()),
            Value::Array(items) => items,
            _ => {
                return Err(ConfigError::MissingCertificates {
                    resolver: resolver.to_string(),
                })
            }
        };

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                CertificateEntry::deserialize(item).map_err(|e| ConfigError::InvalidEntry {
                    resolver: resolver.to_string(),
                    index,
                    message: e.to_string(),
                })
            })
            .collect()
    }
}
