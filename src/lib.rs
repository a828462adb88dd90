//! acme-extract library
//!
//! Pulls one domain's certificate material out of an ACME `acme.json`
//! store and writes it as PEM files:
//! - `fullchain.pem`: leaf and intermediates, as stored
//! - `cert.pem`: the leaf certificate only
//! - `privkey.pem`: the private key
//!
//! # Usage
//!
//! ```rust,ignore
//! use acme_extract::{extract, Settings};
//!
//! let settings = Settings::new("example.com", "myresolver", "acme.json", "/certs");
//! settings.validate()?;
//! let report = extract::run(&settings)?;
//! println!("{:?}", report.matched());
//! ```

pub mod cli;
pub mod config;
pub mod extract;
pub mod output;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use cli::{Cli, OutputFormat};
pub use config::Settings;
pub use extract::{CertificateBundle, ExtractionReport};
pub use store::{CertificateEntry, CertificateStore};
pub use utils::{ConfigError, DecodeError, ExtractError, Result};
