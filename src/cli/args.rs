//! CLI argument definitions using clap
//!
//! Every input is backed by an environment variable so the tool runs with
//! no arguments inside a container or cron job.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "acme-extract")]
#[command(author = "Russ McKendrick")]
#[command(version)]
#[command(
    about = "Extract PEM certificate files for a domain from an ACME acme.json store",
    long_about = None
)]
pub struct Cli {
    /// Domain whose certificate, key and chain are extracted
    #[arg(long, env = "DOMAIN", value_name = "DOMAIN")]
    pub domain: String,

    /// Resolver name the certificates are stored under
    #[arg(long = "resolver", env = "RESOLVER_NAME", value_name = "NAME")]
    pub resolver_name: String,

    /// Path to the acme.json certificate store
    #[arg(long = "acme-json", env = "ACME_JSON_PATH", value_name = "FILE")]
    pub acme_json_path: PathBuf,

    /// Base directory; files land in <OUT_DIR>/<DOMAIN>/
    #[arg(long, env = "OUT_DIR", value_name = "DIR")]
    pub out_dir: PathBuf,

    /// Summary format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable summary (default)
    Text,
    /// JSON report
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
