//! Extraction settings

use crate::cli::Cli;
use crate::utils::ConfigError;
use std::path::{Component, Path, PathBuf};

/// Everything an extraction run needs to know
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Exact main-domain names to extract
    pub domains: Vec<String>,
    pub resolver_name: String,
    pub acme_json_path: PathBuf,
    pub out_dir: PathBuf,
}

impl Settings {
    pub fn new(
        domain: impl Into<String>,
        resolver_name: impl Into<String>,
        acme_json_path: impl Into<PathBuf>,
        out_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            domains: vec![domain.into()],
            resolver_name: resolver_name.into(),
            acme_json_path: acme_json_path.into(),
            out_dir: out_dir.into(),
        }
    }

    /// Build validated settings from parsed arguments
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let settings = Self::new(
            cli.domain.as_str(),
            cli.resolver_name.as_str(),
            &cli.acme_json_path,
            &cli.out_dir,
        );
        settings.validate()?;
        Ok(settings)
    }

    /// Reject blank values and domains that would not stay inside `out_dir`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.domains.is_empty() {
            return Err(missing("DOMAIN"));
        }
        for domain in &self.domains {
            if domain.trim().is_empty() {
                return Err(missing("DOMAIN"));
            }
            if !is_single_segment(domain) {
                return Err(ConfigError::InvalidDomain {
                    domain: domain.clone(),
                });
            }
        }
        if self.resolver_name.trim().is_empty() {
            return Err(missing("RESOLVER_NAME"));
        }
        if self.acme_json_path.as_os_str().is_empty() {
            return Err(missing("ACME_JSON_PATH"));
        }
        if self.out_dir.as_os_str().is_empty() {
            return Err(missing("OUT_DIR"));
        }
        Ok(())
    }
}

fn missing(key: &str) -> ConfigError {
    ConfigError::MissingRequired {
        key: key.to_string(),
    }
}

fn is_single_segment(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
